//! SQL query constants
//!
//! Contains all SQL used by the Postgres store.

/// Schema bootstrap, executed in order at startup
pub const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS services (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        icon VARCHAR(50) NOT NULL DEFAULT 'wrench',
        featured BOOLEAN NOT NULL DEFAULT false
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS achievements (
        id SERIAL PRIMARY KEY,
        student_name TEXT NOT NULL,
        course_completed TEXT NOT NULL,
        photo_url TEXT,
        completion_date TEXT NOT NULL,
        testimonial TEXT,
        placed_at TEXT,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS enrollments (
        id SERIAL PRIMARY KEY,
        full_name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT NOT NULL,
        address TEXT,
        qualification TEXT,
        course TEXT NOT NULL,
        message TEXT,
        status VARCHAR(16) NOT NULL DEFAULT 'pending'
            CHECK (status IN ('pending', 'approved', 'rejected')),
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_achievements_created_at ON achievements(created_at DESC)",
    "CREATE INDEX IF NOT EXISTS idx_enrollments_created_at ON enrollments(created_at DESC)",
];

pub const LIST_SERVICES: &str = r#"
    SELECT id, name, description, icon, featured
    FROM services
    ORDER BY id
"#;

pub const LIST_ACHIEVEMENTS: &str = r#"
    SELECT id, student_name, course_completed, photo_url, completion_date,
           testimonial, placed_at, created_at
    FROM achievements
    ORDER BY created_at DESC, id DESC
"#;

pub const INSERT_ACHIEVEMENT: &str = r#"
    INSERT INTO achievements
        (student_name, course_completed, photo_url, completion_date, testimonial, placed_at)
    VALUES ($1, $2, $3, $4, $5, $6)
    RETURNING id, student_name, course_completed, photo_url, completion_date,
              testimonial, placed_at, created_at
"#;

pub const DELETE_ACHIEVEMENT: &str = "DELETE FROM achievements WHERE id = $1";

pub const LIST_ENROLLMENTS: &str = r#"
    SELECT id, full_name, email, phone, address, qualification, course,
           message, status, created_at
    FROM enrollments
    ORDER BY created_at DESC, id DESC
"#;

pub const INSERT_ENROLLMENT: &str = r#"
    INSERT INTO enrollments
        (full_name, email, phone, address, qualification, course, message, status)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
    RETURNING id, full_name, email, phone, address, qualification, course,
              message, status, created_at
"#;

pub const UPDATE_ENROLLMENT_STATUS: &str = r#"
    UPDATE enrollments SET status = $2
    WHERE id = $1
    RETURNING id, full_name, email, phone, address, qualification, course,
              message, status, created_at
"#;
