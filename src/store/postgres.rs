//! PostgreSQL content store

use super::{achievement_not_found, enrollment_not_found, ContentStore};
use crate::db::queries::{
    DELETE_ACHIEVEMENT, INSERT_ACHIEVEMENT, INSERT_ENROLLMENT, LIST_ACHIEVEMENTS,
    LIST_ENROLLMENTS, LIST_SERVICES, UPDATE_ENROLLMENT_STATUS,
};
use crate::error::AppError;
use crate::models::{
    Achievement, CreateAchievementRequest, CreateEnrollmentRequest, Enrollment, EnrollmentStatus,
    Service, ServiceIcon,
};
use async_trait::async_trait;
use deadpool_postgres::Pool;
use tokio_postgres::Row;
use tracing::{debug, error};

pub struct PgStore {
    pool: Pool,
}

impl PgStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

fn service_from_row(row: &Row) -> Service {
    let icon: String = row.get("icon");
    Service {
        id: row.get("id"),
        name: row.get("name"),
        description: row.get("description"),
        icon: ServiceIcon::from_key(&icon),
        featured: row.get("featured"),
    }
}

fn achievement_from_row(row: &Row) -> Achievement {
    Achievement {
        id: row.get("id"),
        student_name: row.get("student_name"),
        course_completed: row.get("course_completed"),
        photo_url: row.get("photo_url"),
        completion_date: row.get("completion_date"),
        testimonial: row.get("testimonial"),
        placed_at: row.get("placed_at"),
        created_at: row.get("created_at"),
    }
}

fn enrollment_from_row(row: &Row) -> Result<Enrollment, AppError> {
    let status: String = row.get("status");
    let status = status.parse::<EnrollmentStatus>().map_err(|e| {
        error!("Corrupt enrollment row: {}", e);
        AppError::Internal(e.to_string())
    })?;

    Ok(Enrollment {
        id: row.get("id"),
        full_name: row.get("full_name"),
        email: row.get("email"),
        phone: row.get("phone"),
        address: row.get("address"),
        qualification: row.get("qualification"),
        course: row.get("course"),
        message: row.get("message"),
        status,
        created_at: row.get("created_at"),
    })
}

#[async_trait]
impl ContentStore for PgStore {
    async fn list_services(&self) -> Result<Vec<Service>, AppError> {
        let client = self.pool.get().await?;
        let rows = client.query(LIST_SERVICES, &[]).await?;
        Ok(rows.iter().map(service_from_row).collect())
    }

    async fn list_achievements(&self) -> Result<Vec<Achievement>, AppError> {
        let client = self.pool.get().await?;
        let rows = client.query(LIST_ACHIEVEMENTS, &[]).await?;
        Ok(rows.iter().map(achievement_from_row).collect())
    }

    async fn create_achievement(
        &self,
        request: CreateAchievementRequest,
    ) -> Result<Achievement, AppError> {
        let client = self.pool.get().await?;
        let row = client
            .query_one(
                INSERT_ACHIEVEMENT,
                &[
                    &request.student_name,
                    &request.course_completed,
                    &request.photo_url,
                    &request.completion_date,
                    &request.testimonial,
                    &request.placed_at,
                ],
            )
            .await?;
        Ok(achievement_from_row(&row))
    }

    async fn delete_achievement(&self, id: i32) -> Result<(), AppError> {
        let client = self.pool.get().await?;
        let deleted = client.execute(DELETE_ACHIEVEMENT, &[&id]).await?;
        debug!("Deleted {} achievement row(s) for id {}", deleted, id);

        if deleted == 0 {
            return Err(achievement_not_found(id));
        }
        Ok(())
    }

    async fn list_enrollments(&self) -> Result<Vec<Enrollment>, AppError> {
        let client = self.pool.get().await?;
        let rows = client.query(LIST_ENROLLMENTS, &[]).await?;
        rows.iter().map(enrollment_from_row).collect()
    }

    async fn create_enrollment(
        &self,
        request: CreateEnrollmentRequest,
    ) -> Result<Enrollment, AppError> {
        let client = self.pool.get().await?;
        let row = client
            .query_one(
                INSERT_ENROLLMENT,
                &[
                    &request.full_name,
                    &request.email,
                    &request.phone,
                    &request.address,
                    &request.qualification,
                    &request.course,
                    &request.message,
                    &EnrollmentStatus::Pending.as_str(),
                ],
            )
            .await?;
        enrollment_from_row(&row)
    }

    async fn update_enrollment_status(
        &self,
        id: i32,
        status: EnrollmentStatus,
    ) -> Result<Enrollment, AppError> {
        let client = self.pool.get().await?;
        let row = client
            .query_opt(UPDATE_ENROLLMENT_STATUS, &[&id, &status.as_str()])
            .await?
            .ok_or_else(|| enrollment_not_found(id))?;
        enrollment_from_row(&row)
    }
}
