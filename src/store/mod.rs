//! Content storage
//!
//! Handlers talk to a `ContentStore`; the backend is chosen at startup.
//! `PgStore` is used when `DATABASE_URL` is configured, `MemoryStore`
//! otherwise (and in tests).

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::error::{not_found_error, AppError};
use crate::models::{
    Achievement, CreateAchievementRequest, CreateEnrollmentRequest, Enrollment, EnrollmentStatus,
    Service,
};
use async_trait::async_trait;

#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Stored services in id order; empty when none have been configured
    async fn list_services(&self) -> Result<Vec<Service>, AppError>;

    /// Achievements, newest first
    async fn list_achievements(&self) -> Result<Vec<Achievement>, AppError>;

    async fn create_achievement(
        &self,
        request: CreateAchievementRequest,
    ) -> Result<Achievement, AppError>;

    /// Fails with `NotFound` when no achievement has this id
    async fn delete_achievement(&self, id: i32) -> Result<(), AppError>;

    /// Enrollments, newest first
    async fn list_enrollments(&self) -> Result<Vec<Enrollment>, AppError>;

    /// New enrollments always start as `pending`
    async fn create_enrollment(
        &self,
        request: CreateEnrollmentRequest,
    ) -> Result<Enrollment, AppError>;

    /// Fails with `NotFound` when no enrollment has this id
    async fn update_enrollment_status(
        &self,
        id: i32,
        status: EnrollmentStatus,
    ) -> Result<Enrollment, AppError>;
}

pub(crate) fn achievement_not_found(id: i32) -> AppError {
    not_found_error(format!("Achievement {} not found", id))
}

pub(crate) fn enrollment_not_found(id: i32) -> AppError {
    not_found_error(format!("Enrollment {} not found", id))
}
