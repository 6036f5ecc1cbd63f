//! In-memory content store

use super::{achievement_not_found, enrollment_not_found, ContentStore};
use crate::error::AppError;
use crate::models::{
    Achievement, CreateAchievementRequest, CreateEnrollmentRequest, Enrollment, EnrollmentStatus,
    Service,
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Collections {
    services: Vec<Service>,
    /// Insertion order; listing reverses it
    achievements: Vec<Achievement>,
    enrollments: Vec<Enrollment>,
    next_achievement_id: i32,
    next_enrollment_id: i32,
}

impl Collections {
    fn next_achievement_id(&mut self) -> i32 {
        self.next_achievement_id += 1;
        self.next_achievement_id
    }

    fn next_enrollment_id(&mut self) -> i32 {
        self.next_enrollment_id += 1;
        self.next_enrollment_id
    }
}

/// Thread-safe content store with no persistence
///
/// Ids are never reused after a delete.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Collections>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with a service list
    pub fn with_services(services: Vec<Service>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Collections {
                services,
                ..Default::default()
            })),
        }
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn list_services(&self) -> Result<Vec<Service>, AppError> {
        let inner = self.inner.read().await;
        let mut services = inner.services.clone();
        services.sort_by_key(|s| s.id);
        Ok(services)
    }

    async fn list_achievements(&self) -> Result<Vec<Achievement>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.achievements.iter().rev().cloned().collect())
    }

    async fn create_achievement(
        &self,
        request: CreateAchievementRequest,
    ) -> Result<Achievement, AppError> {
        let mut inner = self.inner.write().await;
        let achievement = Achievement {
            id: inner.next_achievement_id(),
            student_name: request.student_name,
            course_completed: request.course_completed,
            photo_url: request.photo_url,
            completion_date: request.completion_date,
            testimonial: request.testimonial,
            placed_at: request.placed_at,
            created_at: Utc::now(),
        };
        inner.achievements.push(achievement.clone());
        Ok(achievement)
    }

    async fn delete_achievement(&self, id: i32) -> Result<(), AppError> {
        let mut inner = self.inner.write().await;
        let index = inner
            .achievements
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| achievement_not_found(id))?;
        inner.achievements.remove(index);
        Ok(())
    }

    async fn list_enrollments(&self) -> Result<Vec<Enrollment>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.enrollments.iter().rev().cloned().collect())
    }

    async fn create_enrollment(
        &self,
        request: CreateEnrollmentRequest,
    ) -> Result<Enrollment, AppError> {
        let mut inner = self.inner.write().await;
        let enrollment = Enrollment {
            id: inner.next_enrollment_id(),
            full_name: request.full_name,
            email: request.email,
            phone: request.phone,
            address: request.address,
            qualification: request.qualification,
            course: request.course,
            message: request.message,
            status: EnrollmentStatus::Pending,
            created_at: Utc::now(),
        };
        inner.enrollments.push(enrollment.clone());
        Ok(enrollment)
    }

    async fn update_enrollment_status(
        &self,
        id: i32,
        status: EnrollmentStatus,
    ) -> Result<Enrollment, AppError> {
        let mut inner = self.inner.write().await;
        let enrollment = inner
            .enrollments
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| enrollment_not_found(id))?;
        enrollment.status = status;
        Ok(enrollment.clone())
    }
}
