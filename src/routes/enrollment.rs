//! Enrollment route handlers

use crate::error::{validation_error, ApiResult, AppError};
use crate::extract::{PathId, ValidatedJson};
use crate::models::{CreateEnrollmentRequest, Enrollment, StatusQuery};
use crate::state::SharedState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

/// List enrollments, newest first
pub async fn list_enrollments(
    State(state): State<SharedState>,
) -> ApiResult<Json<Vec<Enrollment>>> {
    let enrollments = state.store.list_enrollments().await?;
    debug!("Found {} enrollments", enrollments.len());
    Ok(Json(enrollments))
}

/// Submit an enrollment; it always starts as pending
pub async fn create_enrollment(
    State(state): State<SharedState>,
    ValidatedJson(payload): ValidatedJson<CreateEnrollmentRequest>,
) -> ApiResult<(StatusCode, Json<Enrollment>)> {
    debug!("Creating enrollment for course: {}", payload.course);

    let enrollment = state.store.create_enrollment(payload).await?;

    info!(
        "Enrollment created: {} for '{}' (id: {})",
        enrollment.full_name, enrollment.course, enrollment.id
    );
    Ok((StatusCode::CREATED, Json(enrollment)))
}

/// Move an enrollment to any status
pub async fn update_enrollment_status(
    State(state): State<SharedState>,
    PathId(id): PathId,
    query: Result<Query<StatusQuery>, QueryRejection>,
) -> ApiResult<Json<Enrollment>> {
    let Query(query) = query.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let status = query.parse().map_err(validation_error)?;

    debug!("Updating enrollment {} status to {}", id, status);

    let enrollment = state.store.update_enrollment_status(id, status).await?;

    info!("Enrollment {} status updated to {}", id, enrollment.status);
    Ok(Json(enrollment))
}
