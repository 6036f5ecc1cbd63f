//! Achievement route handlers
//!
//! Used by the public achievements section and the admin dashboard.

use crate::error::ApiResult;
use crate::extract::{PathId, ValidatedJson};
use crate::models::{Achievement, CreateAchievementRequest, MessageResponse};
use crate::state::SharedState;
use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, info};

/// List achievements, newest first
pub async fn list_achievements(
    State(state): State<SharedState>,
) -> ApiResult<Json<Vec<Achievement>>> {
    let achievements = state.store.list_achievements().await?;
    debug!("Found {} achievements", achievements.len());
    Ok(Json(achievements))
}

/// Publish a new achievement
pub async fn create_achievement(
    State(state): State<SharedState>,
    ValidatedJson(payload): ValidatedJson<CreateAchievementRequest>,
) -> ApiResult<(StatusCode, Json<Achievement>)> {
    debug!("Creating achievement for: {}", payload.student_name);

    let achievement = state.store.create_achievement(payload).await?;

    info!(
        "Achievement created: {} (id: {})",
        achievement.student_name, achievement.id
    );
    Ok((StatusCode::CREATED, Json(achievement)))
}

/// Delete an achievement
pub async fn delete_achievement(
    State(state): State<SharedState>,
    PathId(id): PathId,
) -> ApiResult<Json<MessageResponse>> {
    debug!("Deleting achievement: {}", id);

    state.store.delete_achievement(id).await?;

    info!("Achievement {} deleted", id);
    Ok(Json(MessageResponse::new("Achievement deleted successfully")))
}
