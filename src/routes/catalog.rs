//! Public catalog handlers: API banner, services and courses

use crate::catalog;
use crate::error::ApiResult;
use crate::models::{Course, MessageResponse, Service};
use crate::state::SharedState;
use axum::{extract::State, Json};
use tracing::debug;

/// API banner
pub async fn root(State(state): State<SharedState>) -> Json<MessageResponse> {
    Json(MessageResponse::new(format!("{} API", state.institute_name)))
}

/// List services, falling back to the built-in defaults
pub async fn list_services(State(state): State<SharedState>) -> ApiResult<Json<Vec<Service>>> {
    let stored = state.store.list_services().await?;
    debug!("Listing services ({} stored)", stored.len());
    Ok(Json(catalog::services_or_default(stored)))
}

/// List courses
pub async fn list_courses() -> Json<Vec<Course>> {
    Json(catalog::courses().to_vec())
}
