//! Route definitions and router setup
//!
//! Configures all API routes and middleware.

mod achievement;
mod catalog;
mod enrollment;

use crate::config::Settings;
use crate::state::SharedState;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, patch},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::MakeRequestUuid,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
    ServiceBuilderExt,
};
use tracing::{warn, Level};

/// Create the application router with all routes and middleware
pub fn create_router(state: SharedState, settings: &Settings) -> Router {
    let cors = build_cors_layer(settings);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let middleware = ServiceBuilder::new()
        .set_x_request_id(MakeRequestUuid)
        .layer(trace_layer)
        .layer(CompressionLayer::new())
        .layer(cors)
        .propagate_x_request_id();

    Router::new()
        .route("/health", get(health_check))
        .route("/api", get(catalog::root))
        .route("/api/", get(catalog::root))
        // Public catalog
        .route("/api/services", get(catalog::list_services))
        .route("/api/courses", get(catalog::list_courses))
        // Achievements
        .route(
            "/api/achievements",
            get(achievement::list_achievements).post(achievement::create_achievement),
        )
        .route("/api/achievements/{id}", delete(achievement::delete_achievement))
        // Enrollments
        .route(
            "/api/enrollments",
            get(enrollment::list_enrollments).post(enrollment::create_enrollment),
        )
        .route(
            "/api/enrollments/{id}/status",
            patch(enrollment::update_enrollment_status),
        )
        .layer(middleware)
        .with_state(state)
}

/// Build CORS layer from settings
fn build_cors_layer(settings: &Settings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .cors
        .allowed_origins
        .iter()
        .filter_map(|s| match s.parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                warn!("Ignoring unparsable CORS origin '{}'", s);
                None
            }
        })
        .collect();

    // A configured list with no usable entries allows no origin
    if origins.is_empty() && !settings.cors.allowed_origins.is_empty() {
        warn!("No usable CORS origins configured, cross-origin requests will be refused");
        return CorsLayer::new();
    }

    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    if origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins)
    }
}

/// Health check endpoint
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "success": true,
        "message": "Server is running fine.",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
