//! Request extractors
//!
//! `ValidatedJson<T>` parses a JSON body, normalizes it and runs the
//! `validator` rules, turning every failure into an `AppError` so that
//! clients always receive the standard error envelope.

use crate::error::AppError;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Cleanup applied to a request body before validation
pub trait Normalize {
    fn normalize(self) -> Self;
}

/// JSON body that has passed normalization and validation
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Normalize,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;

        let payload = payload.normalize();
        payload.validate()?;
        Ok(ValidatedJson(payload))
    }
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            AppError::BadRequest("Expected request with `Content-Type: application/json`".to_string())
        }
        other => AppError::BadRequest(other.body_text()),
    }
}

/// Numeric `{id}` path segment
///
/// A non-numeric id is reported as a `BadRequest` in the standard envelope.
#[derive(Debug, Clone, Copy)]
pub struct PathId(pub i32);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        Ok(PathId(id))
    }
}
