//! Data models and DTOs (Data Transfer Objects)
//!
//! Contains the content entities and the request structures used by the API.

pub mod achievement;
pub mod course;
pub mod enrollment;
pub mod service;

// Re-export commonly used types
pub use achievement::*;
pub use course::*;
pub use enrollment::*;
pub use service::*;

use serde::{Deserialize, Deserializer, Serialize};

/// Message-only response (no data)
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Required text field where `null` counts as missing, like an absent key
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Trim a required field in place
pub(crate) fn trim_required(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

/// Trim an optional field; blank strings become `None`
pub(crate) fn trim_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
