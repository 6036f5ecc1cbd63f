//! Enrollment model
//!
//! A prospective student's course application. `status` is the only field
//! that changes after creation.

use super::{null_as_empty, trim_optional, trim_required};
use crate::extract::Normalize;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

/// Moderation status of an enrollment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl EnrollmentStatus {
    pub const ALL: [EnrollmentStatus; 3] = [
        EnrollmentStatus::Pending,
        EnrollmentStatus::Approved,
        EnrollmentStatus::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EnrollmentStatus::Pending => "pending",
            EnrollmentStatus::Approved => "approved",
            EnrollmentStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl std::fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid status '{}'. Must be one of: pending, approved, rejected",
            self.0
        )
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for EnrollmentStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub qualification: Option<String>,
    pub course: String,
    pub message: Option<String>,
    pub status: EnrollmentStatus,
    pub created_at: DateTime<Utc>,
}

/// Request submitted by the public enrollment form
///
/// Any `id` or `status` in the body is ignored; new enrollments are always
/// pending.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateEnrollmentRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email must be a valid address")
    )]
    pub email: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub qualification: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Course is required"))]
    pub course: String,

    #[serde(default)]
    pub message: Option<String>,
}

impl Normalize for CreateEnrollmentRequest {
    fn normalize(mut self) -> Self {
        trim_required(&mut self.full_name);
        trim_required(&mut self.email);
        trim_required(&mut self.phone);
        trim_required(&mut self.course);
        self.address = trim_optional(self.address);
        self.qualification = trim_optional(self.qualification);
        self.message = trim_optional(self.message);
        self
    }
}

/// Query string of `PATCH /enrollments/{id}/status`
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: Option<String>,
}

impl StatusQuery {
    pub fn parse(&self) -> Result<EnrollmentStatus, String> {
        match self.status.as_deref().map(str::trim) {
            None | Some("") => Err("Query parameter 'status' is required".to_string()),
            Some(raw) => raw.parse::<EnrollmentStatus>().map_err(|e| e.to_string()),
        }
    }
}
