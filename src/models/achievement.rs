//! Achievement model
//!
//! A published student success story, created from the admin dashboard.

use super::{null_as_empty, trim_optional, trim_required};
use crate::extract::Normalize;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: i32,
    pub student_name: String,
    pub course_completed: String,
    pub photo_url: Option<String>,
    pub completion_date: String,
    pub testimonial: Option<String>,
    pub placed_at: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request to publish a new achievement
///
/// Missing or `null` required fields deserialize to empty strings so that
/// they are reported by validation rather than by the JSON parser.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateAchievementRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Student name is required"))]
    pub student_name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Course completed is required"))]
    pub course_completed: String,

    /// Free text: absolute URLs, site paths and bare file names are all kept
    #[serde(default)]
    pub photo_url: Option<String>,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Completion date is required"))]
    pub completion_date: String,

    #[serde(default)]
    pub testimonial: Option<String>,

    #[serde(default)]
    pub placed_at: Option<String>,
}

impl Normalize for CreateAchievementRequest {
    fn normalize(mut self) -> Self {
        trim_required(&mut self.student_name);
        trim_required(&mut self.course_completed);
        trim_required(&mut self.completion_date);
        self.photo_url = trim_optional(self.photo_url);
        self.testimonial = trim_optional(self.testimonial);
        self.placed_at = trim_optional(self.placed_at);
        self
    }
}
