//! Course model

use serde::{Deserialize, Serialize};

/// A training offering shown on the marketing page and the enrollment form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub duration: String,
}
