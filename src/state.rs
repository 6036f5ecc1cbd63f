//! Application state management
//!
//! Contains shared state accessible across all handlers.

use crate::store::{ContentStore, MemoryStore};
use std::sync::Arc;

/// Application state shared across all handlers
pub struct AppState {
    /// Backing store for services, achievements and enrollments
    pub store: Arc<dyn ContentStore>,

    /// Shown by the API banner
    pub institute_name: String,
}

impl AppState {
    pub fn new(store: Arc<dyn ContentStore>, institute_name: impl Into<String>) -> Self {
        Self {
            store,
            institute_name: institute_name.into(),
        }
    }

    /// State over an empty in-memory store
    pub fn in_memory(institute_name: impl Into<String>) -> Self {
        Self::new(Arc::new(MemoryStore::new()), institute_name)
    }
}

/// Type alias for shared state
pub type SharedState = Arc<AppState>;
