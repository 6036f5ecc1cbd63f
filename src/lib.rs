//! Repair Academy Content API
//!
//! REST backend for a mobile-repair training institute's website: public
//! catalog (services, courses), published student achievements and course
//! enrollments with a moderation status.

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
