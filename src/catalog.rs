//! Built-in catalog
//!
//! Courses are fixed. Services are served from the store and fall back to
//! the defaults below while the store holds none.

use crate::models::{Course, Service, ServiceIcon};
use once_cell::sync::Lazy;

static DEFAULT_SERVICES: Lazy<Vec<Service>> = Lazy::new(|| {
    [
        (
            "Basic Mobile Repair",
            "Screen replacement, battery change, charging port repair and basic troubleshooting",
            ServiceIcon::Smartphone,
            false,
        ),
        (
            "Smartphone Repair",
            "Advanced smartphone repairs including software issues, camera repairs, and water damage recovery",
            ServiceIcon::Wrench,
            true,
        ),
        (
            "Motherboard Repair",
            "Chip-level repair and motherboard replacement for all mobile brands",
            ServiceIcon::Cpu,
            true,
        ),
        (
            "Software Solutions",
            "OS installation, software updates, virus removal, and data recovery services",
            ServiceIcon::Code,
            false,
        ),
        (
            "Tablet Repair",
            "Complete tablet repair services including screen, battery, and hardware issues",
            ServiceIcon::Tablet,
            false,
        ),
        (
            "Accessories",
            "Quality mobile accessories, screen guards, cases, and charging equipment",
            ServiceIcon::Package,
            false,
        ),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, description, icon, featured), id)| Service {
        id,
        name: name.to_string(),
        description: description.to_string(),
        icon,
        featured,
    })
    .collect()
});

static COURSES: Lazy<Vec<Course>> = Lazy::new(|| {
    [
        (
            "Basic Mobile Repair Course",
            "2 Months",
            "Learn fundamental mobile repair techniques",
        ),
        (
            "Advanced Smartphone Repair",
            "3 Months",
            "Master advanced smartphone troubleshooting and repair",
        ),
        (
            "Chip Level / Motherboard Repair",
            "4 Months",
            "Expert-level chip and motherboard repair training",
        ),
        (
            "Complete Mobile Technician Course",
            "6 Months",
            "Comprehensive course covering all aspects of mobile repair",
        ),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, duration, description), id)| Course {
        id,
        name: name.to_string(),
        description: description.to_string(),
        duration: duration.to_string(),
    })
    .collect()
});

pub fn default_services() -> &'static [Service] {
    &DEFAULT_SERVICES
}

pub fn courses() -> &'static [Course] {
    &COURSES
}

/// Stored services, or the defaults when nothing is stored
pub fn services_or_default(stored: Vec<Service>) -> Vec<Service> {
    if stored.is_empty() {
        default_services().to_vec()
    } else {
        stored
    }
}
