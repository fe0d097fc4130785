//! Scheduling error types

use thiserror::Error;

/// Precondition failures raised before any day plan is built
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("Hours per day must be a positive number, got {0}")]
    InvalidHoursPerDay(f64),

    #[error("Total days must be at least 1")]
    InvalidTotalDays,

    #[error("Topic '{title}' has invalid estimated hours: {hours}")]
    InvalidEstimatedHours { title: String, hours: f64 },
}
