//! Request and plan validation
//!
//! Business rules applied around the scheduler rather than inside it: the
//! scheduler guarantees per-day capacity by construction, these checks decide
//! whether a request is acceptable and whether a finished plan is good enough
//! to hand to a learner.

use thiserror::Error;

use crate::config::Limits;
use crate::domain::{StudyPlan, StudyRequest};
use crate::schedule::CAPACITY_EPSILON;

/// Shortest accepted subject, in characters
pub const MIN_SUBJECT_CHARS: usize = 2;

/// Longest accepted subject, in characters
pub const MAX_SUBJECT_CHARS: usize = 200;

/// A rule violated by a request or a plan
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Subject name is required")]
    EmptySubject,

    #[error("Subject must be between {min} and {max} characters, got {len}")]
    SubjectLength { len: usize, min: usize, max: usize },

    #[error("Hours per day must be greater than 0")]
    NonPositiveHours,

    #[error("Hours per day cannot exceed {max}, got {hours}")]
    TooManyHours { hours: f64, max: f64 },

    #[error("Total days must be between 1 and {max}, got {days}")]
    DaysOutOfRange { days: u32, max: u32 },

    #[error("Study plan should have at least {min} topics, got {count}")]
    TooFewTopics { count: usize, min: usize },

    #[error("Day {day} schedules {hours:.2}h, exceeding the daily limit of {limit}h")]
    DayOverCapacity { day: usize, hours: f64, limit: f64 },

    #[error("Timetable has {actual} days, expected {expected}")]
    DayCountMismatch { actual: usize, expected: u32 },
}

/// Check a request against the configured limits, stopping at the first
/// violation
pub fn validate_request(request: &StudyRequest, limits: &Limits) -> Result<(), ValidationError> {
    let subject = request.subject.trim();
    if subject.is_empty() {
        return Err(ValidationError::EmptySubject);
    }

    let len = subject.chars().count();
    if !(MIN_SUBJECT_CHARS..=MAX_SUBJECT_CHARS).contains(&len) {
        return Err(ValidationError::SubjectLength {
            len,
            min: MIN_SUBJECT_CHARS,
            max: MAX_SUBJECT_CHARS,
        });
    }

    if request.hours_per_day.is_nan() || request.hours_per_day <= 0.0 {
        return Err(ValidationError::NonPositiveHours);
    }
    if request.hours_per_day > limits.max_hours_per_day {
        return Err(ValidationError::TooManyHours {
            hours: request.hours_per_day,
            max: limits.max_hours_per_day,
        });
    }

    if request.total_days == 0 || request.total_days > limits.max_days {
        return Err(ValidationError::DaysOutOfRange {
            days: request.total_days,
            max: limits.max_days,
        });
    }

    Ok(())
}

/// Check a finished plan, returning every violation found
pub fn validate_plan(plan: &StudyPlan, limits: &Limits) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if plan.topics.len() < limits.min_topics {
        errors.push(ValidationError::TooFewTopics {
            count: plan.topics.len(),
            min: limits.min_topics,
        });
    }

    if plan.timetable.len() != plan.total_days as usize {
        errors.push(ValidationError::DayCountMismatch {
            actual: plan.timetable.len(),
            expected: plan.total_days,
        });
    }

    for (index, day) in plan.timetable.iter().enumerate() {
        let hours = day.total_hours();
        if hours > plan.hours_per_day + CAPACITY_EPSILON {
            errors.push(ValidationError::DayOverCapacity {
                day: index + 1,
                hours,
                limit: plan.hours_per_day,
            });
        }
    }

    errors
}
