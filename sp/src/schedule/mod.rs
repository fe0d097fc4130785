//! Timetable construction
//!
//! Topics are split into session units ([`splitter`]), packed into days
//! ([`packer`]) and each day is given notes ([`annotate`]). Every call works
//! on its own queue; nothing is shared between invocations.

pub mod annotate;
pub mod packer;
pub mod splitter;

use chrono::Utc;
use log::info;

use crate::domain::{Capacity, Schedule, StudyPlan, StudyRequest, Topic};
use crate::error::PlanError;

pub use annotate::{LONG_DAY_HOURS, day_notes};
pub use packer::{MIN_SPLIT_HOURS, pack_days};
pub use splitter::{MAX_SESSION_HOURS, activities_for, sort_topics, split_topic, split_topics};

/// Floating-point tolerance for capacity comparisons, in hours
pub const CAPACITY_EPSILON: f64 = 1e-6;

/// Build the timetable for topics already in scheduling order
///
/// Fails before building anything if a topic has a negative or non-finite
/// estimate. Topics that do not fit in the horizon end up in
/// `Schedule::unscheduled`.
pub fn build_schedule(topics: &[Topic], capacity: Capacity) -> Result<Schedule, PlanError> {
    check_topics(topics)?;

    let estimated: f64 = topics.iter().map(|t| t.estimated_hours).sum();
    if estimated > capacity.total_hours() + CAPACITY_EPSILON {
        info!(
            "topics need {:.2}h but only {:.2}h are available; the tail of the plan will not fit",
            estimated,
            capacity.total_hours()
        );
    }

    let queue = split_topics(topics, capacity.hours_per_day);
    info!(
        "packing {} session unit(s) from {} topic(s) into {} day(s) of {}h",
        queue.len(),
        topics.len(),
        capacity.total_days,
        capacity.hours_per_day
    );
    Ok(pack_days(queue, capacity))
}

/// Sort topics, build the timetable and wrap it in a `StudyPlan`
pub fn build_plan(request: &StudyRequest, mut topics: Vec<Topic>) -> Result<StudyPlan, PlanError> {
    let capacity = Capacity::new(request.hours_per_day, request.total_days)?;
    sort_topics(&mut topics);

    let schedule = build_schedule(&topics, capacity)?;

    Ok(StudyPlan {
        subject: request.subject.trim().to_string(),
        hours_per_day: request.hours_per_day,
        total_days: request.total_days,
        overview: None,
        topics,
        timetable: schedule.into_days(),
        generated_at: Utc::now(),
    })
}

fn check_topics(topics: &[Topic]) -> Result<(), PlanError> {
    match topics
        .iter()
        .find(|t| !t.estimated_hours.is_finite() || t.estimated_hours < 0.0)
    {
        Some(t) => Err(PlanError::InvalidEstimatedHours {
            title: t.title.clone(),
            hours: t.estimated_hours,
        }),
        None => Ok(()),
    }
}
