//! Day packer - greedy per-day fill with split-and-carry
//!
//! Each day takes units from the front of the queue while they fit. A unit
//! that does not fit is split when at least `MIN_SPLIT_HOURS` remain in the
//! day; the residual goes back to the front of the queue so a topic's pieces
//! stay contiguous. Units still queued when the horizon ends are returned in
//! `Schedule::unscheduled`.

use std::collections::VecDeque;

use log::{debug, warn};

use crate::domain::{Capacity, DayPlan, Schedule, SessionUnit};

use super::CAPACITY_EPSILON;
use super::annotate::day_notes;

/// Smallest partial session worth cutting, in hours
pub const MIN_SPLIT_HOURS: f64 = 0.5;

/// Pack queued session units into exactly `capacity.total_days` days
pub fn pack_days(mut queue: VecDeque<SessionUnit>, capacity: Capacity) -> Schedule {
    let total_days = capacity.total_days as usize;
    let mut days = Vec::with_capacity(total_days);

    for day_index in 0..total_days {
        let sessions = fill_day(&mut queue, capacity.hours_per_day);
        debug!(
            "day {}: {} session(s), {} unit(s) still queued",
            day_index + 1,
            sessions.len(),
            queue.len()
        );
        let notes = day_notes(&sessions, day_index, total_days);
        days.push(DayPlan { sessions, notes });
    }

    let unscheduled: Vec<SessionUnit> = queue.into_iter().collect();
    if !unscheduled.is_empty() {
        let hours: f64 = unscheduled.iter().map(|u| u.duration).sum();
        warn!(
            "{} session(s) totalling {:.2}h did not fit in {} day(s) and were dropped",
            unscheduled.len(),
            hours,
            total_days
        );
    }

    Schedule { days, unscheduled }
}

/// Fill one day from the front of the queue
fn fill_day(queue: &mut VecDeque<SessionUnit>, hours_per_day: f64) -> Vec<SessionUnit> {
    let mut sessions = Vec::new();
    let mut used = 0.0;

    while hours_per_day - used > CAPACITY_EPSILON {
        let Some(unit) = queue.pop_front() else {
            break;
        };

        if used + unit.duration <= hours_per_day + CAPACITY_EPSILON {
            used += unit.duration;
            sessions.push(unit);
            continue;
        }

        let remaining = hours_per_day - used;
        if remaining >= MIN_SPLIT_HOURS {
            let (partial, residual) = unit.split_at(remaining);
            debug!(
                "split '{}' into {:.2}h today and {:.2}h carried forward",
                partial.topic, partial.duration, residual.duration
            );
            sessions.push(partial);
            queue.push_front(residual);
        } else {
            queue.push_front(unit);
        }
        break;
    }

    sessions
}
