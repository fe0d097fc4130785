//! Session units, day plans and the finished schedule

use serde::{Deserialize, Serialize};

use super::Priority;

/// Number of activities a partial session keeps when a unit is split
pub const SPLIT_ACTIVITY_COUNT: usize = 2;

/// A bounded-length chunk of one topic's study time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUnit {
    /// Title of the parent topic
    pub topic: String,
    /// Length in hours
    pub duration: f64,
    pub priority: Priority,
    pub description: String,
    pub suggested_time: String,
    #[serde(default)]
    pub activities: Vec<String>,
}

impl SessionUnit {
    /// Split into a leading piece of `hours` and the residual
    ///
    /// The leading piece keeps the first two activities, the residual keeps
    /// the rest, and the two durations sum to the original.
    pub fn split_at(self, hours: f64) -> (SessionUnit, SessionUnit) {
        let cut = SPLIT_ACTIVITY_COUNT.min(self.activities.len());
        let mut head_activities = self.activities;
        let tail_activities = head_activities.split_off(cut);

        let head = SessionUnit {
            topic: self.topic.clone(),
            duration: hours,
            priority: self.priority,
            description: self.description.clone(),
            suggested_time: self.suggested_time.clone(),
            activities: head_activities,
        };
        let tail = SessionUnit {
            topic: self.topic,
            duration: self.duration - hours,
            priority: self.priority,
            description: self.description,
            suggested_time: self.suggested_time,
            activities: tail_activities,
        };
        (head, tail)
    }
}

/// Sessions assigned to one day of the plan, plus notes for the learner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub sessions: Vec<SessionUnit>,
    #[serde(default)]
    pub notes: String,
}

impl DayPlan {
    /// Total scheduled hours for the day
    pub fn total_hours(&self) -> f64 {
        total_hours(&self.sessions)
    }

    /// Number of high-priority sessions in the day
    pub fn high_priority_count(&self) -> usize {
        high_priority_count(&self.sessions)
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

pub(crate) fn total_hours(sessions: &[SessionUnit]) -> f64 {
    sessions.iter().map(|s| s.duration).sum()
}

pub(crate) fn high_priority_count(sessions: &[SessionUnit]) -> usize {
    sessions.iter().filter(|s| s.priority == Priority::High).count()
}

/// Output of a packing pass
///
/// `days` always has one entry per day of the horizon. Units that did not fit
/// before the horizon ended are kept in `unscheduled` so callers can report
/// them; they are not part of the timetable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub days: Vec<DayPlan>,
    #[serde(default)]
    pub unscheduled: Vec<SessionUnit>,
}

impl Schedule {
    /// Total hours across all days
    pub fn scheduled_hours(&self) -> f64 {
        self.days.iter().map(DayPlan::total_hours).sum()
    }

    /// Hours that were dropped at the end of the horizon
    pub fn unscheduled_hours(&self) -> f64 {
        total_hours(&self.unscheduled)
    }

    pub fn session_count(&self) -> usize {
        self.days.iter().map(|d| d.sessions.len()).sum()
    }

    pub fn into_days(self) -> Vec<DayPlan> {
        self.days
    }
}
