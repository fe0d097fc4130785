//! Request and response envelope around a built timetable

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{DayPlan, Topic};

/// Default plan horizon in days
pub const DEFAULT_TOTAL_DAYS: u32 = 7;

fn default_total_days() -> u32 {
    DEFAULT_TOTAL_DAYS
}

/// What the learner asked for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyRequest {
    pub subject: String,
    pub hours_per_day: f64,
    #[serde(default = "default_total_days")]
    pub total_days: u32,
}

impl StudyRequest {
    pub fn new(subject: impl Into<String>, hours_per_day: f64, total_days: u32) -> Self {
        Self {
            subject: subject.into(),
            hours_per_day,
            total_days,
        }
    }
}

/// A complete study plan: topics in scheduling order plus the timetable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlan {
    pub subject: String,
    pub hours_per_day: f64,
    pub total_days: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    pub topics: Vec<Topic>,
    pub timetable: Vec<DayPlan>,
    pub generated_at: DateTime<Utc>,
}

impl StudyPlan {
    /// Sum of estimated hours over all topics
    pub fn estimated_hours(&self) -> f64 {
        self.topics.iter().map(|t| t.estimated_hours).sum()
    }

    /// Sum of scheduled session hours over all days
    pub fn scheduled_hours(&self) -> f64 {
        self.timetable.iter().map(DayPlan::total_hours).sum()
    }
}
