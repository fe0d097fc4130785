//! Session splitter - cuts topics into bounded-length session units

use std::collections::VecDeque;

use log::debug;

use crate::domain::{SessionUnit, Topic};

use super::CAPACITY_EPSILON;

/// Longest single session in hours
pub const MAX_SESSION_HOURS: f64 = 2.0;

/// Characters of the topic summary carried into a session description
const DESCRIPTION_SUMMARY_CHARS: usize = 100;

/// Sort topics into scheduling order: priority first, then difficulty
///
/// The sort is stable, so topics that tie keep their supplied order.
pub fn sort_topics(topics: &mut [Topic]) {
    topics.sort_by_key(Topic::schedule_key);
}

/// Cut one topic into session units of at most `MAX_SESSION_HOURS` and at
/// most `hours_per_day`
///
/// Unit durations sum to the topic's estimated hours. A topic with zero (or
/// negative) hours yields no units, and float drift never produces a unit of
/// `CAPACITY_EPSILON` or less.
pub fn split_topic(topic: &Topic, hours_per_day: f64) -> Vec<SessionUnit> {
    let limit = MAX_SESSION_HOURS.min(hours_per_day);
    let description = describe(topic);
    let suggested_time = topic.priority.suggested_time();

    let mut units = Vec::new();
    let mut remaining = topic.estimated_hours;
    while remaining > CAPACITY_EPSILON {
        // A leftover within epsilon of the cap joins this unit
        let mut duration = remaining.min(limit);
        if remaining - duration <= CAPACITY_EPSILON {
            duration = remaining;
        }
        units.push(SessionUnit {
            topic: topic.title.clone(),
            duration,
            priority: topic.priority,
            description: description.clone(),
            suggested_time: suggested_time.to_string(),
            activities: activities_for(&topic.title, duration),
        });
        remaining -= duration;
    }

    debug!("split '{}' ({}h) into {} session(s)", topic.title, topic.estimated_hours, units.len());
    units
}

/// Cut every topic into units, keeping topic order and each topic's units
/// contiguous
pub fn split_topics(topics: &[Topic], hours_per_day: f64) -> VecDeque<SessionUnit> {
    topics.iter().flat_map(|t| split_topic(t, hours_per_day)).collect()
}

/// Study activities sized to a session's length
pub fn activities_for(title: &str, duration: f64) -> Vec<String> {
    if duration >= 2.0 {
        vec![
            format!("Read and understand key concepts of {}", title),
            format!("Take detailed notes on {}", title),
            format!("Practice exercises related to {}", title),
            "Review and summarize learned material".to_string(),
        ]
    } else if duration >= 1.0 {
        vec![
            format!("Study core concepts of {}", title),
            "Take notes and highlight important points".to_string(),
            "Quick practice or review exercises".to_string(),
        ]
    } else {
        vec![
            format!("Quick review of {}", title),
            "Go through key points and examples".to_string(),
        ]
    }
}

fn describe(topic: &Topic) -> String {
    let summary: String = topic.summary.chars().take(DESCRIPTION_SUMMARY_CHARS).collect();
    format!("Study {}: {}...", topic.title, summary)
}
