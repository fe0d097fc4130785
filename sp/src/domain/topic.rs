//! Topic - a unit of subject matter with an estimated study time

use serde::{Deserialize, Serialize};

use super::{Difficulty, Priority};

/// A topic supplied by the content provider
///
/// Read-only input to the scheduler: only `priority`, `difficulty` and
/// `estimated_hours` influence ordering and packing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub title: String,
    pub summary: String,
    pub priority: Priority,
    pub difficulty: Difficulty,
    pub estimated_hours: f64,
    #[serde(default)]
    pub key_points: Vec<String>,
    #[serde(default)]
    pub resources: Vec<String>,
}

impl Topic {
    /// Create a topic with no key points or resources
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        priority: Priority,
        difficulty: Difficulty,
        estimated_hours: f64,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            priority,
            difficulty,
            estimated_hours,
            key_points: Vec::new(),
            resources: Vec::new(),
        }
    }

    /// Sort key: priority first, then difficulty
    pub fn schedule_key(&self) -> (Priority, Difficulty) {
        (self.priority, self.difficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_key_orders_priority_before_difficulty() {
        let hard_high = Topic::new("A", "", Priority::High, Difficulty::Hard, 1.0);
        let easy_medium = Topic::new("B", "", Priority::Medium, Difficulty::Easy, 1.0);
        assert!(hard_high.schedule_key() < easy_medium.schedule_key());
    }

    #[test]
    fn test_topic_deserialize_camel_case() {
        let json = r#"{
            "title": "Closures",
            "summary": "Capturing environment",
            "priority": "high",
            "difficulty": "medium",
            "estimatedHours": 2.5,
            "keyPoints": ["move", "Fn traits"]
        }"#;

        let topic: Topic = serde_json::from_str(json).unwrap();
        assert_eq!(topic.title, "Closures");
        assert_eq!(topic.estimated_hours, 2.5);
        assert_eq!(topic.key_points.len(), 2);
        assert!(topic.resources.is_empty());
    }

    #[test]
    fn test_topic_rejects_unknown_priority() {
        let json = r#"{"title":"X","summary":"","priority":"urgent","difficulty":"easy","estimatedHours":1}"#;
        assert!(serde_json::from_str::<Topic>(json).is_err());
    }
}
