//! Topic file loading
//!
//! Accepts YAML or JSON (JSON parses as YAML), either a bare list of topics
//! or a document with a `topics` key.

use eyre::{Context, Result};
use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::domain::Topic;

#[derive(Deserialize)]
#[serde(untagged)]
enum TopicDocument {
    List(Vec<Topic>),
    Wrapped { topics: Vec<Topic> },
}

/// Parse topics from YAML or JSON text
pub fn parse_topics(content: &str) -> Result<Vec<Topic>> {
    let document: TopicDocument = serde_yaml::from_str(content).context("Failed to parse topics")?;
    Ok(match document {
        TopicDocument::List(topics) => topics,
        TopicDocument::Wrapped { topics } => topics,
    })
}

/// Load topics from a file
pub fn load_topics<P: AsRef<Path>>(path: P) -> Result<Vec<Topic>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).context(format!("Failed to read topics from {}", path.display()))?;
    let topics = parse_topics(&content).context(format!("Invalid topic file {}", path.display()))?;

    debug!("loaded {} topic(s) from {}", topics.len(), path.display());
    Ok(topics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Difficulty, Priority};
    use tempfile::TempDir;

    const YAML_TOPICS: &str = r#"
topics:
  - title: Variables and Data Types
    summary: Learn about JavaScript variables
    priority: high
    difficulty: easy
    estimatedHours: 2
    keyPoints: ["var, let, const", "data types"]
  - title: DOM Manipulation
    summary: Learn about DOM manipulation
    priority: low
    difficulty: medium
    estimatedHours: 3
"#;

    #[test]
    fn test_parse_wrapped_yaml() {
        let topics = parse_topics(YAML_TOPICS).unwrap();
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].priority, Priority::High);
        assert_eq!(topics[0].key_points.len(), 2);
        assert_eq!(topics[1].difficulty, Difficulty::Medium);
        assert_eq!(topics[1].estimated_hours, 3.0);
    }

    #[test]
    fn test_parse_bare_json_list() {
        let json = r#"[{"title":"Arrays","summary":"Array methods","priority":"medium","difficulty":"easy","estimatedHours":1.5}]"#;
        let topics = parse_topics(json).unwrap();
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].title, "Arrays");
    }

    #[test]
    fn test_parse_rejects_bad_priority() {
        let yaml = "- title: X\n  summary: Y\n  priority: urgent\n  difficulty: easy\n  estimatedHours: 1\n";
        assert!(parse_topics(yaml).is_err());
    }

    #[test]
    fn test_load_topics_reports_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing.yml");

        let err = load_topics(&path).unwrap_err();
        assert!(format!("{:?}", err).contains("missing.yml"));
    }

    #[test]
    fn test_load_topics_from_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("topics.yml");
        fs::write(&path, YAML_TOPICS).unwrap();

        assert_eq!(load_topics(&path).unwrap().len(), 2);
    }
}
