//! Configuration for studyplan

use eyre::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::domain::DEFAULT_TOTAL_DAYS;

/// Main studyplan configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Limits applied when validating requests and plans
    pub limits: Limits,

    /// Defaults for options not given on the command line
    pub defaults: Defaults,
}

/// Request and plan limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Largest accepted daily study budget
    #[serde(rename = "max-hours-per-day")]
    pub max_hours_per_day: f64,

    /// Longest accepted plan horizon
    #[serde(rename = "max-days")]
    pub max_days: u32,

    /// Fewest topics a finished plan should cover
    #[serde(rename = "min-topics")]
    pub min_topics: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_hours_per_day: 12.0,
            max_days: 30,
            min_topics: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    #[serde(rename = "total-days")]
    pub total_days: u32,

    pub format: OutputFormat,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            total_days: DEFAULT_TOTAL_DAYS,
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .studyplan.yml
        let local_config = PathBuf::from(".studyplan.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => warn!("Failed to load config from {}: {}", local_config.display(), e),
            }
        }

        // Try user config: ~/.config/studyplan/studyplan.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("studyplan").join("studyplan.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => warn!("Failed to load config from {}: {}", user_config.display(), e),
                }
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let yaml = "limits:\n  max-days: 14\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.limits.max_days, 14);
        assert_eq!(config.limits.max_hours_per_day, 12.0);
        assert_eq!(config.limits.min_topics, 5);
        assert_eq!(config.defaults.total_days, DEFAULT_TOTAL_DAYS);
        assert_eq!(config.defaults.format, OutputFormat::Text);
    }

    #[test]
    fn test_load_explicit_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("studyplan.yml");
        fs::write(&path, "defaults:\n  total-days: 10\n  format: json\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.defaults.total_days, 10);
        assert_eq!(config.defaults.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("studyplan.yml");

        let mut config = Config::default();
        config.limits.min_topics = 3;
        config.save(&path).unwrap();

        assert_eq!(Config::load(Some(&path)).unwrap(), config);
    }
}
