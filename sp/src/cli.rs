//! CLI argument parsing for studyplan

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sp")]
#[command(author, version, about = "Build day-by-day study timetables", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a timetable from a topic file
    Plan {
        /// YAML or JSON file with the topics to schedule
        #[arg(short, long, required = true)]
        topics: PathBuf,

        /// Study hours available per day
        #[arg(short = 'H', long, required = true)]
        hours: f64,

        /// Number of days in the plan (default from config)
        #[arg(short, long)]
        days: Option<u32>,

        /// Subject name (defaults to the topic file name)
        #[arg(short, long)]
        subject: Option<String>,

        /// Output format (default from config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write the plan to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fail when the finished plan breaks a validation rule
        #[arg(long)]
        strict: bool,
    },

    /// List topics in scheduling order
    Topics {
        /// YAML or JSON file with the topics
        #[arg(short, long, required = true)]
        topics: PathBuf,
    },

    /// Validate a previously generated JSON plan
    Check {
        /// Plan file to check
        #[arg(required = true)]
        plan: PathBuf,
    },
}

/// Output format for generated plans
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_command() {
        let cli = Cli::parse_from([
            "sp", "plan", "--topics", "rust.yml", "-H", "2.5", "--days", "5", "--format", "json",
        ]);

        match cli.command {
            Command::Plan {
                topics,
                hours,
                days,
                format,
                strict,
                ..
            } => {
                assert_eq!(topics, PathBuf::from("rust.yml"));
                assert_eq!(hours, 2.5);
                assert_eq!(days, Some(5));
                assert_eq!(format, Some(OutputFormat::Json));
                assert!(!strict);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["sp", "check", "plan.json", "--verbose"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Check { .. }));
    }

    #[test]
    fn test_plan_requires_hours() {
        assert!(Cli::try_parse_from(["sp", "plan", "--topics", "rust.yml"]).is_err());
    }
}
