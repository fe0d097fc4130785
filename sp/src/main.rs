use clap::Parser;
use colored::*;
use eyre::{Context, Result, bail};
use log::{info, warn};
use std::fs;
use std::path::Path;

use studyplan::cli::{Cli, Command, OutputFormat};
use studyplan::config::Config;
use studyplan::render::{render_json, render_text, render_topics};
use studyplan::schedule::CAPACITY_EPSILON;
use studyplan::{StudyPlan, StudyRequest, build_plan, load_topics, sort_topics, validate_plan, validate_request};

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env().filter_level(level).init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("studyplan starting");

    match cli.command {
        Command::Plan {
            topics,
            hours,
            days,
            subject,
            format,
            output,
            strict,
        } => {
            let subject = subject.unwrap_or_else(|| subject_from_path(&topics));
            let request = StudyRequest::new(subject, hours, days.unwrap_or(config.defaults.total_days));
            validate_request(&request, &config.limits)?;

            let topics = load_topics(&topics)?;
            let plan = build_plan(&request, topics)?;

            let violations = validate_plan(&plan, &config.limits);
            for violation in &violations {
                eprintln!("{} {}", "warning:".yellow().bold(), violation);
            }
            if strict && !violations.is_empty() {
                bail!("Plan failed {} validation check(s)", violations.len());
            }

            let dropped = plan.estimated_hours() - plan.scheduled_hours();
            if dropped > CAPACITY_EPSILON {
                warn!("{:.2}h of study did not fit in {} day(s)", dropped, plan.total_days);
            }

            let rendered = match format.unwrap_or(config.defaults.format) {
                OutputFormat::Text => render_text(&plan),
                OutputFormat::Json => render_json(&plan)?,
            };
            match output {
                Some(path) => {
                    fs::write(&path, rendered).context(format!("Failed to write plan to {}", path.display()))?;
                    println!("{} Wrote plan to: {}", "✓".green(), path.display().to_string().cyan());
                }
                None => print!("{}", rendered),
            }
        }
        Command::Topics { topics } => {
            let mut topics = load_topics(&topics)?;
            sort_topics(&mut topics);
            if topics.is_empty() {
                println!("No topics found");
            } else {
                print!("{}", render_topics(&topics));
            }
        }
        Command::Check { plan } => {
            let content = fs::read_to_string(&plan).context(format!("Failed to read plan from {}", plan.display()))?;
            let parsed: StudyPlan = serde_json::from_str(&content).context("Failed to parse plan")?;

            let violations = validate_plan(&parsed, &config.limits);
            if violations.is_empty() {
                println!("{} Plan is valid: {}", "✓".green(), plan.display());
            } else {
                for violation in &violations {
                    println!("{} {}", "✗".red(), violation);
                }
                bail!("Plan failed {} validation check(s)", violations.len());
            }
        }
    }

    Ok(())
}

fn subject_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().replace(['_', '-'], " "))
        .unwrap_or_else(|| "Study plan".to_string())
}
