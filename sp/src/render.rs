//! Plan rendering for the terminal and for JSON output

use colored::*;
use eyre::Result;

use crate::domain::{Priority, StudyPlan, Topic};

/// Render a plan as pretty-printed JSON
pub fn render_json(plan: &StudyPlan) -> Result<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}

/// Render a plan as human-readable text
pub fn render_text(plan: &StudyPlan) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", format!("Study plan: {}", plan.subject).bold()));
    out.push_str(&format!(
        "{} day(s) x {}h, {:.1}h of {:.1}h estimated scheduled\n",
        plan.total_days,
        plan.hours_per_day,
        plan.scheduled_hours(),
        plan.estimated_hours()
    ));
    if let Some(overview) = &plan.overview {
        out.push_str(&format!("\n{}\n", overview));
    }

    for (index, day) in plan.timetable.iter().enumerate() {
        out.push_str(&format!(
            "\n{} {}\n",
            format!("Day {}", index + 1).cyan().bold(),
            format!("({:.1}h)", day.total_hours()).dimmed()
        ));

        if day.is_empty() {
            out.push_str(&format!("  {}\n", "No sessions scheduled".dimmed()));
        }
        for session in &day.sessions {
            out.push_str(&format!(
                "  {} {} [{}] {}\n",
                format!("{:.1}h", session.duration).yellow(),
                session.topic,
                paint_priority(session.priority),
                session.suggested_time.dimmed()
            ));
            for activity in &session.activities {
                out.push_str(&format!("    - {}\n", activity));
            }
        }
        if !day.notes.is_empty() {
            out.push_str(&format!("  {}\n", day.notes.italic()));
        }
    }

    out
}

/// Render topics as one line each: hours, priority, difficulty, title
pub fn render_topics(topics: &[Topic]) -> String {
    topics
        .iter()
        .map(|topic| {
            format!(
                "{:>5} {:<6} {:<6} {}\n",
                format!("{:.1}h", topic.estimated_hours),
                topic.priority.to_string(),
                topic.difficulty.to_string(),
                topic.title
            )
        })
        .collect()
}

fn paint_priority(priority: Priority) -> ColoredString {
    match priority {
        Priority::High => priority.to_string().red(),
        Priority::Medium => priority.to_string().yellow(),
        Priority::Low => priority.to_string().green(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Difficulty, StudyRequest};
    use crate::schedule::build_plan;

    fn sample_plan() -> StudyPlan {
        let topics = vec![
            Topic::new("Functions", "Declarations", Priority::High, Difficulty::Medium, 3.0),
            Topic::new("Arrays", "Iteration", Priority::Medium, Difficulty::Easy, 1.0),
        ];
        build_plan(&StudyRequest::new("JavaScript", 2.0, 3), topics).unwrap()
    }

    #[test]
    fn test_render_text_lists_every_day() {
        colored::control::set_override(false);
        let text = render_text(&sample_plan());

        assert!(text.starts_with("Study plan: JavaScript"));
        assert!(text.contains("Day 1 (2.0h)"));
        assert!(text.contains("Day 2"));
        assert!(text.contains("Day 3"));
        assert!(text.contains("Functions [high]"));
        assert!(text.contains("First day!"));
    }

    #[test]
    fn test_render_text_marks_empty_days() {
        colored::control::set_override(false);
        let mut plan = sample_plan();
        plan.overview = Some("Start with functions".to_string());
        let text = render_text(&plan);

        assert!(text.contains("\nStart with functions\n"));
        assert!(text.contains("Day 3 (0.0h)\n  No sessions scheduled\n"));
        assert!(text.contains("    - "));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_render_json_round_trips() {
        let plan = sample_plan();
        let json = render_json(&plan).unwrap();
        let parsed: StudyPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.timetable, plan.timetable);
        assert_eq!(parsed.topics, plan.topics);
    }

    #[test]
    fn test_render_topics_one_line_each() {
        let topics = sample_plan().topics;
        let text = render_topics(&topics);
        assert_eq!(text.lines().count(), 2);
        assert!(text.lines().next().unwrap().contains("Functions"));
    }
}
