//! Day notes derived from a day's position in the plan and its session mix

use crate::domain::{SessionUnit, high_priority_count, total_hours};

use super::CAPACITY_EPSILON;

/// Scheduled hours at which a day counts as long
pub const LONG_DAY_HOURS: f64 = 3.0;

/// Build the notes for one day
///
/// Exactly one position clause fires, followed by the optional high-priority
/// and long-day clauses and the closing reminder.
pub fn day_notes(sessions: &[SessionUnit], day_index: usize, total_days: usize) -> String {
    let mut notes = vec![position_clause(day_index, total_days).to_string()];

    let high = high_priority_count(sessions);
    if high > 0 {
        notes.push(format!(
            "⭐ {} high-priority topic(s) today - tackle these when your mind is freshest.",
            high
        ));
    }

    if total_hours(sessions) >= LONG_DAY_HOURS - CAPACITY_EPSILON {
        notes.push("⏰ Long study day - remember to take regular breaks and stay hydrated.".to_string());
    }

    notes.push("📝 End the day by reviewing what you've learned and planning tomorrow.".to_string());
    notes.join(" ")
}

fn position_clause(day_index: usize, total_days: usize) -> &'static str {
    if day_index == 0 {
        "🚀 First day! Start strong and build momentum."
    } else if day_index + 1 == total_days {
        "🎯 Final day! Focus on review and consolidation."
    } else if day_index < total_days / 2 {
        "💪 Early days - focus on building strong foundations."
    } else {
        "🔥 Second half of your study plan - you're making great progress!"
    }
}
