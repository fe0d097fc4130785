//! StudyPlan - day-by-day study timetables
//!
//! Turns a prioritized list of topics and a daily study budget into a
//! timetable that fills each day up to the budget without exceeding it.
//!
//! # Pipeline
//!
//! ```text
//! topics ──sort──▶ splitter ──VecDeque<SessionUnit>──▶ packer ──▶ Vec<DayPlan>
//!                  (≤2h units)                          (split + carry,
//!                                                        notes per day)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use studyplan::{Capacity, build_schedule, sort_topics, load_topics};
//!
//! let mut topics = load_topics("rust.yml")?;
//! sort_topics(&mut topics);
//! let schedule = build_schedule(&topics, Capacity::new(2.0, 7)?)?;
//! for (day, plan) in schedule.days.iter().enumerate() {
//!     println!("day {}: {:.1}h", day + 1, plan.total_hours());
//! }
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod schedule;
pub mod topics;
pub mod validation;

pub use config::{Config, Limits};
pub use domain::{Capacity, DayPlan, Difficulty, Priority, Schedule, SessionUnit, StudyPlan, StudyRequest, Topic};
pub use error::PlanError;
pub use schedule::{build_plan, build_schedule, pack_days, sort_topics, split_topics};
pub use topics::{load_topics, parse_topics};
pub use validation::{ValidationError, validate_plan, validate_request};
