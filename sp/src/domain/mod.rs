//! Domain types for studyplan
//!
//! Plain value records: `Topic` in, `DayPlan`s out, with `SessionUnit` as the
//! atomic piece the packer moves between days.

mod capacity;
mod plan;
mod priority;
mod session;
mod topic;

pub use capacity::Capacity;
pub use plan::{DEFAULT_TOTAL_DAYS, StudyPlan, StudyRequest};
pub use priority::{Difficulty, Priority};
pub use session::{DayPlan, SPLIT_ACTIVITY_COUNT, Schedule, SessionUnit};
pub use topic::Topic;

pub(crate) use session::{high_priority_count, total_hours};
