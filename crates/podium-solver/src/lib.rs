//! Podium slot assignment engine.
//!
//! Places every category and every judge of a [`Contest`](podium_core::Contest)
//! into room-period slots by depth-first backtracking:
//!
//! - [`slot`]: room-period slots and their duration accounting
//! - [`schedule`]: cloneable search snapshots
//! - [`eligibility`]: placement and eligibility propagation
//! - [`heuristic`]: candidate slot ranking and queue ordering
//! - [`search`]: the backtracking driver, queue choice and attempt budget
//! - [`validator`]: acceptance checks for finished schedules
//!
//! Most callers only need [`Scheduler`].

pub mod eligibility;
pub mod error;
pub mod heuristic;
pub mod schedule;
pub mod scheduler;
pub mod search;
pub mod slot;
pub mod statistics;
pub mod validator;

pub use eligibility::{EligibilityTracker, PlacementRules};
pub use error::SchedulingError;
pub use heuristic::{BalancedSlotSelector, SlotSelector};
pub use schedule::Schedule;
pub use scheduler::{Scheduler, Solved};
pub use search::{
    AttemptBudget, CategoriesFirst, JudgesFirst, QueueChooser, SearchDriver, SeededQueueChooser,
    WorkQueue,
};
pub use slot::{RoomSchedule, SlotId, SlotKey};
pub use statistics::SearchStatistics;
pub use validator::{AcceptAll, MinJudgesValidator, ScheduleValidator};
