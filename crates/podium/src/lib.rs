//! Podium - room and judge scheduling for speaking contests
//!
//! Build a [`Contest`], then call [`solve`]: every category and judge is
//! placed into a room-period slot without conflicts of interest, within
//! the slot time limits, and with enough judges in every occupied slot.
//!
//! # Example
//!
//! ```rust
//! use podium::prelude::*;
//!
//! let mut b = ContestBuilder::new("District round");
//! let morning = b.add_period("Morning");
//! let hall = b.add_room("Hall");
//! b.open_room(morning, hall).unwrap();
//! let north = b.add_school("North High", "NH");
//! let south = b.add_school("South High", "SH");
//! let prose = b.add_category("Prose", "Junior", "Native", 4).unwrap();
//! b.add_contestant("Ada", north, prose).unwrap();
//! b.add_contestant("Ben", north, prose).unwrap();
//! b.add_judge("Cleo", south).unwrap();
//! b.add_judge("Dev", south).unwrap();
//! let contest = b.build().unwrap();
//!
//! let solved = solve_with_config(&contest, SchedulerConfig::default()).unwrap();
//! let slot = solved.schedule.slot_of_category(prose).unwrap();
//! assert_eq!(slot.projected_duration(), 10);
//! assert_eq!(slot.judge_count(), 2);
//! ```

// Domain model
pub use podium_core::{
    category_duration, slot_duration, Category, CategoryId, CategoryKey, Contest, ContestBuilder,
    Period, PeriodId, Person, PersonId, PodiumError, Role, Room, RoomId, School, SchoolId,
    Transitions,
};

// Configuration
pub use podium_config::{
    ConfigError, DurationConfig, QueueOrder, SchedulerConfig, SearchConfig, SlotLimits,
};

// Engine
pub use podium_solver::{
    RoomSchedule, Schedule, Scheduler, SchedulingError, SearchStatistics, SlotId, SlotKey, Solved,
};

/// Engine building blocks for custom search setups.
pub mod engine {
    pub use podium_solver::eligibility;
    pub use podium_solver::heuristic;
    pub use podium_solver::search;
    pub use podium_solver::validator;
}

#[cfg(feature = "console")]
pub use podium_console as console;

mod solve;
pub use solve::{solve, solve_with_config};

pub mod prelude {
    pub use super::{solve, solve_with_config};
    pub use super::{Contest, ContestBuilder, Transitions};
    pub use super::{QueueOrder, SchedulerConfig};
    pub use super::{Schedule, Scheduler, SchedulingError, Solved};
}
