//! Scheduler entry points that hide the engine wiring.

use podium_config::SchedulerConfig;
use podium_core::Contest;
use podium_solver::{Scheduler, SchedulingError, Solved};

/// Schedules `contest` with the configuration in `podium.toml`, or the
/// defaults when that file is missing or unreadable.
pub fn solve(contest: &Contest) -> Result<Solved, SchedulingError> {
    let config = SchedulerConfig::load("podium.toml").unwrap_or_default();
    solve_with_config(contest, config)
}

/// Schedules `contest` with an explicit configuration.
///
/// With the `console` feature, the first call also installs the colored
/// console output.
pub fn solve_with_config(
    contest: &Contest,
    config: SchedulerConfig,
) -> Result<Solved, SchedulingError> {
    #[cfg(feature = "console")]
    podium_console::init();

    Scheduler::new(contest, config)?.solve()
}
