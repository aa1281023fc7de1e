//! Configured entry point.

use podium_config::{ConfigError, SchedulerConfig};
use podium_core::Contest;

use crate::eligibility::{EligibilityTracker, PlacementRules};
use crate::error::SchedulingError;
use crate::heuristic::{order_categories, order_judges, BalancedSlotSelector};
use crate::schedule::Schedule;
use crate::search::{chooser_for, AttemptBudget, SearchDriver};
use crate::statistics::SearchStatistics;
use crate::validator::validator_for;

/// A schedule together with the statistics of the search that found it.
#[derive(Debug, Clone)]
pub struct Solved {
    pub schedule: Schedule,
    pub statistics: SearchStatistics,
}

/// Assigns a contest's categories and judges to its slots.
///
/// # Examples
///
/// ```
/// use podium_config::SchedulerConfig;
/// use podium_core::ContestBuilder;
/// use podium_solver::Scheduler;
///
/// let mut b = ContestBuilder::new("Spring open");
/// let morning = b.add_period("Morning");
/// let hall = b.add_room("Hall");
/// b.open_room(morning, hall).unwrap();
/// let x = b.add_school("Xavier", "X");
/// let y = b.add_school("Yale", "Y");
/// let poetry = b.add_category("Poetry", "Senior", "Native", 5).unwrap();
/// b.add_contestant("Ana", x, poetry).unwrap();
/// b.add_judge("Ben", y).unwrap();
/// b.add_judge("Cy", y).unwrap();
/// let contest = b.build().unwrap();
///
/// let solved = Scheduler::new(&contest, SchedulerConfig::default())
///     .unwrap()
///     .solve()
///     .unwrap();
/// let slot = solved.schedule.slot_of_category(poetry).unwrap();
/// assert_eq!(slot.judge_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Scheduler<'a> {
    contest: &'a Contest,
    config: SchedulerConfig,
}

impl<'a> Scheduler<'a> {
    /// # Errors
    ///
    /// Returns [`SchedulingError::InvalidConfig`] if `config` fails
    /// validation or its transitions differ from the ones `contest` was
    /// built with.
    pub fn new(contest: &'a Contest, config: SchedulerConfig) -> Result<Self, SchedulingError> {
        config.validate()?;
        let configured = config.transitions();
        let built = contest.transitions();
        if configured != built {
            return Err(ConfigError::Invalid(format!(
                "transitions ({}, {}) differ from the ({}, {}) contest '{}' was built with",
                configured.between_speakers,
                configured.between_categories,
                built.between_speakers,
                built.between_categories,
                contest.name()
            ))
            .into());
        }
        Ok(Self { contest, config })
    }

    pub fn contest(&self) -> &'a Contest {
        self.contest
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Runs one search with hard-to-place items first.
    ///
    /// # Errors
    ///
    /// [`SchedulingError::NoScheduleFound`] or
    /// [`SchedulingError::AttemptsExhausted`]; never a partial schedule.
    pub fn solve(&self) -> Result<Solved, SchedulingError> {
        let tracker = EligibilityTracker::new(self.contest, PlacementRules::from_config(&self.config));
        let search = &self.config.search;
        let mut driver = SearchDriver::new(
            tracker,
            BalancedSlotSelector,
            chooser_for(search),
            validator_for(&self.config),
            AttemptBudget::new(search.max_attempts),
        )
        .with_alternation(search.alternate_on_dead_end);

        let categories = order_categories(self.contest);
        let judges = order_judges(self.contest);
        let schedule = driver.run(&categories, &judges)?;
        Ok(Solved {
            schedule,
            statistics: driver.statistics().clone(),
        })
    }
}
