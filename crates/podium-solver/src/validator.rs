//! Terminal schedule validation.

use std::fmt::Debug;

use podium_config::SchedulerConfig;

use crate::schedule::Schedule;
use crate::slot::SlotKey;

/// Accepts or rejects a schedule in which everything has been placed.
pub trait ScheduleValidator: Send + Debug {
    /// Slots breaking the rule.
    fn violations(&self, schedule: &Schedule) -> Vec<SlotKey>;

    fn validate(&self, schedule: &Schedule) -> bool {
        self.violations(schedule).is_empty()
    }
}

impl<V: ScheduleValidator + ?Sized> ScheduleValidator for Box<V> {
    fn violations(&self, schedule: &Schedule) -> Vec<SlotKey> {
        (**self).violations(schedule)
    }

    fn validate(&self, schedule: &Schedule) -> bool {
        (**self).validate(schedule)
    }
}

/// Requires every slot holding a category to have a minimum of judges.
#[derive(Debug, Clone, Copy)]
pub struct MinJudgesValidator {
    min_judges: usize,
}

impl MinJudgesValidator {
    pub fn new(min_judges: usize) -> Self {
        Self { min_judges }
    }

    pub fn min_judges(&self) -> usize {
        self.min_judges
    }
}

impl ScheduleValidator for MinJudgesValidator {
    /// Occupied slots short of judges.
    fn violations(&self, schedule: &Schedule) -> Vec<SlotKey> {
        schedule
            .occupied_slots()
            .filter(|s| s.judge_count() < self.min_judges)
            .map(|s| s.key())
            .collect()
    }

    fn validate(&self, schedule: &Schedule) -> bool {
        schedule
            .occupied_slots()
            .all(|s| s.judge_count() >= self.min_judges)
    }
}

/// Accepts every schedule.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl ScheduleValidator for AcceptAll {
    fn violations(&self, _: &Schedule) -> Vec<SlotKey> {
        Vec::new()
    }

    fn validate(&self, _: &Schedule) -> bool {
        true
    }
}

/// Builds the validator a configuration asks for.
pub fn validator_for(config: &SchedulerConfig) -> Box<dyn ScheduleValidator> {
    if config.search.skip_validation {
        Box::new(AcceptAll)
    } else {
        Box::new(MinJudgesValidator::new(config.slots.min_judges))
    }
}
