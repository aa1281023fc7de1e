//! Eligibility propagation.
//!
//! Every placement shrinks the eligibility sets of the snapshot it is
//! applied to:
//!
//! - a placed category or judge leaves every slot's eligible set;
//! - a slot keeps only judges without a school conflict against its
//!   categories, and only categories every one of its judges may judge;
//! - a slot at its category or judge ceiling stops accepting that kind;
//! - a slot keeps only categories it can absorb within the time limits.

use podium_config::SchedulerConfig;
use podium_core::{CategoryId, Contest, PersonId};

use crate::schedule::Schedule;
use crate::slot::{RoomSchedule, SlotId};

/// Bounds enforced while placing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRules {
    pub max_time: u32,
    pub max_time_imbalance: f64,
    pub max_categories: usize,
    pub min_judges: usize,
    pub max_judges: usize,
}

impl PlacementRules {
    pub fn from_config(config: &SchedulerConfig) -> Self {
        Self {
            max_time: config.durations.max_time,
            max_time_imbalance: config.durations.max_time_imbalance,
            max_categories: config.slots.max_categories,
            min_judges: config.slots.min_judges,
            max_judges: config.slots.max_judges,
        }
    }
}

impl Default for PlacementRules {
    fn default() -> Self {
        Self::from_config(&SchedulerConfig::default())
    }
}

/// Applies placements to snapshots and keeps their eligibility sets
/// consistent.
#[derive(Debug, Clone, Copy)]
pub struct EligibilityTracker<'a> {
    contest: &'a Contest,
    rules: PlacementRules,
}

impl<'a> EligibilityTracker<'a> {
    pub fn new(contest: &'a Contest, rules: PlacementRules) -> Self {
        Self { contest, rules }
    }

    pub fn contest(&self) -> &'a Contest {
        self.contest
    }

    pub fn rules(&self) -> &PlacementRules {
        &self.rules
    }

    /// The root snapshot nothing has been placed into yet.
    pub fn initial_schedule(&self) -> Schedule {
        Schedule::new(self.contest)
    }

    /// Returns true if `category` fits into `slot` under both the absolute
    /// ceiling and the fairness ceiling.
    ///
    /// When the contest's mean slot duration is zero the fairness ceiling
    /// is not applied.
    pub fn can_accommodate_cat_duration(&self, slot: &RoomSchedule, category: CategoryId) -> bool {
        let extra = self.contest.category(category).projected_duration();
        let total = slot.projected_duration_with(extra);
        if total > self.rules.max_time {
            return false;
        }
        let target = self.contest.target_slot_duration();
        target <= 0.0 || f64::from(total) / target <= self.rules.max_time_imbalance
    }

    /// Returns a copy of `schedule` with `category` placed into `slot`.
    pub fn place_category(&self, schedule: &Schedule, slot: SlotId, category: CategoryId) -> Schedule {
        let mut next = schedule.clone();
        self.apply_category(&mut next, slot, category);
        next
    }

    /// Returns a copy of `schedule` with `judge` placed into `slot`.
    pub fn place_judge(&self, schedule: &Schedule, slot: SlotId, judge: PersonId) -> Schedule {
        let mut next = schedule.clone();
        self.apply_judge(&mut next, slot, judge);
        next
    }

    /// Places `category` into `slot` in place.
    pub fn apply_category(&self, schedule: &mut Schedule, slot: SlotId, category: CategoryId) {
        let contest = self.contest;
        let Schedule {
            slots,
            eligible_judges,
            eligible_categories,
            unplaced_categories,
            ..
        } = schedule;
        let idx = slot.index();

        slots[idx].add_category(category, contest.category(category).projected_duration());
        unplaced_categories.remove(&category);
        for set in eligible_categories.iter_mut() {
            set.remove(&category);
        }

        eligible_judges[idx].retain(|j| contest.judge_eligible_for_category(*j, category));

        let room = &slots[idx];
        if room.category_count() >= self.rules.max_categories {
            eligible_categories[idx].clear();
        } else {
            eligible_categories[idx].retain(|c| self.can_accommodate_cat_duration(room, *c));
        }
    }

    /// Places `judge` into `slot` in place.
    pub fn apply_judge(&self, schedule: &mut Schedule, slot: SlotId, judge: PersonId) {
        let contest = self.contest;
        let Schedule {
            slots,
            eligible_judges,
            eligible_categories,
            unplaced_judges,
            ..
        } = schedule;
        let idx = slot.index();

        slots[idx].add_judge(judge);
        unplaced_judges.remove(&judge);
        for set in eligible_judges.iter_mut() {
            set.remove(&judge);
        }

        eligible_categories[idx].retain(|c| contest.judge_eligible_for_category(judge, *c));

        if slots[idx].judge_count() >= self.rules.max_judges {
            eligible_judges[idx].clear();
        }
    }
}
