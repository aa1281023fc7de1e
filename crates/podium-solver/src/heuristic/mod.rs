//! Candidate slot ranking and work queue ordering.
//!
//! A [`SlotSelector`] turns "place this category" or "place this judge"
//! into an ordered list of slots to try. The search tries them in order
//! and backtracks to the next one when a branch dead-ends.

mod category;
mod judge;
mod ordering;


use std::fmt::Debug;

use podium_core::{CategoryId, PersonId};
use smallvec::SmallVec;

use crate::eligibility::EligibilityTracker;
use crate::schedule::Schedule;
use crate::slot::SlotId;

pub use category::rank_category_slots;
pub use judge::rank_judge_slots;
pub use ordering::{order_categories, order_judges};

/// Ranked slots to try, best first.
pub type Candidates = SmallVec<[SlotId; 8]>;

/// Produces ranked candidate slots for the next placement.
pub trait SlotSelector: Send + Debug {
    /// Slots `category` may go into, best first.
    fn category_candidates(
        &self,
        tracker: &EligibilityTracker<'_>,
        schedule: &Schedule,
        category: CategoryId,
    ) -> Candidates;

    /// Slots `judge` may go into, best first.
    fn judge_candidates(
        &self,
        tracker: &EligibilityTracker<'_>,
        schedule: &Schedule,
        judge: PersonId,
    ) -> Candidates;
}

/// Balances load across slots while keeping similar categories together
/// and steering judges toward the slots that need them least urgently
/// filled elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalancedSlotSelector;

impl SlotSelector for BalancedSlotSelector {
    fn category_candidates(
        &self,
        tracker: &EligibilityTracker<'_>,
        schedule: &Schedule,
        category: CategoryId,
    ) -> Candidates {
        rank_category_slots(tracker, schedule, category)
    }

    fn judge_candidates(
        &self,
        tracker: &EligibilityTracker<'_>,
        schedule: &Schedule,
        judge: PersonId,
    ) -> Candidates {
        rank_judge_slots(tracker, schedule, judge)
    }
}
