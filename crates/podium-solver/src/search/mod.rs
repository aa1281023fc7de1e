//! Depth-first backtracking over category and judge placements.
//!
//! Each step takes the head of one work queue, asks the [`SlotSelector`]
//! for ranked candidate slots, and recurses on a fresh snapshot for each
//! candidate in turn. A step with no surviving candidate is a dead end and
//! is charged against the [`AttemptBudget`]. When both queues are empty the
//! snapshot is purged of empty slots and accepted only if it places every
//! item and passes the validator.

mod budget;
mod chooser;

#[cfg(test)]
mod tests;

use std::time::Instant;

use podium_core::{CategoryId, PersonId};
use smallvec::SmallVec;
use tracing::{debug, info, trace};

pub use budget::AttemptBudget;
pub use chooser::{
    chooser_for, CategoriesFirst, JudgesFirst, QueueChooser, SeededQueueChooser, WorkQueue,
};

use crate::eligibility::EligibilityTracker;
use crate::error::SchedulingError;
use crate::heuristic::SlotSelector;
use crate::schedule::Schedule;
use crate::statistics::SearchStatistics;
use crate::validator::ScheduleValidator;

type Step = Result<Option<Schedule>, SchedulingError>;

/// Runs one backtracking search.
///
/// Budget and statistics accumulate across calls to
/// [`run`](SearchDriver::run); use a fresh driver per search.
#[derive(Debug)]
pub struct SearchDriver<'a, Sel, Ch, V> {
    tracker: EligibilityTracker<'a>,
    selector: Sel,
    chooser: Ch,
    validator: V,
    budget: AttemptBudget,
    alternate_on_dead_end: bool,
    statistics: SearchStatistics,
}

impl<'a, Sel, Ch, V> SearchDriver<'a, Sel, Ch, V>
where
    Sel: SlotSelector,
    Ch: QueueChooser,
    V: ScheduleValidator,
{
    pub fn new(
        tracker: EligibilityTracker<'a>,
        selector: Sel,
        chooser: Ch,
        validator: V,
        budget: AttemptBudget,
    ) -> Self {
        Self {
            tracker,
            selector,
            chooser,
            validator,
            budget,
            alternate_on_dead_end: true,
            statistics: SearchStatistics::new(),
        }
    }

    /// Whether a step whose chosen queue dead-ends tries the other queue
    /// before failing.
    pub fn with_alternation(mut self, alternate_on_dead_end: bool) -> Self {
        self.alternate_on_dead_end = alternate_on_dead_end;
        self
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    pub fn budget(&self) -> &AttemptBudget {
        &self.budget
    }

    /// Searches for a schedule placing `categories` and `judges` in queue
    /// order.
    ///
    /// Both queues must list every category and every judge of the
    /// contest exactly once.
    ///
    /// # Errors
    ///
    /// [`SchedulingError::NoScheduleFound`] if the search tree is exhausted,
    /// [`SchedulingError::AttemptsExhausted`] if the budget runs out first.
    pub fn run(
        &mut self,
        categories: &[CategoryId],
        judges: &[PersonId],
    ) -> Result<Schedule, SchedulingError> {
        let start = Instant::now();
        let contest = self.tracker.contest();
        info!(
            event = "search_start",
            contest = contest.name(),
            categories = categories.len(),
            judges = judges.len(),
            slots = contest.slot_count(),
            max_attempts = self.budget.limit(),
        );

        let root = self.tracker.initial_schedule();
        let found = self.step(root, categories, judges, 0);
        self.statistics.dead_ends = self.budget.dead_ends();
        self.statistics.duration = start.elapsed();

        let result = match found {
            Ok(Some(schedule)) => Ok(schedule),
            Ok(None) => Err(SchedulingError::NoScheduleFound),
            Err(e) => Err(e),
        };
        let outcome = match &result {
            Ok(_) => "found",
            Err(SchedulingError::AttemptsExhausted { .. }) => "exhausted",
            Err(_) => "infeasible",
        };
        info!(
            event = "search_end",
            outcome,
            duration_ms = self.statistics.duration.as_millis() as u64,
            nodes = self.statistics.nodes_explored,
            dead_ends = self.statistics.dead_ends,
            speed = self.statistics.speed(),
        );
        result
    }

    fn step(
        &mut self,
        node: Schedule,
        categories: &[CategoryId],
        judges: &[PersonId],
        depth: usize,
    ) -> Step {
        self.statistics.record_node(depth);
        if categories.is_empty() && judges.is_empty() {
            return self.finish(node, depth);
        }

        let first = match (categories.is_empty(), judges.is_empty()) {
            (false, false) => self.chooser.choose(categories.len(), judges.len()),
            (false, true) => WorkQueue::Categories,
            _ => WorkQueue::Judges,
        };
        let mut queues: SmallVec<[WorkQueue; 2]> = SmallVec::new();
        queues.push(first);
        if self.alternate_on_dead_end && !categories.is_empty() && !judges.is_empty() {
            queues.push(first.other());
        }

        for queue in queues {
            let found = match queue {
                WorkQueue::Categories => self.place_next_category(&node, categories, judges, depth)?,
                WorkQueue::Judges => self.place_next_judge(&node, categories, judges, depth)?,
            };
            if found.is_some() {
                return Ok(found);
            }
        }

        debug!(
            event = "dead_end",
            depth,
            categories_left = categories.len(),
            judges_left = judges.len(),
        );
        self.budget.record_dead_end()?;
        Ok(None)
    }

    fn place_next_category(
        &mut self,
        node: &Schedule,
        categories: &[CategoryId],
        judges: &[PersonId],
        depth: usize,
    ) -> Step {
        let Some((&category, rest)) = categories.split_first() else {
            return Ok(None);
        };
        let candidates = self
            .selector
            .category_candidates(&self.tracker, node, category);
        for slot in candidates {
            trace!(
                event = "place_category",
                depth,
                category = %category,
                slot = %node.slot(slot).key(),
            );
            let child = self.tracker.place_category(node, slot, category);
            self.statistics.placements += 1;
            if let Some(found) = self.step(child, rest, judges, depth + 1)? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    fn place_next_judge(
        &mut self,
        node: &Schedule,
        categories: &[CategoryId],
        judges: &[PersonId],
        depth: usize,
    ) -> Step {
        let Some((&judge, rest)) = judges.split_first() else {
            return Ok(None);
        };
        let candidates = self.selector.judge_candidates(&self.tracker, node, judge);
        for slot in candidates {
            trace!(
                event = "place_judge",
                depth,
                judge = %judge,
                slot = %node.slot(slot).key(),
            );
            let child = self.tracker.place_judge(node, slot, judge);
            self.statistics.placements += 1;
            if let Some(found) = self.step(child, categories, rest, depth + 1)? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    fn finish(&mut self, mut node: Schedule, depth: usize) -> Step {
        node.purge_empty_slots();
        // Queues that leave out an item end on a partial schedule.
        if node.is_complete() && self.validator.validate(&node) {
            return Ok(Some(node));
        }
        self.statistics.rejected_schedules += 1;
        debug!(
            event = "validation_rejected",
            depth,
            slots = node.len(),
            short_slots = self.validator.violations(&node).len(),
        );
        self.budget.record_dead_end()?;
        Ok(None)
    }
}
