//! Judge slot ranking.

use podium_core::PersonId;

use super::Candidates;
use crate::eligibility::EligibilityTracker;
use crate::schedule::Schedule;
use crate::slot::SlotId;

/// Ranks the slots `judge` may be placed into.
///
/// A slot qualifies if the judge is still eligible there. Qualifying slots
/// are ordered by, in turn:
///
/// 1. slots that already reached the minimum judge count first
/// 2. unplaced judges still eligible for the slot, fewest first
/// 3. judge count, lowest first
/// 4. judges from the same school already there, fewest first
///
/// The first key fills satisfied slots up to their ceiling before
/// starting on unsatisfied ones. Ties keep slot order.
pub fn rank_judge_slots(
    tracker: &EligibilityTracker<'_>,
    schedule: &Schedule,
    judge: PersonId,
) -> Candidates {
    let contest = tracker.contest();
    let min_judges = tracker.rules().min_judges;
    let school = contest.person(judge).school();

    let mut ranked: Vec<((bool, usize, usize, usize), SlotId)> = schedule
        .slot_ids()
        .filter(|&id| schedule.eligible_judges(id).contains(&judge))
        .map(|id| {
            let room = schedule.slot(id);
            let same_school = room
                .judges()
                .iter()
                .filter(|j| contest.person(**j).school() == school)
                .count();
            let key = (
                room.judge_count() < min_judges,
                schedule.eligible_judges(id).len(),
                room.judge_count(),
                same_school,
            );
            (key, id)
        })
        .collect();

    ranked.sort_by(|a, b| a.0.cmp(&b.0));
    ranked.into_iter().map(|(_, id)| id).collect()
}
