//! Category slot ranking.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use podium_core::{Category, CategoryId, SchoolId};

use super::Candidates;
use crate::eligibility::EligibilityTracker;
use crate::schedule::Schedule;
use crate::slot::{RoomSchedule, SlotId};

/// Ranks the slots `category` may be placed into.
///
/// A slot qualifies if the category is still eligible there and the slot
/// either already has its minimum judges or still has an eligible judge
/// who could judge the category. Qualifying slots are ordered by, in turn:
///
/// 1. current projected duration, lowest first
/// 2. category count, lowest first
/// 3. schools shared with categories already there, most first
/// 4. categories of the same format, most first
/// 5. categories of the same age group, most first
/// 6. categories of the same language level, most first
///
/// Ties keep slot order.
pub fn rank_category_slots(
    tracker: &EligibilityTracker<'_>,
    schedule: &Schedule,
    category: CategoryId,
) -> Candidates {
    let contest = tracker.contest();
    let min_judges = tracker.rules().min_judges;
    let cat = contest.category(category);

    let mut ranked: Vec<(CategoryRank, SlotId)> = schedule
        .slot_ids()
        .filter(|&id| schedule.eligible_categories(id).contains(&category))
        .filter(|&id| {
            schedule.slot(id).judge_count() >= min_judges
                || schedule
                    .eligible_judges(id)
                    .iter()
                    .any(|j| contest.judge_eligible_for_category(*j, category))
        })
        .map(|id| {
            let room = schedule.slot(id);
            let present: Vec<&Category> = room
                .categories()
                .iter()
                .map(|c| contest.category(*c))
                .collect();
            (rank(room, cat, &present), id)
        })
        .collect();

    ranked.sort_by(|a, b| a.0.cmp(&b.0));
    ranked.into_iter().map(|(_, id)| id).collect()
}

type CategoryRank = (
    u32,
    usize,
    Reverse<usize>,
    Reverse<usize>,
    Reverse<usize>,
    Reverse<usize>,
);

fn rank(room: &RoomSchedule, cat: &Category, present: &[&Category]) -> CategoryRank {
    let schools: BTreeSet<SchoolId> = present
        .iter()
        .flat_map(|c| c.schools().iter().copied())
        .collect();
    let matching = |attr: fn(&Category) -> &str| {
        present
            .iter()
            .filter(|other| attr(other) == attr(cat))
            .count()
    };

    (
        room.projected_duration(),
        room.category_count(),
        Reverse(cat.shared_schools(&schools)),
        Reverse(matching(Category::format)),
        Reverse(matching(Category::age_group)),
        Reverse(matching(Category::language_level)),
    )
}
