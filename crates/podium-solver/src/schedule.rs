//! Search snapshots.
//!
//! A [`Schedule`] holds every slot of a contest together with the
//! per-slot eligibility sets that drive candidate generation. The search
//! clones a snapshot before each placement so that sibling branches never
//! observe each other's changes.

use std::collections::BTreeSet;
use std::fmt;

use podium_core::{CategoryId, Contest, PeriodId, PersonId, RoomId};

use crate::slot::{RoomSchedule, SlotId, SlotKey};

/// A complete or partial assignment of categories and judges to slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub(crate) slots: Vec<RoomSchedule>,
    // Unplaced judges still allowed into each slot.
    pub(crate) eligible_judges: Vec<BTreeSet<PersonId>>,
    // Unplaced categories still allowed into each slot.
    pub(crate) eligible_categories: Vec<BTreeSet<CategoryId>>,
    pub(crate) unplaced_categories: BTreeSet<CategoryId>,
    pub(crate) unplaced_judges: BTreeSet<PersonId>,
}

impl Schedule {
    /// Builds the root snapshot for `contest`: one empty slot per open
    /// (period, room) pair, every category eligible everywhere and every
    /// judge eligible wherever their period binding allows.
    pub fn new(contest: &Contest) -> Self {
        let transitions = contest.transitions();
        let all_categories: BTreeSet<CategoryId> =
            contest.categories().iter().map(|c| c.id()).collect();

        let mut slots = Vec::with_capacity(contest.slot_count());
        let mut eligible_judges = Vec::with_capacity(contest.slot_count());
        let mut eligible_categories = Vec::with_capacity(contest.slot_count());
        for (period, room) in contest.slots() {
            slots.push(RoomSchedule::new(SlotKey::new(period, room), transitions));
            eligible_judges.push(
                contest
                    .judges()
                    .filter(|j| j.bound_period().map_or(true, |p| p == period))
                    .map(|j| j.id())
                    .collect(),
            );
            eligible_categories.push(all_categories.clone());
        }

        Self {
            slots,
            eligible_judges,
            eligible_categories,
            unplaced_categories: all_categories,
            unplaced_judges: contest.judges().map(|j| j.id()).collect(),
        }
    }

    pub fn slots(&self) -> &[RoomSchedule] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot(&self, id: SlotId) -> &RoomSchedule {
        &self.slots[id.index()]
    }

    pub fn slot_ids(&self) -> impl Iterator<Item = SlotId> + '_ {
        (0..self.slots.len()).map(SlotId::new)
    }

    /// Looks a slot up by its (period, room) pair.
    pub fn slot_for(&self, period: PeriodId, room: RoomId) -> Option<&RoomSchedule> {
        let key = SlotKey::new(period, room);
        self.slots.iter().find(|s| s.key() == key)
    }

    /// The slot holding `category`, if it has been placed.
    pub fn slot_of_category(&self, category: CategoryId) -> Option<&RoomSchedule> {
        self.slots.iter().find(|s| s.contains_category(category))
    }

    /// The slot holding `judge`, if they have been placed.
    pub fn slot_of_judge(&self, judge: PersonId) -> Option<&RoomSchedule> {
        self.slots.iter().find(|s| s.contains_judge(judge))
    }

    pub fn eligible_judges(&self, id: SlotId) -> &BTreeSet<PersonId> {
        &self.eligible_judges[id.index()]
    }

    pub fn eligible_categories(&self, id: SlotId) -> &BTreeSet<CategoryId> {
        &self.eligible_categories[id.index()]
    }

    pub fn unplaced_categories(&self) -> &BTreeSet<CategoryId> {
        &self.unplaced_categories
    }

    pub fn unplaced_judges(&self) -> &BTreeSet<PersonId> {
        &self.unplaced_judges
    }

    /// Returns true once every category and every judge has a slot.
    pub fn is_complete(&self) -> bool {
        self.unplaced_categories.is_empty() && self.unplaced_judges.is_empty()
    }

    /// Slots that hold at least one category.
    pub fn occupied_slots(&self) -> impl Iterator<Item = &RoomSchedule> + '_ {
        self.slots.iter().filter(|s| s.is_occupied())
    }

    /// Drops slots with neither categories nor judges.
    ///
    /// Slot ids are renumbered afterwards.
    pub fn purge_empty_slots(&mut self) {
        let keep: Vec<bool> = self.slots.iter().map(|s| !s.is_empty()).collect();
        let mut flags = keep.iter();
        self.slots.retain(|_| flags.next().copied().unwrap_or(false));
        let mut flags = keep.iter();
        self.eligible_judges
            .retain(|_| flags.next().copied().unwrap_or(false));
        let mut flags = keep.iter();
        self.eligible_categories
            .retain(|_| flags.next().copied().unwrap_or(false));
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Schedule ({} slots, {} unplaced categories, {} unplaced judges)",
            self.slots.len(),
            self.unplaced_categories.len(),
            self.unplaced_judges.len()
        )?;
        for slot in &self.slots {
            writeln!(f, "  {slot}")?;
        }
        Ok(())
    }
}
