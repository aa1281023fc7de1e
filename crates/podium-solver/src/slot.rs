//! Room-period slots.
//!
//! A [`RoomSchedule`] is the assignment target for one (period, room) pair.
//! It accumulates categories and judges and keeps its projected duration
//! up to date as categories arrive.

use std::collections::BTreeSet;
use std::fmt;

use podium_core::{CategoryId, PeriodId, PersonId, RoomId, Transitions};

/// Position of a slot inside a [`Schedule`](crate::Schedule).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(usize);

impl SlotId {
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot{}", self.0)
    }
}

/// The (period, room) pair that uniquely identifies a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotKey {
    pub period: PeriodId,
    pub room: RoomId,
}

impl SlotKey {
    pub const fn new(period: PeriodId, room: RoomId) -> Self {
        Self { period, room }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.period, self.room)
    }
}

/// Categories and judges assigned to one (period, room) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSchedule {
    key: SlotKey,
    categories: BTreeSet<CategoryId>,
    judges: BTreeSet<PersonId>,
    // Sum of (category duration + category gap) over assigned categories.
    category_minutes: u64,
    category_gap: u32,
}

impl RoomSchedule {
    pub fn new(key: SlotKey, transitions: Transitions) -> Self {
        Self {
            key,
            categories: BTreeSet::new(),
            judges: BTreeSet::new(),
            category_minutes: 0,
            category_gap: transitions.between_categories,
        }
    }

    pub fn key(&self) -> SlotKey {
        self.key
    }

    pub fn period(&self) -> PeriodId {
        self.key.period
    }

    pub fn room(&self) -> RoomId {
        self.key.room
    }

    pub fn categories(&self) -> &BTreeSet<CategoryId> {
        &self.categories
    }

    pub fn judges(&self) -> &BTreeSet<PersonId> {
        &self.judges
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn judge_count(&self) -> usize {
        self.judges.len()
    }

    /// Returns true if the slot holds at least one category.
    pub fn is_occupied(&self) -> bool {
        !self.categories.is_empty()
    }

    /// Returns true if the slot holds neither categories nor judges.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.judges.is_empty()
    }

    pub fn contains_category(&self, category: CategoryId) -> bool {
        self.categories.contains(&category)
    }

    pub fn contains_judge(&self, judge: PersonId) -> bool {
        self.judges.contains(&judge)
    }

    /// Projected running time: category durations plus one gap between
    /// each consecutive pair. Zero when the slot has no categories.
    pub fn projected_duration(&self) -> u32 {
        minutes(self.category_minutes.saturating_sub(u64::from(self.category_gap)))
    }

    /// Projected running time if a category lasting `extra` minutes joined.
    pub fn projected_duration_with(&self, extra: u32) -> u32 {
        minutes(self.category_minutes + u64::from(extra))
    }

    /// Adds a category with its projected duration. Returns false if it was
    /// already present.
    pub fn add_category(&mut self, category: CategoryId, projected_duration: u32) -> bool {
        if !self.categories.insert(category) {
            return false;
        }
        self.category_minutes += u64::from(projected_duration) + u64::from(self.category_gap);
        true
    }

    /// Adds a judge. Returns false if they were already present.
    pub fn add_judge(&mut self, judge: PersonId) -> bool {
        self.judges.insert(judge)
    }
}

impl fmt::Display for RoomSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RoomSchedule {} ({} categories, {} judges, {} min)",
            self.key,
            self.categories.len(),
            self.judges.len(),
            self.projected_duration()
        )
    }
}

fn minutes(total: u64) -> u32 {
    u32::try_from(total).unwrap_or(u32::MAX)
}
