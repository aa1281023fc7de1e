//! The contest graph.

use std::collections::BTreeSet;
use std::fmt;

use super::category::Category;
use super::duration::Transitions;
use super::ids::{CategoryId, PeriodId, PersonId, RoomId, SchoolId};
use super::person::Person;
use super::school::School;
use super::venue::{Period, Room};

/// A fully populated contest.
///
/// Built by [`ContestBuilder`](super::ContestBuilder); immutable afterwards.
/// Lookups by id index directly into the owning vectors and panic on ids
/// that did not come from this contest.
#[derive(Debug, Clone)]
pub struct Contest {
    pub(super) name: String,
    pub(super) periods: Vec<Period>,
    pub(super) rooms: Vec<Room>,
    pub(super) schools: Vec<School>,
    pub(super) categories: Vec<Category>,
    pub(super) people: Vec<Person>,
    pub(super) transitions: Transitions,
    pub(super) target_slot_duration: f64,
}

impl Contest {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn schools(&self) -> &[School] {
        &self.schools
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Everyone registered, in every role.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn period(&self, id: PeriodId) -> &Period {
        &self.periods[id.index()]
    }

    pub fn room(&self, id: RoomId) -> &Room {
        &self.rooms[id.index()]
    }

    pub fn school(&self, id: SchoolId) -> &School {
        &self.schools[id.index()]
    }

    pub fn category(&self, id: CategoryId) -> &Category {
        &self.categories[id.index()]
    }

    pub fn person(&self, id: PersonId) -> &Person {
        &self.people[id.index()]
    }

    pub fn judges(&self) -> impl Iterator<Item = &Person> + '_ {
        self.people.iter().filter(|p| p.is_judge())
    }

    pub fn contestants(&self) -> impl Iterator<Item = &Person> + '_ {
        self.people.iter().filter(|p| p.is_contestant())
    }

    pub fn volunteers(&self) -> impl Iterator<Item = &Person> + '_ {
        self.people.iter().filter(|p| p.is_volunteer())
    }

    pub fn judge_count(&self) -> usize {
        self.judges().count()
    }

    /// Every usable (period, room) pair, period-major.
    pub fn slots(&self) -> impl Iterator<Item = (PeriodId, RoomId)> + '_ {
        self.periods
            .iter()
            .flat_map(|p| p.rooms.iter().map(move |r| (p.id, *r)))
    }

    pub fn slot_count(&self) -> usize {
        self.periods.iter().map(|p| p.rooms.len()).sum()
    }

    /// Sum of every category's projected duration.
    pub fn projected_duration(&self) -> u64 {
        self.categories
            .iter()
            .map(|c| u64::from(c.projected_duration))
            .sum()
    }

    /// Mean projected duration per slot, rounded down to whole minutes; the
    /// fairness baseline.
    pub fn target_slot_duration(&self) -> f64 {
        self.target_slot_duration
    }

    pub fn transitions(&self) -> Transitions {
        self.transitions
    }

    /// Returns true if `judge` has no school conflict with `category`.
    ///
    /// Non-judges are never eligible.
    pub fn judge_eligible_for_category(&self, judge: PersonId, category: CategoryId) -> bool {
        let person = self.person(judge);
        match (person.is_judge(), person.school()) {
            (true, Some(school)) => self.category(category).admits_school(school),
            _ => false,
        }
    }

    /// Judges with no school conflict with `category`.
    pub fn eligible_judges(&self, category: CategoryId) -> Vec<PersonId> {
        let cat = self.category(category);
        self.judges()
            .filter(|j| j.school().is_some_and(|s| cat.admits_school(s)))
            .map(|j| j.id)
            .collect()
    }

    /// Schools sharing a category with any contestant of `judge`'s school.
    ///
    /// The larger this set, the more slots the judge is likely to clash with.
    pub fn reachable_schools(&self, judge: PersonId) -> BTreeSet<SchoolId> {
        let Some(school) = self.person(judge).school() else {
            return BTreeSet::new();
        };
        self.categories
            .iter()
            .filter(|c| c.schools.contains(&school))
            .flat_map(|c| c.schools.iter().copied())
            .collect()
    }
}

impl fmt::Display for Contest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contest: {}", self.name)
    }
}
