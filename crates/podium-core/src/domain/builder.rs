//! Assembles a [`Contest`] and fixes its derived durations.

use std::collections::{BTreeSet, HashMap, HashSet};

use super::category::{Category, CategoryKey};
use super::contest::Contest;
use super::duration::{category_duration, Transitions};
use super::ids::{CategoryId, PeriodId, PersonId, RoomId, SchoolId};
use super::person::{Person, Role};
use super::school::School;
use super::venue::{Period, Room};
use crate::error::{PodiumError, Result};

/// Builder used by input adapters to populate a contest.
///
/// Periods, rooms and schools are deduplicated by name. Categories are
/// unique by [`CategoryKey`] and people by name plus role.
///
/// # Examples
///
/// ```
/// use podium_core::{ContestBuilder, Transitions};
///
/// let mut builder = ContestBuilder::new("Regional final");
/// builder.transitions(Transitions::new(2, 4));
/// let morning = builder.add_period("AM");
/// let hall = builder.add_room("Hall");
/// builder.open_room(morning, hall).unwrap();
///
/// let north = builder.add_school("North High", "NH");
/// let south = builder.add_school("South High", "SH");
/// let speech = builder.add_category("Speech", "9/10", "Imm.", 5).unwrap();
/// builder.add_contestant("Ada", north, speech).unwrap();
/// builder.add_contestant("Ben", north, speech).unwrap();
/// builder.add_judge("Cleo", south).unwrap();
///
/// let contest = builder.build().unwrap();
/// assert_eq!(contest.category(speech).projected_duration(), 12);
/// assert_eq!(contest.target_slot_duration(), 12.0);
/// ```
#[derive(Debug, Clone)]
pub struct ContestBuilder {
    name: String,
    transitions: Transitions,
    periods: Vec<Period>,
    rooms: Vec<Room>,
    schools: Vec<School>,
    categories: Vec<Category>,
    people: Vec<Person>,
    period_names: HashMap<String, PeriodId>,
    room_names: HashMap<String, RoomId>,
    school_names: HashMap<String, SchoolId>,
    category_keys: HashMap<CategoryKey, CategoryId>,
    identities: HashSet<(Role, String)>,
}

impl ContestBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transitions: Transitions::default(),
            periods: Vec::new(),
            rooms: Vec::new(),
            schools: Vec::new(),
            categories: Vec::new(),
            people: Vec::new(),
            period_names: HashMap::new(),
            room_names: HashMap::new(),
            school_names: HashMap::new(),
            category_keys: HashMap::new(),
            identities: HashSet::new(),
        }
    }

    /// Sets the transition overheads used for projected durations.
    pub fn transitions(&mut self, transitions: Transitions) -> &mut Self {
        self.transitions = transitions;
        self
    }

    /// Adds a period, or returns the existing one with the same name.
    pub fn add_period(&mut self, name: impl Into<String>) -> PeriodId {
        let name = name.into();
        if let Some(id) = self.period_names.get(&name) {
            return *id;
        }
        let id = PeriodId::new(self.periods.len());
        self.period_names.insert(name.clone(), id);
        self.periods.push(Period {
            id,
            name,
            rooms: BTreeSet::new(),
        });
        id
    }

    /// Adds a room, or returns the existing one with the same name.
    pub fn add_room(&mut self, name: impl Into<String>) -> RoomId {
        let name = name.into();
        if let Some(id) = self.room_names.get(&name) {
            return *id;
        }
        let id = RoomId::new(self.rooms.len());
        self.room_names.insert(name.clone(), id);
        self.rooms.push(Room {
            id,
            name,
            periods: BTreeSet::new(),
        });
        id
    }

    /// Marks `room` as usable during `period`.
    pub fn open_room(&mut self, period: PeriodId, room: RoomId) -> Result<()> {
        self.check_period(period)?;
        self.check_room(room)?;
        self.periods[period.index()].rooms.insert(room);
        self.rooms[room.index()].periods.insert(period);
        Ok(())
    }

    /// Adds a school, or returns the existing one with the same name.
    pub fn add_school(&mut self, name: impl Into<String>, short_name: impl Into<String>) -> SchoolId {
        let name = name.into();
        if let Some(id) = self.school_names.get(&name) {
            return *id;
        }
        let id = SchoolId::new(self.schools.len());
        self.school_names.insert(name.clone(), id);
        self.schools.push(School {
            id,
            name,
            short_name: short_name.into(),
            judges: Vec::new(),
            contestants: Vec::new(),
        });
        id
    }

    /// Adds a category with a per-contestant speaking time in minutes.
    pub fn add_category(
        &mut self,
        format: impl Into<String>,
        age_group: impl Into<String>,
        language_level: impl Into<String>,
        base_duration: u32,
    ) -> Result<CategoryId> {
        let key = CategoryKey::new(format, age_group, language_level);
        if self.category_keys.contains_key(&key) {
            return Err(PodiumError::Duplicate {
                kind: "category",
                name: key.to_string(),
            });
        }
        let id = CategoryId::new(self.categories.len());
        self.category_keys.insert(key.clone(), id);
        self.categories.push(Category {
            id,
            key,
            base_duration,
            contestants: Vec::new(),
            schools: BTreeSet::new(),
            projected_duration: 0,
        });
        Ok(id)
    }

    /// Adds a judge available in every period.
    pub fn add_judge(&mut self, name: impl Into<String>, school: SchoolId) -> Result<PersonId> {
        self.check_school(school)?;
        let id = self.add_person(name.into(), Role::Judge { school, period: None })?;
        self.schools[school.index()].judges.push(id);
        Ok(id)
    }

    /// Adds a judge who can only sit during `period`.
    pub fn add_period_judge(
        &mut self,
        name: impl Into<String>,
        school: SchoolId,
        period: PeriodId,
    ) -> Result<PersonId> {
        self.check_school(school)?;
        self.check_period(period)?;
        let role = Role::Judge {
            school,
            period: Some(period),
        };
        let id = self.add_person(name.into(), role)?;
        self.schools[school.index()].judges.push(id);
        Ok(id)
    }

    pub fn add_contestant(
        &mut self,
        name: impl Into<String>,
        school: SchoolId,
        category: CategoryId,
    ) -> Result<PersonId> {
        self.check_school(school)?;
        self.check_category(category)?;
        let id = self.add_person(name.into(), Role::Contestant { school, category })?;
        self.schools[school.index()].contestants.push(id);
        let cat = &mut self.categories[category.index()];
        cat.contestants.push(id);
        cat.schools.insert(school);
        Ok(id)
    }

    pub fn add_volunteer(&mut self, name: impl Into<String>) -> Result<PersonId> {
        self.add_person(name.into(), Role::Volunteer)
    }

    /// Finishes the contest, fixing projected durations and the target
    /// slot duration.
    ///
    /// # Errors
    ///
    /// Returns [`PodiumError::DomainModel`] if no room is open in any period.
    pub fn build(mut self) -> Result<Contest> {
        let slot_count: usize = self.periods.iter().map(|p| p.rooms.len()).sum();
        if slot_count == 0 {
            return Err(PodiumError::DomainModel(format!(
                "contest '{}' has no usable room-period slot",
                self.name
            )));
        }

        for cat in &mut self.categories {
            cat.projected_duration =
                category_duration(cat.base_duration, cat.contestants.len(), self.transitions);
        }
        let total: u64 = self
            .categories
            .iter()
            .map(|c| u64::from(c.projected_duration))
            .sum();

        Ok(Contest {
            name: self.name,
            periods: self.periods,
            rooms: self.rooms,
            schools: self.schools,
            categories: self.categories,
            people: self.people,
            transitions: self.transitions,
            target_slot_duration: (total / slot_count as u64) as f64,
        })
    }

    fn add_person(&mut self, name: String, role: Role) -> Result<PersonId> {
        if !self.identities.insert((role, name.clone())) {
            return Err(PodiumError::Duplicate { kind: "person", name });
        }
        let id = PersonId::new(self.people.len());
        self.people.push(Person { id, name, role });
        Ok(id)
    }

    fn check_period(&self, id: PeriodId) -> Result<()> {
        check_index("period", id.index(), self.periods.len())
    }

    fn check_room(&self, id: RoomId) -> Result<()> {
        check_index("room", id.index(), self.rooms.len())
    }

    fn check_school(&self, id: SchoolId) -> Result<()> {
        check_index("school", id.index(), self.schools.len())
    }

    fn check_category(&self, id: CategoryId) -> Result<()> {
        check_index("category", id.index(), self.categories.len())
    }
}

fn check_index(kind: &'static str, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(PodiumError::UnknownReference { kind, index })
    }
}
