//! People taking part in a contest.

use std::fmt;

use super::ids::{CategoryId, PeriodId, PersonId, SchoolId};

/// What a person does at the contest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// Judges slots. A judge bound to a period may only sit in that period.
    Judge {
        school: SchoolId,
        period: Option<PeriodId>,
    },
    /// Speaks in exactly one category.
    Contestant {
        school: SchoolId,
        category: CategoryId,
    },
    /// Helps out; never scheduled.
    Volunteer,
}

/// A named participant.
///
/// Identity is the name together with the role, which carries the school
/// and, for contestants, the category. Two people with the same name in
/// different schools are different people.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    pub(super) id: PersonId,
    pub(super) name: String,
    pub(super) role: Role,
}

impl Person {
    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// The school this person represents, if any.
    pub fn school(&self) -> Option<SchoolId> {
        match self.role {
            Role::Judge { school, .. } | Role::Contestant { school, .. } => Some(school),
            Role::Volunteer => None,
        }
    }

    pub fn is_judge(&self) -> bool {
        matches!(self.role, Role::Judge { .. })
    }

    pub fn is_contestant(&self) -> bool {
        matches!(self.role, Role::Contestant { .. })
    }

    pub fn is_volunteer(&self) -> bool {
        matches!(self.role, Role::Volunteer)
    }

    /// The period a judge is bound to, if any.
    pub fn bound_period(&self) -> Option<PeriodId> {
        match self.role {
            Role::Judge { period, .. } => period,
            _ => None,
        }
    }

    /// The category a contestant speaks in.
    pub fn category(&self) -> Option<CategoryId> {
        match self.role {
            Role::Contestant { category, .. } => Some(category),
            _ => None,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.role {
            Role::Judge { .. } => write!(f, "[J] {}", self.name),
            Role::Contestant { .. } => write!(f, "[C] {}", self.name),
            Role::Volunteer => write!(f, "[V] {}", self.name),
        }
    }
}
