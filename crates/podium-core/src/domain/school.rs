//! Schools and their delegations.

use std::fmt;

use super::ids::{PersonId, SchoolId};

/// The conflict-of-interest unit: a judge never sits in a slot with a
/// contestant from their own school.
#[derive(Debug, Clone)]
pub struct School {
    pub(super) id: SchoolId,
    pub(super) name: String,
    pub(super) short_name: String,
    pub(super) judges: Vec<PersonId>,
    pub(super) contestants: Vec<PersonId>,
}

impl School {
    pub fn id(&self) -> SchoolId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short display code, e.g. "STM".
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn judges(&self) -> &[PersonId] {
        &self.judges
    }

    pub fn contestants(&self) -> &[PersonId] {
        &self.contestants
    }
}

impl fmt::Display for School {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
