//! Contest categories.

use std::collections::BTreeSet;
use std::fmt;

use super::ids::{CategoryId, PersonId, SchoolId};

/// The track a category belongs to: format, age group and language level.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryKey {
    pub format: String,
    pub age_group: String,
    pub language_level: String,
}

impl CategoryKey {
    pub fn new(
        format: impl Into<String>,
        age_group: impl Into<String>,
        language_level: impl Into<String>,
    ) -> Self {
        Self {
            format: format.into(),
            age_group: age_group.into(),
            language_level: language_level.into(),
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.format, self.age_group, self.language_level)
    }
}

/// A group of contestants sharing a format, age group and language level.
///
/// The projected duration is fixed when the contest is built, from the
/// contestant count and the contest's [`Transitions`](super::Transitions).
#[derive(Debug, Clone)]
pub struct Category {
    pub(super) id: CategoryId,
    pub(super) key: CategoryKey,
    pub(super) base_duration: u32,
    pub(super) contestants: Vec<PersonId>,
    pub(super) schools: BTreeSet<SchoolId>,
    pub(super) projected_duration: u32,
}

impl Category {
    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn key(&self) -> &CategoryKey {
        &self.key
    }

    /// Returns "format age-group language-level".
    pub fn name(&self) -> String {
        self.key.to_string()
    }

    pub fn format(&self) -> &str {
        &self.key.format
    }

    pub fn age_group(&self) -> &str {
        &self.key.age_group
    }

    pub fn language_level(&self) -> &str {
        &self.key.language_level
    }

    /// Speaking time per contestant, in minutes.
    pub fn base_duration(&self) -> u32 {
        self.base_duration
    }

    pub fn contestants(&self) -> &[PersonId] {
        &self.contestants
    }

    pub fn contestant_count(&self) -> usize {
        self.contestants.len()
    }

    /// Distinct schools of this category's contestants.
    pub fn schools(&self) -> &BTreeSet<SchoolId> {
        &self.schools
    }

    /// Projected running time including speaker transitions.
    pub fn projected_duration(&self) -> u32 {
        self.projected_duration
    }

    /// Returns true if a judge from `school` may judge this category.
    #[inline]
    pub fn admits_school(&self, school: SchoolId) -> bool {
        !self.schools.contains(&school)
    }

    /// Number of schools shared with `other`.
    pub fn shared_schools(&self, other: &BTreeSet<SchoolId>) -> usize {
        self.schools.intersection(other).count()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}
