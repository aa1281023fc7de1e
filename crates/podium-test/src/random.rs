//! Reproducible generated contests.
//!
//! The same seed and shape always produce the same contest.

use podium_config::SchedulerConfig;
use podium_core::{Contest, ContestBuilder};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const FORMATS: [&str; 3] = ["Poetry", "Prose", "Drama"];
const AGE_GROUPS: [&str; 3] = ["Junior", "Intermediate", "Senior"];

/// Size and conflict profile of a generated contest.
///
/// Every room is open in every period and there is one category per slot.
/// Contestants of category `i` come from school `i % contest_schools` or the
/// one after it, so each contestant school stays clear of most slots.
/// Judges fill exactly two seats per slot; the first `conflicted_judges` of
/// them belong to contestant schools, the rest to judge-only schools.
///
/// With [`ContestShape::config`] the default shape is always schedulable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContestShape {
    pub periods: usize,
    pub rooms: usize,
    pub contest_schools: usize,
    pub judge_only_schools: usize,
    pub conflicted_judges: usize,
    pub max_contestants: usize,
    pub min_base_duration: u32,
    pub max_base_duration: u32,
}

impl Default for ContestShape {
    fn default() -> Self {
        Self {
            periods: 2,
            rooms: 3,
            contest_schools: 5,
            judge_only_schools: 2,
            conflicted_judges: 3,
            max_contestants: 4,
            min_base_duration: 3,
            max_base_duration: 6,
        }
    }
}

impl ContestShape {
    /// A shape whose judges never conflict with any category.
    pub fn conflict_free() -> Self {
        Self {
            conflicted_judges: 0,
            ..Self::default()
        }
    }

    pub fn slot_count(&self) -> usize {
        self.periods * self.rooms
    }

    /// Two judges and one category per slot.
    pub fn config(&self) -> SchedulerConfig {
        SchedulerConfig::new().with_judges(2, 2).with_categories(1, 1)
    }
}

/// Generates a contest from `seed`.
///
/// # Panics
///
/// Panics if the shape has no slot, no contest school, or no judge-only
/// school while some judges must come from one.
pub fn random_contest(seed: u64, shape: &ContestShape) -> Contest {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut b = ContestBuilder::new(format!("Generated #{seed}"));

    let periods: Vec<_> = (0..shape.periods)
        .map(|p| b.add_period(format!("Period {p}")))
        .collect();
    let rooms: Vec<_> = (0..shape.rooms)
        .map(|r| b.add_room(format!("Room {r}")))
        .collect();
    for &period in &periods {
        for &room in &rooms {
            b.open_room(period, room).expect("fixture");
        }
    }

    let contest_schools: Vec<_> = (0..shape.contest_schools)
        .map(|s| b.add_school(format!("School {s}"), format!("S{s}")))
        .collect();
    let judge_schools: Vec<_> = (0..shape.judge_only_schools)
        .map(|s| b.add_school(format!("Academy {s}"), format!("A{s}")))
        .collect();

    for i in 0..shape.slot_count() {
        let category = b
            .add_category(
                FORMATS[i % FORMATS.len()],
                AGE_GROUPS[(i / FORMATS.len()) % AGE_GROUPS.len()],
                format!("L{}", i / (FORMATS.len() * AGE_GROUPS.len())),
                rng.random_range(shape.min_base_duration..=shape.max_base_duration),
            )
            .expect("fixture");
        let contestants = rng.random_range(1..=shape.max_contestants.max(1));
        for k in 0..contestants {
            let offset = usize::from(rng.random_bool(0.5));
            let school = contest_schools[(i + offset) % contest_schools.len()];
            b.add_contestant(format!("c{i}-{k}"), school, category)
                .expect("fixture");
        }
    }

    let conflicted = shape.conflicted_judges.min(contest_schools.len());
    for j in 0..2 * shape.slot_count() {
        let school = if j < conflicted {
            contest_schools[j]
        } else {
            judge_schools[j % judge_schools.len()]
        };
        b.add_judge(format!("j{j}"), school).expect("fixture");
    }

    b.build().expect("fixture")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_contest() {
        let shape = ContestShape::default();
        let a = random_contest(11, &shape);
        let b = random_contest(11, &shape);
        assert_eq!(a.projected_duration(), b.projected_duration());
        assert_eq!(a.people(), b.people());
    }

    #[test]
    fn test_shape_is_respected() {
        let shape = ContestShape::default();
        let contest = random_contest(3, &shape);
        assert_eq!(contest.slot_count(), 6);
        assert_eq!(contest.categories().len(), 6);
        assert_eq!(contest.judge_count(), 12);
        let conflicted = contest
            .judges()
            .filter(|j| {
                contest
                    .categories()
                    .iter()
                    .any(|c| !contest.judge_eligible_for_category(j.id(), c.id()))
            })
            .count();
        assert!(conflicted <= shape.conflicted_judges);
    }

    #[test]
    fn test_conflict_free_shape() {
        let contest = random_contest(5, &ContestShape::conflict_free());
        for judge in contest.judges() {
            for cat in contest.categories() {
                assert!(contest.judge_eligible_for_category(judge.id(), cat.id()));
            }
        }
    }
}
