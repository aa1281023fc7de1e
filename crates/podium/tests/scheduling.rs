//! End-to-end scheduling through the public facade.

use std::collections::BTreeMap;

use podium::prelude::*;
use podium::{slot_duration, CategoryId, ConfigError, PersonId};
use podium_test::{random_contest, scenarios, ContestShape};

/// Checks every guarantee a returned schedule makes.
fn assert_valid(contest: &Contest, config: &SchedulerConfig, schedule: &Schedule) {
    let mut category_seats: BTreeMap<CategoryId, usize> = BTreeMap::new();
    let mut judge_seats: BTreeMap<PersonId, usize> = BTreeMap::new();
    let target = contest.target_slot_duration();

    for slot in schedule.slots() {
        assert!(!slot.is_empty(), "{} left in the schedule", slot.key());
        assert!(slot.category_count() <= config.slots.max_categories);
        assert!(slot.judge_count() <= config.slots.max_judges);
        if slot.is_occupied() {
            assert!(
                slot.judge_count() >= config.slots.min_judges,
                "{} is short of judges",
                slot.key()
            );
        }

        let durations = slot
            .categories()
            .iter()
            .map(|c| contest.category(*c).projected_duration());
        let duration = slot_duration(durations, contest.transitions());
        assert_eq!(slot.projected_duration(), duration);
        // A lone category opens its slot whatever its length.
        if slot.category_count() > 1 {
            assert!(duration <= config.durations.max_time);
            if target > 0.0 {
                assert!(f64::from(duration) / target <= config.durations.max_time_imbalance);
            }
        }

        for judge in slot.judges() {
            if let Some(period) = contest.person(*judge).bound_period() {
                assert_eq!(period, slot.period());
            }
            for category in slot.categories() {
                assert!(
                    contest.judge_eligible_for_category(*judge, *category),
                    "{} judges a category from their own school",
                    contest.person(*judge).name()
                );
            }
            *judge_seats.entry(*judge).or_default() += 1;
        }
        for category in slot.categories() {
            *category_seats.entry(*category).or_default() += 1;
        }
    }

    assert!(schedule.is_complete());
    assert_eq!(category_seats.len(), contest.categories().len());
    assert_eq!(judge_seats.len(), contest.judge_count());
    assert!(category_seats.values().chain(judge_seats.values()).all(|n| *n == 1));
}

// ============================================================================
// Hand-built contests
// ============================================================================

#[test]
fn test_single_slot_contest() {
    let s = scenarios::single_slot();
    let solved = solve_with_config(&s.contest, s.config.clone()).unwrap();

    assert_valid(&s.contest, &s.config, &solved.schedule);
    assert_eq!(solved.schedule.len(), 1);
    let slot = &solved.schedule.slots()[0];
    assert_eq!(slot.projected_duration(), 12);
    assert_eq!(slot.judge_count(), 2);
}

#[test]
fn test_conflicted_judges_have_no_schedule() {
    let s = scenarios::conflicted_judges();
    let err = solve_with_config(&s.contest, s.config.clone()).unwrap_err();
    assert!(matches!(err, SchedulingError::NoScheduleFound));
    assert!(err.is_search_failure());
}

#[test]
fn test_judge_shortage_has_no_schedule() {
    let s = scenarios::judge_shortage();
    let err = solve_with_config(&s.contest, s.config.clone()).unwrap_err();
    assert!(err.is_search_failure());
}

#[test]
fn test_empty_category_gets_a_slot() {
    let s = scenarios::empty_category();
    let solved = solve_with_config(&s.contest, s.config.clone()).unwrap();

    assert_valid(&s.contest, &s.config, &solved.schedule);
    let debate = solved.schedule.slot_of_category(s.categories[1]).unwrap();
    assert_eq!(debate.projected_duration(), 0);
    assert_eq!(debate.judge_count(), 1);
}

#[test]
fn test_period_bound_judge_stays_in_period() {
    let mut b = ContestBuilder::new("Two sessions");
    let morning = b.add_period("Morning");
    let evening = b.add_period("Evening");
    let hall = b.add_room("Hall");
    b.open_room(morning, hall).unwrap();
    b.open_room(evening, hall).unwrap();
    let x = b.add_school("Xavier", "X");
    let y = b.add_school("Yale", "Y");
    let poetry = b.add_category("Poetry", "Senior", "Native", 5).unwrap();
    let prose = b.add_category("Prose", "Senior", "Native", 5).unwrap();
    b.add_contestant("Ana", x, poetry).unwrap();
    b.add_contestant("Bo", x, prose).unwrap();
    let late = b.add_period_judge("Eve", y, evening).unwrap();
    b.add_judge("Cy", y).unwrap();
    let contest = b.build().unwrap();

    let config = SchedulerConfig::new().with_judges(1, 1).with_categories(1, 1);
    let solved = solve_with_config(&contest, config.clone()).unwrap();

    assert_valid(&contest, &config, &solved.schedule);
    assert_eq!(solved.schedule.slot_of_judge(late).unwrap().period(), evening);
}

#[test]
fn test_invalid_config_is_rejected_before_search() {
    let s = scenarios::single_slot();
    let config = SchedulerConfig::new().with_judges(3, 2);
    let err = solve_with_config(&s.contest, config).unwrap_err();
    assert!(matches!(
        err,
        SchedulingError::InvalidConfig(ConfigError::Invalid(_))
    ));
    assert!(!err.is_search_failure());
}

#[test]
fn test_min_categories_does_not_affect_feasibility() {
    let s = scenarios::single_slot();
    let config = s.config.clone().with_categories(3, 3);
    let solved = solve_with_config(&s.contest, config.clone()).unwrap();

    assert_valid(&s.contest, &config, &solved.schedule);
    assert_eq!(solved.schedule.slots()[0].category_count(), 1);
}

#[test]
fn test_solve_without_config_file_uses_defaults() {
    let s = scenarios::single_slot();
    let solved = solve(&s.contest).unwrap();
    assert_valid(&s.contest, &SchedulerConfig::default(), &solved.schedule);
}

// ============================================================================
// Generated contests
// ============================================================================

#[test]
fn test_generated_contests_categories_first() {
    let shape = ContestShape::default();
    let config = shape.config();
    for seed in 0..8 {
        let contest = random_contest(seed, &shape);
        let solved = solve_with_config(&contest, config.clone())
            .unwrap_or_else(|e| panic!("seed {seed}: {e}"));
        assert_valid(&contest, &config, &solved.schedule);
        assert_eq!(solved.schedule.len(), shape.slot_count());
    }
}

#[test]
fn test_generated_contests_random_order() {
    let shape = ContestShape::conflict_free();
    for seed in 0..8 {
        let config = shape.config().with_queue_order(QueueOrder::Random, Some(seed));
        let contest = random_contest(seed, &shape);
        let solved = solve_with_config(&contest, config.clone())
            .unwrap_or_else(|e| panic!("seed {seed}: {e}"));
        assert_valid(&contest, &config, &solved.schedule);
        assert_eq!(solved.statistics.dead_ends, 0);
    }
}

#[test]
fn test_seeded_runs_agree() {
    let shape = ContestShape::conflict_free();
    let contest = random_contest(42, &shape);
    let config = shape.config().with_queue_order(QueueOrder::Random, Some(7));

    let a = Scheduler::new(&contest, config.clone()).unwrap().solve().unwrap();
    let b = Scheduler::new(&contest, config).unwrap().solve().unwrap();
    assert_eq!(a.schedule, b.schedule);
    assert_eq!(a.statistics.nodes_explored, b.statistics.nodes_explored);
}
