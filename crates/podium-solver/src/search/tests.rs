//! Tests for the backtracking driver.

use podium_config::SchedulerConfig;
use podium_core::ContestBuilder;
use podium_test::scenarios::{self, Scenario};
use podium_test::{random_contest, ContestShape};

use super::*;
use crate::eligibility::PlacementRules;
use crate::heuristic::{order_categories, order_judges, BalancedSlotSelector};
use crate::validator::{AcceptAll, MinJudgesValidator};

type Driver<'a, Ch> = SearchDriver<'a, BalancedSlotSelector, Ch, MinJudgesValidator>;

fn driver<Ch: QueueChooser>(scenario: &Scenario, chooser: Ch) -> Driver<'_, Ch> {
    let rules = PlacementRules::from_config(&scenario.config);
    SearchDriver::new(
        EligibilityTracker::new(&scenario.contest, rules),
        BalancedSlotSelector,
        chooser,
        MinJudgesValidator::new(rules.min_judges),
        AttemptBudget::new(scenario.config.search.max_attempts),
    )
}

fn run<Ch: QueueChooser>(
    scenario: &Scenario,
    chooser: Ch,
) -> (Result<Schedule, SchedulingError>, SearchStatistics) {
    let mut d = driver(scenario, chooser);
    let result = d.run(&scenario.categories, &scenario.judges);
    (result, d.statistics().clone())
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_single_slot_is_filled() {
    let scenario = scenarios::single_slot();
    let (result, stats) = run(&scenario, CategoriesFirst);
    let schedule = result.unwrap();

    assert_eq!(schedule.len(), 1);
    let slot = &schedule.slots()[0];
    assert_eq!(slot.categories().len(), 1);
    assert_eq!(slot.judge_count(), 2);
    assert_eq!(slot.projected_duration(), 12);
    assert!(schedule.is_complete());
    assert_eq!(stats.dead_ends, 0);
    assert_eq!(stats.placements, 3);
}

#[test]
fn test_single_slot_judges_first() {
    let scenario = scenarios::single_slot();
    let (result, _) = run(&scenario, JudgesFirst);
    let schedule = result.unwrap();
    assert_eq!(schedule.slots()[0].judge_count(), 2);
    assert_eq!(schedule.slots()[0].category_count(), 1);
}

#[test]
fn test_conflicted_judges_is_infeasible() {
    let scenario = scenarios::conflicted_judges();
    let (result, stats) = run(&scenario, CategoriesFirst);
    assert!(matches!(result, Err(SchedulingError::NoScheduleFound)));
    assert!(stats.dead_ends > 0);
}

#[test]
fn test_judge_shortage_exhausts_tree() {
    let scenario = scenarios::judge_shortage();
    let (result, stats) = run(&scenario, CategoriesFirst);
    assert!(matches!(result, Err(SchedulingError::NoScheduleFound)));
    assert!(stats.rejected_schedules > 0);
}

#[test]
fn test_judge_shortage_with_small_budget_aborts() {
    let scenario = scenarios::judge_shortage();
    let mut d = SearchDriver::new(
        EligibilityTracker::new(&scenario.contest, PlacementRules::from_config(&scenario.config)),
        BalancedSlotSelector,
        CategoriesFirst,
        MinJudgesValidator::new(2),
        AttemptBudget::new(3),
    );
    let err = d
        .run(&scenario.categories, &scenario.judges)
        .unwrap_err();
    assert!(matches!(
        err,
        SchedulingError::AttemptsExhausted {
            attempts: 4,
            limit: 3
        }
    ));
    assert_eq!(d.budget().dead_ends(), 4);
}

#[test]
fn test_empty_category_gets_a_zero_minute_slot() {
    let scenario = scenarios::empty_category();
    let (result, _) = run(&scenario, CategoriesFirst);
    let schedule = result.unwrap();
    let debate = scenario.categories[1];
    let slot = schedule.slot_of_category(debate).unwrap();
    assert_eq!(slot.projected_duration(), 0);
    assert_eq!(slot.judge_count(), 1);
}

// ============================================================================
// Driver behaviour
// ============================================================================

#[test]
fn test_alternation_off_fails_at_first_dead_end() {
    let scenario = scenarios::conflicted_judges();
    let mut d = driver(&scenario, CategoriesFirst).with_alternation(false);
    let result = d.run(&scenario.categories, &scenario.judges);
    assert!(matches!(result, Err(SchedulingError::NoScheduleFound)));
    assert_eq!(d.statistics().nodes_explored, 1);
    assert_eq!(d.statistics().dead_ends, 1);
}

#[test]
fn test_alternation_explores_judges_when_categories_stall() {
    let scenario = scenarios::conflicted_judges();
    let mut d = driver(&scenario, CategoriesFirst);
    let _ = d.run(&scenario.categories, &scenario.judges);
    assert!(d.statistics().nodes_explored > 1);
    assert!(d.statistics().placements > 0);
}

#[test]
fn test_skipping_validation_accepts_short_slots() {
    let scenario = scenarios::judge_shortage();
    let rules = PlacementRules::from_config(&scenario.config);
    let mut d = SearchDriver::new(
        EligibilityTracker::new(&scenario.contest, rules),
        BalancedSlotSelector,
        CategoriesFirst,
        AcceptAll,
        AttemptBudget::new(100),
    );
    let schedule = d.run(&scenario.categories, &scenario.judges).unwrap();
    assert!(schedule.is_complete());
    assert!(schedule.occupied_slots().any(|s| s.judge_count() < 2));
}

#[test]
fn test_queues_missing_a_judge_never_succeed() {
    let scenario = scenarios::single_slot();
    let rules = PlacementRules::from_config(&scenario.config);
    let mut d = SearchDriver::new(
        EligibilityTracker::new(&scenario.contest, rules),
        BalancedSlotSelector,
        CategoriesFirst,
        AcceptAll,
        AttemptBudget::new(100),
    );
    let result = d.run(&scenario.categories, &scenario.judges[..1]);
    assert!(matches!(result, Err(SchedulingError::NoScheduleFound)));
    assert!(d.statistics().rejected_schedules >= 1);
}

#[test]
fn test_unused_slots_are_purged() {
    let mut b = ContestBuilder::new("Spare room");
    let period = b.add_period("Morning");
    for name in ["Hall", "Annex"] {
        let room = b.add_room(name);
        b.open_room(period, room).unwrap();
    }
    let x = b.add_school("Xavier", "X");
    let y = b.add_school("Yale", "Y");
    let poetry = b.add_category("Poetry", "Senior", "Native", 5).unwrap();
    b.add_contestant("Ana", x, poetry).unwrap();
    let cy = b.add_judge("Cy", y).unwrap();
    let di = b.add_judge("Di", y).unwrap();
    let scenario = Scenario {
        contest: b.build().unwrap(),
        config: SchedulerConfig::new().with_judges(2, 2),
        categories: vec![poetry],
        judges: vec![cy, di],
    };

    // Di is first tried in the empty Annex, which the validator rejects.
    let (result, stats) = run(&scenario, CategoriesFirst);
    let schedule = result.unwrap();
    assert_eq!(scenario.contest.slot_count(), 2);
    assert_eq!(schedule.len(), 1);
    assert!(schedule.slots().iter().all(|s| !s.is_empty()));
    assert_eq!(stats.rejected_schedules, 1);
}

#[test]
fn test_seeded_chooser_is_reproducible() {
    let shape = ContestShape::conflict_free();
    let contest = random_contest(21, &shape);
    let scenario = Scenario {
        categories: order_categories(&contest),
        judges: order_judges(&contest),
        config: shape.config(),
        contest,
    };

    let (a, stats_a) = run(&scenario, SeededQueueChooser::new(99, 0.5));
    let (b, stats_b) = run(&scenario, SeededQueueChooser::new(99, 0.5));
    let (a, b) = (a.unwrap(), b.unwrap());
    assert_eq!(a, b);
    assert_eq!(stats_a.nodes_explored, stats_b.nodes_explored);
    assert_eq!(stats_a.placements, stats_b.placements);
}

#[test]
fn test_depth_matches_item_count() {
    let scenario = scenarios::single_slot();
    let (_, stats) = run(&scenario, CategoriesFirst);
    assert_eq!(stats.max_depth, 3);
    assert_eq!(stats.nodes_explored, 4);
}

// ============================================================================
// Building blocks
// ============================================================================

#[test]
fn test_budget_allows_exactly_limit_dead_ends() {
    let mut budget = AttemptBudget::new(2);
    assert!(budget.record_dead_end().is_ok());
    assert!(budget.record_dead_end().is_ok());
    assert_eq!(budget.remaining(), 0);
    let err = budget.record_dead_end().unwrap_err();
    assert!(err.is_search_failure());
}

#[test]
fn test_zero_budget_aborts_on_first_dead_end() {
    let mut budget = AttemptBudget::new(0);
    assert!(matches!(
        budget.record_dead_end(),
        Err(SchedulingError::AttemptsExhausted {
            attempts: 1,
            limit: 0
        })
    ));
}

#[test]
fn test_fixed_choosers() {
    assert_eq!(CategoriesFirst.choose(1, 1), WorkQueue::Categories);
    assert_eq!(JudgesFirst.choose(1, 1), WorkQueue::Judges);
    assert_eq!(WorkQueue::Categories.other(), WorkQueue::Judges);
}

#[test]
fn test_seeded_chooser_bias_extremes() {
    let mut always = SeededQueueChooser::new(1, 1.0);
    let mut never = SeededQueueChooser::new(1, 0.0);
    for _ in 0..32 {
        assert_eq!(always.choose(2, 2), WorkQueue::Categories);
        assert_eq!(never.choose(2, 2), WorkQueue::Judges);
    }
}

#[test]
fn test_chooser_for_config() {
    use podium_config::{QueueOrder, SearchConfig};

    let config = SearchConfig {
        queue_order: QueueOrder::JudgesFirst,
        ..SearchConfig::default()
    };
    assert_eq!(chooser_for(&config).choose(1, 1), WorkQueue::Judges);

    let config = SearchConfig {
        queue_order: QueueOrder::Random,
        random_seed: Some(5),
        category_bias: 1.0,
        ..SearchConfig::default()
    };
    assert_eq!(chooser_for(&config).choose(1, 1), WorkQueue::Categories);
}
