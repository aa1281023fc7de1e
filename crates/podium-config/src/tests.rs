//! Tests for scheduler configuration.

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        [durations]
        transition_between_speakers = 1
        transition_between_categories = 3
        max_time = 90
        max_time_imbalance = 1.1

        [slots]
        min_categories = 1
        max_categories = 2
        min_judges = 1
        max_judges = 4

        [search]
        max_attempts = 250
        skip_validation = true
        queue_order = "judges_first"
        alternate_on_dead_end = false
    "#;

    let config = SchedulerConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.transitions(), Transitions::new(1, 3));
    assert_eq!(config.durations.max_time, 90);
    assert_eq!(config.slots.max_categories, 2);
    assert_eq!(config.slots.max_judges, 4);
    assert_eq!(config.search.max_attempts, 250);
    assert!(config.search.skip_validation);
    assert_eq!(config.search.queue_order, QueueOrder::JudgesFirst);
    assert!(!config.search.alternate_on_dead_end);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        slots:
          min_judges: 3
          max_judges: 3
        search:
          queue_order: random
          random_seed: 42
          category_bias: 0.75
    "#;

    let config = SchedulerConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.slots.min_judges, 3);
    assert_eq!(config.search.queue_order, QueueOrder::Random);
    assert_eq!(config.search.random_seed, Some(42));
    assert_eq!(config.search.category_bias, 0.75);
}

#[test]
fn test_partial_sections_keep_defaults() {
    let config = SchedulerConfig::from_toml_str("[slots]\nmax_judges = 5\n").unwrap();
    assert_eq!(config.slots.max_judges, 5);
    assert_eq!(config.slots.min_judges, SlotLimits::default().min_judges);
    assert_eq!(config.durations, DurationConfig::default());
    assert_eq!(config.search, SearchConfig::default());
}

#[test]
fn test_empty_document_is_default() {
    assert_eq!(
        SchedulerConfig::from_toml_str("").unwrap(),
        SchedulerConfig::default()
    );
}

#[test]
fn test_defaults() {
    let config = SchedulerConfig::default();
    assert_eq!(config.transitions(), Transitions::new(2, 4));
    assert_eq!(config.durations.max_time_imbalance, 1.25);
    assert_eq!(config.search.max_attempts, 10_000);
    assert_eq!(config.search.queue_order, QueueOrder::CategoriesFirst);
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder() {
    let config = SchedulerConfig::new()
        .with_judges(2, 2)
        .with_categories(1, 1)
        .with_time_limits(60, 2.0)
        .with_transitions(0, 0)
        .with_max_attempts(10)
        .with_queue_order(QueueOrder::Random, Some(9))
        .with_skip_validation(true);

    assert_eq!(config.slots.min_judges, 2);
    assert_eq!(config.slots.max_categories, 1);
    assert_eq!(config.durations.max_time, 60);
    assert_eq!(config.transitions(), Transitions::new(0, 0));
    assert_eq!(config.search.max_attempts, 10);
    assert_eq!(config.search.random_seed, Some(9));
    assert!(config.search.skip_validation);
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_inverted_judge_bounds() {
    let config = SchedulerConfig::new().with_judges(3, 2);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
}

#[test]
fn test_validate_rejects_zero_judge_ceiling() {
    let config = SchedulerConfig::new().with_judges(0, 0);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    assert!(SchedulerConfig::new().with_judges(0, 1).validate().is_ok());
}

#[test]
fn test_validate_rejects_inverted_category_bounds() {
    assert!(SchedulerConfig::new().with_categories(2, 1).validate().is_err());
    assert!(SchedulerConfig::new().with_categories(0, 0).validate().is_err());
}

#[test]
fn test_validate_rejects_bad_imbalance() {
    assert!(SchedulerConfig::new().with_time_limits(60, 0.0).validate().is_err());
    assert!(SchedulerConfig::new()
        .with_time_limits(60, f64::NAN)
        .validate()
        .is_err());
}

#[test]
fn test_validate_rejects_bias_out_of_range() {
    let mut config = SchedulerConfig::new();
    config.search.category_bias = 1.5;
    assert!(config.validate().is_err());
}

#[test]
fn test_missing_file_is_io_error() {
    let err = SchedulerConfig::load("definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
