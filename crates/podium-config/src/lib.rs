//! Configuration system for Podium.
//!
//! Load scheduler configuration from TOML or YAML files to tune durations,
//! per-slot bounds and the search budget without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use podium_config::{QueueOrder, SchedulerConfig};
//!
//! let config = SchedulerConfig::from_toml_str(r#"
//!     [durations]
//!     max_time = 120
//!     max_time_imbalance = 1.5
//!
//!     [slots]
//!     min_judges = 2
//!     max_judges = 2
//!
//!     [search]
//!     max_attempts = 500
//!     queue_order = "random"
//!     random_seed = 7
//! "#).unwrap();
//!
//! assert_eq!(config.durations.max_time, 120);
//! assert_eq!(config.search.queue_order, QueueOrder::Random);
//! assert!(config.validate().is_ok());
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use podium_config::SchedulerConfig;
//!
//! let config = SchedulerConfig::load("podium.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use podium_core::Transitions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main scheduler configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulerConfig {
    /// Transition overheads and duration ceilings.
    #[serde(default)]
    pub durations: DurationConfig,

    /// Per-slot category and judge bounds.
    #[serde(default)]
    pub slots: SlotLimits,

    /// Search driver settings.
    #[serde(default)]
    pub search: SearchConfig,
}

impl SchedulerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the per-slot judge bounds.
    pub fn with_judges(mut self, min: usize, max: usize) -> Self {
        self.slots.min_judges = min;
        self.slots.max_judges = max;
        self
    }

    /// Sets the per-slot category bounds.
    pub fn with_categories(mut self, min: usize, max: usize) -> Self {
        self.slots.min_categories = min;
        self.slots.max_categories = max;
        self
    }

    /// Sets the absolute slot ceiling and the fairness multiplier.
    pub fn with_time_limits(mut self, max_time: u32, max_time_imbalance: f64) -> Self {
        self.durations.max_time = max_time;
        self.durations.max_time_imbalance = max_time_imbalance;
        self
    }

    /// Sets the transition overheads, in minutes.
    pub fn with_transitions(mut self, between_speakers: u32, between_categories: u32) -> Self {
        self.durations.transition_between_speakers = between_speakers;
        self.durations.transition_between_categories = between_categories;
        self
    }

    /// Sets the dead-end budget.
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.search.max_attempts = max_attempts;
        self
    }

    /// Sets the queue order and, for [`QueueOrder::Random`], its seed.
    pub fn with_queue_order(mut self, order: QueueOrder, seed: Option<u64>) -> Self {
        self.search.queue_order = order;
        self.search.random_seed = seed;
        self
    }

    /// Accepts every terminal schedule without the minimum-judge check.
    pub fn with_skip_validation(mut self, skip: bool) -> Self {
        self.search.skip_validation = skip;
        self
    }

    /// Returns the transition overheads as a domain value.
    pub fn transitions(&self) -> Transitions {
        self.durations.transitions()
    }

    /// Checks the configuration for contradictory bounds.
    ///
    /// `min_categories` is checked against `max_categories` here but is not
    /// enforced when validating schedules.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let slots = &self.slots;
        if slots.max_categories == 0 {
            return Err(ConfigError::Invalid(
                "max_categories must be at least 1".to_string(),
            ));
        }
        if slots.max_judges == 0 {
            return Err(ConfigError::Invalid(
                "max_judges must be at least 1".to_string(),
            ));
        }
        if slots.min_categories > slots.max_categories {
            return Err(ConfigError::Invalid(format!(
                "min_categories ({}) exceeds max_categories ({})",
                slots.min_categories, slots.max_categories
            )));
        }
        if slots.min_judges > slots.max_judges {
            return Err(ConfigError::Invalid(format!(
                "min_judges ({}) exceeds max_judges ({})",
                slots.min_judges, slots.max_judges
            )));
        }
        let imbalance = self.durations.max_time_imbalance;
        if !imbalance.is_finite() || imbalance <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "max_time_imbalance must be a positive number, got {imbalance}"
            )));
        }
        let bias = self.search.category_bias;
        if !(0.0..=1.0).contains(&bias) {
            return Err(ConfigError::Invalid(format!(
                "category_bias must be within [0, 1], got {bias}"
            )));
        }
        Ok(())
    }
}

/// Duration configuration, in minutes.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct DurationConfig {
    /// Overhead between two speakers of a category.
    pub transition_between_speakers: u32,

    /// Overhead between two categories sharing a slot.
    pub transition_between_categories: u32,

    /// Absolute ceiling on a slot's projected duration.
    pub max_time: u32,

    /// Ceiling on a slot's projected duration relative to the contest's
    /// mean slot duration.
    pub max_time_imbalance: f64,
}

impl DurationConfig {
    pub fn transitions(&self) -> Transitions {
        Transitions::new(
            self.transition_between_speakers,
            self.transition_between_categories,
        )
    }
}

impl Default for DurationConfig {
    fn default() -> Self {
        let transitions = Transitions::default();
        Self {
            transition_between_speakers: transitions.between_speakers,
            transition_between_categories: transitions.between_categories,
            max_time: 180,
            max_time_imbalance: 1.25,
        }
    }
}

/// Per-slot membership bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SlotLimits {
    /// Accepted for completeness; schedules are not checked against it.
    pub min_categories: usize,

    /// Most categories a slot may hold.
    pub max_categories: usize,

    /// Fewest judges an occupied slot must end up with.
    pub min_judges: usize,

    /// Most judges a slot may hold.
    pub max_judges: usize,
}

impl Default for SlotLimits {
    fn default() -> Self {
        Self {
            min_categories: 1,
            max_categories: 3,
            min_judges: 2,
            max_judges: 3,
        }
    }
}

/// Search driver configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SearchConfig {
    /// Dead-end branches tolerated before the search aborts.
    pub max_attempts: u64,

    /// Accept any terminal schedule without the minimum-judge check.
    pub skip_validation: bool,

    /// Which work queue to draw from while both still hold items.
    pub queue_order: QueueOrder,

    /// Probability of drawing a category under [`QueueOrder::Random`].
    pub category_bias: f64,

    /// Seed for [`QueueOrder::Random`]; drawn from the OS when absent.
    pub random_seed: Option<u64>,

    /// Try the other work queue before failing a step.
    pub alternate_on_dead_end: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_attempts: 10_000,
            skip_validation: false,
            queue_order: QueueOrder::default(),
            category_bias: 0.5,
            random_seed: None,
            alternate_on_dead_end: true,
        }
    }
}

/// Work queue preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueOrder {
    /// Place every category before any judge.
    #[default]
    CategoriesFirst,

    /// Place every judge before any category.
    JudgesFirst,

    /// Pick a queue at random on each step.
    Random,
}

#[cfg(test)]
mod tests;
