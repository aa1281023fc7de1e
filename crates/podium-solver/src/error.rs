//! Scheduling errors.

use podium_config::ConfigError;
use thiserror::Error;

/// Why a schedule could not be produced.
#[derive(Debug, Error)]
pub enum SchedulingError {
    /// The configuration contradicts itself.
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),

    /// Every branch of the search tree dead-ended.
    #[error("No valid schedule exists for this contest")]
    NoScheduleFound,

    /// The search gave up after too many dead ends.
    #[error("Search aborted after {attempts} dead ends (limit {limit})")]
    AttemptsExhausted { attempts: u64, limit: u64 },
}

impl SchedulingError {
    /// Returns true if the search ran and failed, as opposed to being
    /// rejected before it started.
    pub fn is_search_failure(&self) -> bool {
        matches!(self, Self::NoScheduleFound | Self::AttemptsExhausted { .. })
    }
}
