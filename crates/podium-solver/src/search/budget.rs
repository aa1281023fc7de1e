//! Dead-end budget.

use crate::error::SchedulingError;

/// Counts dead ends and aborts the search once a ceiling is passed.
///
/// # Example
///
/// ```
/// use podium_solver::search::AttemptBudget;
///
/// let mut budget = AttemptBudget::new(1);
/// assert!(budget.record_dead_end().is_ok());
/// assert!(budget.record_dead_end().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct AttemptBudget {
    limit: u64,
    dead_ends: u64,
}

impl AttemptBudget {
    pub fn new(limit: u64) -> Self {
        Self {
            limit,
            dead_ends: 0,
        }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn dead_ends(&self) -> u64 {
        self.dead_ends
    }

    pub fn remaining(&self) -> u64 {
        self.limit.saturating_sub(self.dead_ends)
    }

    /// Counts one dead end.
    ///
    /// # Errors
    ///
    /// Returns [`SchedulingError::AttemptsExhausted`] once the count exceeds
    /// the limit.
    pub fn record_dead_end(&mut self) -> Result<(), SchedulingError> {
        self.dead_ends += 1;
        if self.dead_ends > self.limit {
            return Err(SchedulingError::AttemptsExhausted {
                attempts: self.dead_ends,
                limit: self.limit,
            });
        }
        Ok(())
    }
}
