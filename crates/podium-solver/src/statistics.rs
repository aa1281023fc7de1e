//! Search statistics.

use std::time::Duration;

/// Counters for one search run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchStatistics {
    /// Snapshots the search visited, the root included.
    pub nodes_explored: u64,
    /// Placements applied.
    pub placements: u64,
    /// Branches abandoned, rejected terminal schedules included.
    pub dead_ends: u64,
    /// Terminal schedules the validator rejected.
    pub rejected_schedules: u64,
    /// Deepest placement count reached.
    pub max_depth: usize,
    /// Wall-clock time spent searching.
    pub duration: Duration,
}

impl SearchStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_node(&mut self, depth: usize) {
        self.nodes_explored += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Nodes visited per second.
    pub fn speed(&self) -> u64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            (self.nodes_explored as f64 / secs) as u64
        } else {
            0
        }
    }
}
