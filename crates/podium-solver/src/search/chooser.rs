//! Work queue selection.

use std::fmt::Debug;

use podium_config::{QueueOrder, SearchConfig};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The two work queues the search draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkQueue {
    Categories,
    Judges,
}

impl WorkQueue {
    pub fn other(self) -> Self {
        match self {
            Self::Categories => Self::Judges,
            Self::Judges => Self::Categories,
        }
    }
}

/// Decides which queue the next placement comes from.
///
/// Only consulted while both queues still hold items.
pub trait QueueChooser: Send + Debug {
    fn choose(&mut self, remaining_categories: usize, remaining_judges: usize) -> WorkQueue;
}

impl<C: QueueChooser + ?Sized> QueueChooser for Box<C> {
    fn choose(&mut self, remaining_categories: usize, remaining_judges: usize) -> WorkQueue {
        (**self).choose(remaining_categories, remaining_judges)
    }
}

/// Always draws categories while any remain.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoriesFirst;

impl QueueChooser for CategoriesFirst {
    fn choose(&mut self, _: usize, _: usize) -> WorkQueue {
        WorkQueue::Categories
    }
}

/// Always draws judges while any remain.
#[derive(Debug, Clone, Copy, Default)]
pub struct JudgesFirst;

impl QueueChooser for JudgesFirst {
    fn choose(&mut self, _: usize, _: usize) -> WorkQueue {
        WorkQueue::Judges
    }
}

/// Draws categories with a fixed probability, from a reproducible stream.
///
/// # Examples
///
/// ```
/// use podium_solver::search::{QueueChooser, SeededQueueChooser};
///
/// let mut a = SeededQueueChooser::new(7, 0.5);
/// let mut b = SeededQueueChooser::new(7, 0.5);
/// for _ in 0..16 {
///     assert_eq!(a.choose(3, 3), b.choose(3, 3));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SeededQueueChooser {
    rng: ChaCha8Rng,
    category_bias: f64,
}

impl SeededQueueChooser {
    /// `category_bias` is clamped to `[0, 1]`.
    pub fn new(seed: u64, category_bias: f64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            category_bias: clamp_bias(category_bias),
        }
    }

    /// Seeds from the operating system.
    pub fn from_os_rng(category_bias: f64) -> Self {
        Self {
            rng: ChaCha8Rng::from_os_rng(),
            category_bias: clamp_bias(category_bias),
        }
    }
}

impl QueueChooser for SeededQueueChooser {
    fn choose(&mut self, _: usize, _: usize) -> WorkQueue {
        if self.rng.random_bool(self.category_bias) {
            WorkQueue::Categories
        } else {
            WorkQueue::Judges
        }
    }
}

fn clamp_bias(bias: f64) -> f64 {
    if bias.is_nan() {
        0.5
    } else {
        bias.clamp(0.0, 1.0)
    }
}

/// Builds the chooser a search configuration asks for.
pub fn chooser_for(config: &SearchConfig) -> Box<dyn QueueChooser> {
    match config.queue_order {
        QueueOrder::CategoriesFirst => Box::new(CategoriesFirst),
        QueueOrder::JudgesFirst => Box::new(JudgesFirst),
        QueueOrder::Random => match config.random_seed {
            Some(seed) => Box::new(SeededQueueChooser::new(seed, config.category_bias)),
            None => Box::new(SeededQueueChooser::from_os_rng(config.category_bias)),
        },
    }
}
