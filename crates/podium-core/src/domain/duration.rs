//! Projected duration arithmetic.
//!
//! All durations are whole minutes.

/// Fixed overhead between consecutive speakers and between consecutive
/// categories sharing a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transitions {
    /// Minutes between two speakers of the same category.
    pub between_speakers: u32,
    /// Minutes between two categories in the same slot.
    pub between_categories: u32,
}

impl Transitions {
    pub const fn new(between_speakers: u32, between_categories: u32) -> Self {
        Self {
            between_speakers,
            between_categories,
        }
    }
}

impl Default for Transitions {
    fn default() -> Self {
        Self::new(2, 4)
    }
}

/// Projected running time of a category.
///
/// `max(0, (base_duration + between_speakers) * contestants - between_speakers)`
///
/// # Examples
///
/// ```
/// use podium_core::{category_duration, Transitions};
///
/// let t = Transitions::new(2, 4);
/// assert_eq!(category_duration(5, 2, t), 12);
/// assert_eq!(category_duration(5, 0, t), 0);
/// ```
pub fn category_duration(base_duration: u32, contestants: usize, transitions: Transitions) -> u32 {
    let per_speaker = u64::from(base_duration) + u64::from(transitions.between_speakers);
    let total = per_speaker.saturating_mul(contestants as u64);
    clamp_minutes(total.saturating_sub(u64::from(transitions.between_speakers)))
}

/// Projected running time of a slot holding categories with the given
/// projected durations.
///
/// `max(0, sum(duration + between_categories) - between_categories)`
///
/// # Examples
///
/// ```
/// use podium_core::{slot_duration, Transitions};
///
/// let t = Transitions::new(2, 4);
/// assert_eq!(slot_duration([12, 20], t), 36);
/// assert_eq!(slot_duration([], t), 0);
/// ```
pub fn slot_duration<I>(category_durations: I, transitions: Transitions) -> u32
where
    I: IntoIterator<Item = u32>,
{
    let gap = u64::from(transitions.between_categories);
    let total: u64 = category_durations
        .into_iter()
        .map(|d| u64::from(d) + gap)
        .sum();
    clamp_minutes(total.saturating_sub(gap))
}

fn clamp_minutes(minutes: u64) -> u32 {
    u32::try_from(minutes).unwrap_or(u32::MAX)
}
