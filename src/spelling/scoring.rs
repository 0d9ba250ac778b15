//! Star ratings.
//!
//! Two independent rules live here:
//! - [`rate`] is the per-round rating shown when a word is spelled correctly.
//!   It depends on attempts, the configured maximum and clues taken.
//! - [`cumulative_award`] is what the progress store adds to the running star
//!   total for a correct result. It only looks at attempts.
//!
//! Keep them separate; the cumulative total ignores clues.

/// Per-round star rating (0..=3).
///
/// Tiers are checked in order: one attempt is 3 stars, two attempts is 2,
/// anything up to `max_attempts` is 1, beyond that 0. Each clue costs one
/// star with a floor of zero.
pub fn rate(attempts: u32, max_attempts: u32, clues_taken: u32) -> u32 {
    let base: u32 = if attempts == 1 {
        3
    } else if attempts == 2 {
        2
    } else if attempts > 1 && attempts <= max_attempts {
        1
    } else {
        0
    };
    base.saturating_sub(clues_taken)
}

/// Stars added to the running total when a correct result is recorded.
pub fn cumulative_award(attempts: u32) -> u32 {
    match attempts {
        1 => 3,
        2 => 2,
        _ => 1,
    }
}

/// Rounded percentage of correct words; 0 when nothing was played.
pub fn accuracy(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((correct as f64 / total as f64) * 100.0).round() as u32
}
