//! Decoy generation for the mass quiz.
//!
//! The true mass is shown next to two plausible decoys drawn uniformly from
//! `[max(m - offset, 1), m + offset]` with `offset = max(m / 8, 5)`. A decoy
//! is accepted only if its rounded value differs from every value already in
//! the set, so the three options never look identical once rounded for
//! display.

use std::collections::HashSet;

use rand::Rng;

/// Number of options shown to the player.
pub const CHOICE_COUNT: usize = 3;

const RELATIVE_SPREAD: f64 = 0.125;
const MIN_SPREAD: f64 = 5.0;
const MIN_DECOY: f64 = 1.0;

/// Sampling interval for decoys around `true_mass`.
pub fn decoy_interval(true_mass: f64) -> (f64, f64) {
    let offset = (true_mass * RELATIVE_SPREAD).max(MIN_SPREAD);
    let lower = (true_mass - offset).max(MIN_DECOY);
    let upper = (true_mass + offset).min(f64::MAX);
    (lower, upper)
}

/// Key used for the "looks the same on screen" test. Stored as bits so very
/// large masses do not saturate an integer cast.
fn rounded_key(value: f64) -> u64 {
    value.round().to_bits()
}

/// Build the shuffled answer set: the exact `true_mass` plus two decoys whose
/// rounded values are pairwise distinct from each other and from the truth.
///
/// `true_mass` must be positive and finite; the interval is then at least
/// four units wide and always holds enough distinct integers to terminate.
pub fn build_answer_choices<R: Rng + ?Sized>(rng: &mut R, true_mass: f64) -> Vec<f64> {
    let (lower, upper) = decoy_interval(true_mass);

    let mut choices = Vec::with_capacity(CHOICE_COUNT);
    let mut rounded = HashSet::with_capacity(CHOICE_COUNT);
    choices.push(true_mass);
    rounded.insert(rounded_key(true_mass));

    while rounded.len() < CHOICE_COUNT {
        let candidate = rng.gen_range(lower..=upper);
        if rounded.insert(rounded_key(candidate)) {
            choices.push(candidate);
        }
    }

    // Fisher-Yates, same as the registry shuffle.
    for i in (1..choices.len()).rev() {
        let j = rng.gen_range(0..=i);
        choices.swap(i, j);
    }
    choices
}
