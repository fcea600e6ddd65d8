//! Shared helpers for the game engines: answer normalisation, feedback text,
//! and RNG construction.
//!
//! Every engine produces the same handful of feedback messages; keeping them
//! here means the wording stays identical across the five modes.

use rand::{rngs::StdRng, SeedableRng};

pub const FEEDBACK_CORRECT: &str = "Correct!";
pub const FEEDBACK_COMPLETE: &str = "Congratulations! You placed every element!";

/// Seeded generator when a seed is given, otherwise one from OS entropy.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

/// Fold-case an answer for comparison, optionally trimming surrounding
/// whitespace first.
pub fn normalize_answer(raw: &str, trim: bool) -> String {
    let s = if trim { raw.trim() } else { raw };
    s.to_lowercase()
}

/// Case-insensitive equality of a submitted answer against the expected value.
pub fn answers_match(submitted: &str, expected: &str, trim: bool) -> bool {
    normalize_answer(submitted, trim) == normalize_answer(expected, false)
}

/// True if `raw` reads as a whole number (sign allowed).
pub fn is_integer_text(raw: &str, trim: bool) -> bool {
    let s = if trim { raw.trim() } else { raw };
    s.parse::<i64>().is_ok()
}

pub fn feedback_reveal(expected: &str) -> String {
    format!("Wrong! The correct answer was: {expected}")
}

pub fn feedback_retry(attempts_left: u32) -> String {
    let noun = if attempts_left == 1 { "attempt" } else { "attempts" };
    format!("Wrong, {attempts_left} {noun} left.")
}

pub fn feedback_not_a_number(raw: &str) -> String {
    format!("'{raw}' is not a number, please enter digits only.")
}

pub fn feedback_wrong_mass(true_mass: f64) -> String {
    format!("Wrong! The correct answer was {}", true_mass.round())
}

pub fn feedback_wrong_cell(name: &str) -> String {
    format!("That is not {name}.")
}

pub fn attempts_label(attempts_left: u32) -> String {
    format!("Attempts left: {attempts_left}")
}
