//! Target selection.

use rand::Rng;

/// Pick a uniformly random integer target in `[min, max]`.
pub fn generate_target<R: Rng + ?Sized>(rng: &mut R, min: u32, max: u32) -> f64 {
    f64::from(rng.gen_range(min..=max))
}

/// Square root used for scoring. Negative targets are rooted by magnitude.
pub fn actual_root(target: f64) -> f64 {
    target.abs().sqrt()
}

/// Starting text for the guess input: the integer part of the root and a
/// trailing point, e.g. "10." for 113.
pub fn initial_guess(target: f64) -> String {
    format!("{}.", actual_root(target).floor())
}
