//! Guess closeness buckets, used for styling the guess log.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How close a guess came to the precision goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuessClass {
    /// Reached the goal.
    Correct,
    /// One digit short.
    VeryClose,
    /// Two digits short.
    Close,
    Far,
}

impl GuessClass {
    /// CSS class name.
    pub fn as_str(&self) -> &'static str {
        match self {
            GuessClass::Correct => "correct",
            GuessClass::VeryClose => "very-close",
            GuessClass::Close => "close",
            GuessClass::Far => "far",
        }
    }
}

impl fmt::Display for GuessClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bucket a guess by how many digits it is short of `precision`.
pub fn classify(precision: u32, correct_digits: usize) -> GuessClass {
    let diff = i64::from(precision) - correct_digits as i64;
    match diff {
        d if d <= 0 => GuessClass::Correct,
        1 => GuessClass::VeryClose,
        2 => GuessClass::Close,
        _ => GuessClass::Far,
    }
}
