//! Guess log records.

use serde::{Deserialize, Serialize};

/// One submitted guess. Invalid input is recorded too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guess {
    /// 1-based position in the current round.
    pub number: u32,
    /// Text exactly as typed.
    pub value: String,
    pub correct_digits: usize,
    /// Square of the parsed guess; NaN when the input was not a number.
    pub squared: f64,
}

impl Guess {
    /// Text shown for the squared value.
    pub fn squared_display(&self) -> String {
        format_number(self.squared)
    }

    /// The log line, e.g. "Guess 2 (10.63) You have 2 digits after the
    /// decimal correct. The square of your guess is 112.9969."
    pub fn describe(&self) -> String {
        format!(
            "Guess {} ({}) You have {} digits after the decimal correct. The square of your guess is {}.",
            self.number,
            self.value,
            self.correct_digits,
            self.squared_display()
        )
    }
}

/// Render a float the way the page shows numbers: "NaN", "Infinity", or the
/// shortest decimal that round-trips.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(6.25), "6.25");
    }

    #[test]
    fn test_describe_invalid_guess() {
        let guess = Guess {
            number: 1,
            value: "abc".to_string(),
            correct_digits: 0,
            squared: f64::NAN,
        };
        assert_eq!(
            guess.describe(),
            "Guess 1 (abc) You have 0 digits after the decimal correct. The square of your guess is NaN."
        );
    }
}
