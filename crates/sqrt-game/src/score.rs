//! Digit scoring.
//!
//! A guess scores the length of the common prefix between the digits typed
//! after its decimal point and the true root's fractional digits, rounded
//! to `root_digits` places. Scoring stops at the first mismatch, so
//! "10.6302" against 10.6301458... scores 3.

/// Fractional digits of `root` rounded to `digits` places.
pub fn root_fraction(root: f64, digits: usize) -> String {
    let fixed = format!("{:.*}", digits, root);
    match fixed.split_once('.') {
        Some((_, fraction)) => fraction.to_string(),
        None => String::new(),
    }
}

/// Everything the player typed after the first decimal point.
pub fn typed_fraction(text: &str) -> &str {
    text.split('.').nth(1).unwrap_or("")
}

/// Count leading fractional digits of `text` that match the root.
///
/// `value` is the parsed guess; NaN, infinite, or negative guesses score 0.
/// Digits typed past `root_digits` never match.
pub fn count_correct_digits(text: &str, value: f64, root: f64, root_digits: usize) -> usize {
    if value.is_nan() || !value.is_finite() || value < 0.0 {
        return 0;
    }

    let actual = root_fraction(root, root_digits);
    typed_fraction(text)
        .chars()
        .zip(actual.chars())
        .take_while(|(typed, expected)| typed == expected)
        .count()
}
