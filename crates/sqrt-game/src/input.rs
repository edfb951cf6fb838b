//! Parsing of the free-text inputs on the game card.

use std::sync::OnceLock;

use regex::Regex;

/// Signed decimal: digits on at least one side of an optional point.
const NUMBER_PATTERN: &str = r"^[+-]?[0-9]*\.?[0-9]+$|^[+-]?[0-9]+\.?[0-9]*$";

/// Strings the pattern would accept or the player commonly types that are
/// not numbers.
const DEGENERATE: [&str; 5] = ["", ".", "-", "+", "-."];

/// Leading integer of a box's text; the rest of the text is ignored.
const INTEGER_PREFIX: &str = r"^\s*[+-]?[0-9]+";

/// Leading decimal, optionally with an exponent.
const DECIMAL_PREFIX: &str = r"^\s*[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?";

fn number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(NUMBER_PATTERN).expect("number pattern is valid"))
}

fn integer_prefix_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(INTEGER_PREFIX).expect("integer prefix is valid"))
}

fn decimal_prefix_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(DECIMAL_PREFIX).expect("decimal prefix is valid"))
}

/// Leading integer of `text`, e.g. 2 for "2.5" and 3 for "3abc".
///
/// None when no digits lead. Out-of-range values saturate.
pub fn leading_integer(text: &str) -> Option<i64> {
    let digits = integer_prefix_regex().find(text)?.as_str().trim_start();
    let saturated = if digits.starts_with('-') { i64::MIN } else { i64::MAX };
    Some(digits.parse().unwrap_or(saturated))
}

/// Leading decimal of `text`, e.g. 12.5 for "12.5kg".
pub fn leading_decimal(text: &str) -> Option<f64> {
    let number = decimal_prefix_regex().find(text)?.as_str().trim_start();
    number.parse().ok()
}

/// Whether a guess string is a well-formed signed decimal.
pub fn is_valid_number(text: &str) -> bool {
    !DEGENERATE.contains(&text) && number_regex().is_match(text)
}

/// Parse a guess. Invalid input yields NaN.
pub fn parse_guess(text: &str) -> f64 {
    if !is_valid_number(text) {
        return f64::NAN;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse the target input from its leading number. None if no number
/// leads or it is not finite.
pub fn parse_target(text: &str) -> Option<f64> {
    leading_decimal(text).filter(|t| t.is_finite())
}

/// Parse the precision input from its leading integer. None if no digits
/// lead or the integer is negative.
pub fn parse_precision(text: &str) -> Option<u32> {
    let value = leading_integer(text)?;
    if value < 0 {
        return None;
    }
    Some(u32::try_from(value).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        for text in ["3.14", "3.", "-3.14", "+2", ".5", "-.5", "10", "007.250"] {
            assert!(is_valid_number(text), "{text:?} should be valid");
        }
    }

    #[test]
    fn test_invalid_numbers() {
        let invalid = [
            "", ".", "-", "+", "-.", "abc", "10.63a", "1.2.3", "1e5", " 3.1", "--1", "+-1",
        ];
        for text in invalid {
            assert!(!is_valid_number(text), "{text:?} should be invalid");
        }
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        assert!(!is_valid_number("\u{0663}.\u{0661}"));
    }

    #[test]
    fn test_parse_guess() {
        assert_eq!(parse_guess("2.75"), 2.75);
        assert_eq!(parse_guess("3."), 3.0);
        assert_eq!(parse_guess("-.5"), -0.5);
        assert!(parse_guess("abc").is_nan());
        assert!(parse_guess(".").is_nan());
    }

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target("113"), Some(113.0));
        assert_eq!(parse_target(" 2.5 "), Some(2.5));
        assert_eq!(parse_target("12abc"), Some(12.0));
        assert_eq!(parse_target("1e2"), Some(100.0));
        assert_eq!(parse_target(".5."), Some(0.5));
        assert_eq!(parse_target("x"), None);
        assert_eq!(parse_target(""), None);
        assert_eq!(parse_target("inf"), None);
        assert_eq!(parse_target("NaN"), None);
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("2.5"), Some(2));
        assert_eq!(leading_integer("3abc"), Some(3));
        assert_eq!(leading_integer("  -4"), Some(-4));
        assert_eq!(leading_integer("+8"), Some(8));
        assert_eq!(leading_integer("99999999999999999999"), Some(i64::MAX));
        assert_eq!(leading_integer("abc3"), None);
        assert_eq!(leading_integer(".5"), None);
        assert_eq!(leading_integer("-"), None);
    }

    #[test]
    fn test_parse_precision() {
        assert_eq!(parse_precision("7"), Some(7));
        assert_eq!(parse_precision("0"), Some(0));
        assert_eq!(parse_precision("2.5"), Some(2));
        assert_eq!(parse_precision("3abc"), Some(3));
        assert_eq!(parse_precision("-0"), Some(0));
        assert_eq!(parse_precision("-1"), None);
        assert_eq!(parse_precision(""), None);
        assert_eq!(parse_precision("x4"), None);
    }
}
