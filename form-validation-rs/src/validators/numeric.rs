//! Numeric validators
//!
//! Form values arrive as text, so these parse before comparing.

use super::string::trim_input;
use crate::errors::{ValidationError, ValidationResult};
use std::str::FromStr;

/// Validate that a numeric value is within a range (inclusive)
pub fn between<T>(value: T, min: T, max: T) -> bool
where
    T: PartialOrd,
{
    value >= min && value <= max
}

/// Parse an unsigned `0x`, `0o` or `0b` literal
fn parse_radix_literal(s: &str) -> Option<f64> {
    let (radix, digits) = match s.get(..2)?.to_ascii_lowercase().as_str() {
        "0x" => (16, &s[2..]),
        "0o" => (8, &s[2..]),
        "0b" => (2, &s[2..]),
        _ => return None,
    };
    if digits.is_empty() || digits.starts_with(|c: char| c == '+' || c == '-') {
        return None;
    }
    u128::from_str_radix(digits, radix).ok().map(|n| n as f64)
}

/// Parse a form value as a finite number.
///
/// Surrounding whitespace is ignored. Decimal and exponent forms are accepted,
/// as are unsigned hex, octal and binary literals. Empty, non-numeric and
/// non-finite values (`inf`, `NaN`) yield `None`.
pub fn parse_number(s: &str) -> Option<f64> {
    let trimmed = trim_input(s);
    if trimmed.is_empty() {
        return None;
    }
    parse_radix_literal(trimmed)
        .or_else(|| f64::from_str(trimmed).ok())
        .filter(|n| n.is_finite())
}

/// True if the value parses to a number inside `[min, max]`
pub fn validate_range(s: &str, min: f64, max: f64) -> bool {
    parse_number(s).map_or(false, |n| between(n, min, max))
}

/// Parse and validate a string as a number within a range
pub fn check_range(s: &str, min: f64, max: f64) -> ValidationResult<f64> {
    match parse_number(s) {
        Some(n) if between(n, min, max) => Ok(n),
        _ => Err(ValidationError::OutOfRange {
            value: s.to_string(),
            min,
            max,
        }),
    }
}
