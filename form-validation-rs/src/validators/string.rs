//! String validators
//!
//! Rule primitives over raw form input: required, length bounds,
//! caller-supplied patterns, email and phone formats.

use crate::errors::{ValidationError, ValidationResult};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Deliberately permissive: local@domain.tld with no whitespace or '@'
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();

    // Optional '+', optional '(', then 10 or more digits, parentheses or hyphens
    static ref PHONE_REGEX: Regex = Regex::new(r"^\+?\(?[0-9()\-]{10,}$").unwrap();
}

/// Whitespace as browsers trim form values: Unicode spaces, line
/// terminators and U+FEFF, but not U+0085
pub fn is_form_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Strip leading and trailing form whitespace
pub fn trim_input(s: &str) -> &str {
    s.trim_matches(is_form_whitespace)
}

/// Length in UTF-16 code units, the unit browser form values are measured in
pub(crate) fn code_unit_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// True if the value is non-empty after trimming
pub fn validate_required(s: &str) -> bool {
    !trim_input(s).is_empty()
}

/// True if the value has at least `min` code units
pub fn validate_min_length(s: &str, min: usize) -> bool {
    code_unit_len(s) >= min
}

/// True if the value has at most `max` code units
pub fn validate_max_length(s: &str, max: usize) -> bool {
    code_unit_len(s) <= max
}

/// Match the value against a caller supplied pattern.
///
/// The pattern is compiled on every call. A pattern that does not compile is
/// a bug in the calling code and is reported as `InvalidPattern`.
pub fn validate_pattern(s: &str, pattern: &str) -> ValidationResult<bool> {
    let re = Regex::new(pattern).map_err(|e| ValidationError::InvalidPattern(e.to_string()))?;
    Ok(re.is_match(s))
}

/// True if the value looks like `local@domain.tld`
pub fn validate_email(s: &str) -> bool {
    EMAIL_REGEX.is_match(s)
}

/// True if the value, with all whitespace removed, looks like a phone number
pub fn validate_phone(s: &str) -> bool {
    let compact: String = s.chars().filter(|&c| !is_form_whitespace(c)).collect();
    PHONE_REGEX.is_match(&compact)
}

/// Validate that a string is present
pub fn check_required(s: &str) -> ValidationResult<()> {
    if validate_required(s) {
        Ok(())
    } else {
        Err(ValidationError::Required)
    }
}

/// Validate that a string meets a minimum length requirement
pub fn check_min_length(s: &str, min: usize) -> ValidationResult<()> {
    if validate_min_length(s, min) {
        Ok(())
    } else {
        Err(ValidationError::TooShort {
            actual: code_unit_len(s),
            min,
        })
    }
}

/// Validate that a string does not exceed a maximum length
pub fn check_max_length(s: &str, max: usize) -> ValidationResult<()> {
    if validate_max_length(s, max) {
        Ok(())
    } else {
        Err(ValidationError::TooLong {
            actual: code_unit_len(s),
            max,
        })
    }
}

/// Validate that a string matches a pattern
pub fn check_pattern(s: &str, pattern: &str) -> ValidationResult<()> {
    if validate_pattern(s, pattern)? {
        Ok(())
    } else {
        Err(ValidationError::PatternMismatch(pattern.to_string()))
    }
}

/// Validate email address format
pub fn check_email(s: &str) -> ValidationResult<()> {
    if validate_email(s) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Validate phone number format
pub fn check_phone(s: &str) -> ValidationResult<()> {
    if validate_phone(s) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhone)
    }
}
