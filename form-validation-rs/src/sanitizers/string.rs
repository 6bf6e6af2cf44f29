//! String sanitization utilities

use super::SanitizeResult;
use crate::validators::trim_input;

/// Trim whitespace from beginning and end
pub fn trim_whitespace(input: &str) -> SanitizeResult<String> {
    let trimmed = trim_input(input);

    if trimmed.len() == input.len() {
        SanitizeResult::unmodified(input.to_string())
    } else {
        SanitizeResult::modified(trimmed.to_string(), Some("Trimmed whitespace".to_string()))
    }
}

/// Keep only ASCII digits
pub fn keep_digits(input: &str) -> SanitizeResult<String> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() == input.len() {
        SanitizeResult::unmodified(digits)
    } else {
        SanitizeResult::modified(digits, Some("Removed non-digit characters".to_string()))
    }
}

/// Reduce a phone number to its digit sequence
pub fn format_phone(input: &str) -> String {
    keep_digits(input).into_inner()
}
