//! Error handling for the validation library
//!
//! Predicates report a failed rule as `false`; these errors are for the
//! structured `check` API and for caller mistakes such as a malformed pattern.

use thiserror::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Enum representing different validation error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Value is empty after trimming
    #[error("Value is required")]
    Required,

    /// Value is shorter than the minimum length
    #[error("Length {actual} is less than minimum length {min}")]
    TooShort { actual: usize, min: usize },

    /// Value is longer than the maximum length
    #[error("Length {actual} exceeds maximum length {max}")]
    TooLong { actual: usize, max: usize },

    /// Value is not a number inside the range
    #[error("Value '{value}' is not a number between {min} and {max}")]
    OutOfRange { value: String, min: f64, max: f64 },

    /// Value does not match a caller supplied pattern
    #[error("Value does not match pattern: {0}")]
    PatternMismatch(String),

    /// Value is not an email address
    #[error("Invalid email address")]
    InvalidEmail,

    /// Value is not a phone number
    #[error("Invalid phone number")]
    InvalidPhone,

    /// Value is not an absolute URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The pattern itself failed to compile
    #[error("Invalid regex pattern: {0}")]
    InvalidPattern(String),

    /// Rule name is not one of the known rules
    #[error("Unknown validation rule: {0}")]
    UnknownRule(String),

    /// Field name is not one of the known field kinds
    #[error("Unknown field: {0}")]
    UnknownField(String),
}
