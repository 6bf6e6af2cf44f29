//! Validation builder pattern
//!
//! Chains rule checks over one form value. The first failing rule stops the
//! chain and is kept together with the rule that raised it.

use crate::errors::{ValidationError, ValidationResult};
use crate::messages::{Locale, MessageOptions, Rule};
use crate::validators;
use std::fmt;

/// A failed rule and the error it produced
#[derive(Debug, Clone, PartialEq)]
pub struct RuleFailure {
    pub rule: Rule,
    pub error: ValidationError,
}

impl RuleFailure {
    /// Template numbers recovered from the error
    pub fn options(&self) -> MessageOptions {
        match &self.error {
            ValidationError::TooShort { min, .. } => MessageOptions::new().with_min(*min as f64),
            ValidationError::TooLong { max, .. } => MessageOptions::new().with_max(*max as f64),
            ValidationError::OutOfRange { min, max, .. } => {
                MessageOptions::new().with_min(*min).with_max(*max)
            }
            _ => MessageOptions::default(),
        }
    }

    /// User facing message for this failure
    pub fn message(&self, locale: Locale) -> String {
        self.rule.message(&self.options(), locale)
    }
}

impl fmt::Display for RuleFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rule '{}' failed: {}", self.rule, self.error)
    }
}

impl std::error::Error for RuleFailure {}

/// Builder for chaining validation rules
#[derive(Debug, Clone)]
pub struct ValidationBuilder<'a> {
    /// The value being validated
    value: &'a str,
    /// First failure encountered, if any
    failure: Option<RuleFailure>,
    /// Set by `optional` when the value is blank
    skip: bool,
}

impl<'a> ValidationBuilder<'a> {
    /// Create a new validation builder
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            failure: None,
            skip: false,
        }
    }

    /// Apply a check attributed to `rule`
    pub fn validate<F>(mut self, rule: Rule, check: F) -> Self
    where
        F: FnOnce(&str) -> ValidationResult<()>,
    {
        if self.failure.is_none() && !self.skip {
            if let Err(error) = check(self.value) {
                self.failure = Some(RuleFailure { rule, error });
            }
        }
        self
    }

    /// Accept a blank value without running the remaining checks
    pub fn optional(mut self) -> Self {
        if self.failure.is_none() && !validators::validate_required(self.value) {
            self.skip = true;
        }
        self
    }

    pub fn required(self) -> Self {
        self.validate(Rule::Required, validators::check_required)
    }

    pub fn min_length(self, min: usize) -> Self {
        self.validate(Rule::MinLength, |s| validators::check_min_length(s, min))
    }

    pub fn max_length(self, max: usize) -> Self {
        self.validate(Rule::MaxLength, |s| validators::check_max_length(s, max))
    }

    pub fn range(self, min: f64, max: f64) -> Self {
        self.validate(Rule::Range, |s| validators::check_range(s, min, max).map(|_| ()))
    }

    pub fn matches(self, pattern: &str) -> Self {
        self.validate(Rule::Pattern, |s| validators::check_pattern(s, pattern))
    }

    pub fn email(self) -> Self {
        self.validate(Rule::Email, validators::check_email)
    }

    pub fn phone(self) -> Self {
        self.validate(Rule::Phone, validators::check_phone)
    }

    pub fn url(self) -> Self {
        self.validate(Rule::Url, validators::check_url)
    }

    /// Finish validation and return the result
    pub fn finish(self) -> Result<&'a str, RuleFailure> {
        match self.failure {
            Some(failure) => Err(failure),
            None => Ok(self.value),
        }
    }
}
