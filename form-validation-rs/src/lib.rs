//! # Form Validation Library
//!
//! Validation and sanitization of contact-form input for the portfolio site.
//!
//! ## Features
//!
//! - Rule primitives over raw strings (required, length, range, pattern,
//!   email, phone, URL)
//! - Composite validators per field kind
//! - HTML escaping of user input
//! - Localised validation messages
//! - Whole-form validation and dispatch through a pluggable mail service

mod builder;
mod errors;
pub mod contact;
pub mod fields;
pub mod messages;
pub mod sanitizers;
pub mod validators;

pub use builder::{RuleFailure, ValidationBuilder};
pub use contact::{
    ContactConfig, ContactForm, ContactSubmission, DispatchError, DispatchReceipt, FieldError,
    FormReport, MailDispatcher, SubmitError, TemplateParams,
};
pub use errors::{ValidationError, ValidationResult};
pub use fields::FieldKind;
pub use messages::{get_validation_message, Locale, MessageOptions, Rule};
pub use sanitizers::{format_phone, sanitize_input};

/// Re-export commonly used items for convenience
pub mod prelude {
    pub use crate::builder::ValidationBuilder;
    pub use crate::errors::{ValidationError, ValidationResult};
    pub use crate::fields::FieldKind;
    pub use crate::messages::{get_validation_message, Locale, MessageOptions, Rule};
    pub use crate::sanitizers;
    pub use crate::validators;
}

/// Version of the validation library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Start a validation chain over a form value
pub fn validate(input: &str) -> ValidationBuilder<'_> {
    ValidationBuilder::new(input)
}
