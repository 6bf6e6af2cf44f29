//! Per-field validation for the contact form
//!
//! Each field kind has a fixed composition of rules. Phone and website are
//! optional; name, email and message are required.

use crate::builder::{RuleFailure, ValidationBuilder};
use crate::errors::ValidationError;
use crate::messages::{Locale, Rule};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 50;
pub const MESSAGE_MIN_LENGTH: usize = 10;
pub const MESSAGE_MAX_LENGTH: usize = 1000;

/// The semantic input categories of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Name,
    Email,
    Phone,
    Website,
    Message,
}

impl FieldKind {
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Name,
        FieldKind::Email,
        FieldKind::Phone,
        FieldKind::Website,
        FieldKind::Message,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::Name => "name",
            FieldKind::Email => "email",
            FieldKind::Phone => "phone",
            FieldKind::Website => "website",
            FieldKind::Message => "message",
        }
    }

    /// Whether a blank value is accepted
    pub fn is_optional(&self) -> bool {
        matches!(self, FieldKind::Phone | FieldKind::Website)
    }

    /// Run this field's rules and report the first one that fails
    pub fn check(&self, value: &str) -> Result<(), RuleFailure> {
        let builder = ValidationBuilder::new(value);
        let builder = match self {
            FieldKind::Name => builder
                .required()
                .min_length(NAME_MIN_LENGTH)
                .max_length(NAME_MAX_LENGTH),
            FieldKind::Email => builder.required().email(),
            FieldKind::Phone => builder.optional().phone(),
            FieldKind::Website => builder.optional().url(),
            FieldKind::Message => builder
                .required()
                .min_length(MESSAGE_MIN_LENGTH)
                .max_length(MESSAGE_MAX_LENGTH),
        };
        builder.finish().map(|_| ())
    }

    /// True if the value satisfies every rule of this field
    pub fn validate(&self, value: &str) -> bool {
        self.check(value).is_ok()
    }

    /// The one-line hint shown next to the field when it is rejected
    pub fn summary_message(&self, locale: Locale) -> String {
        match (locale, self) {
            (Locale::Es, FieldKind::Name) => format!(
                "El nombre debe tener entre {} y {} caracteres",
                NAME_MIN_LENGTH, NAME_MAX_LENGTH
            ),
            (Locale::Es, FieldKind::Message) => format!(
                "El mensaje debe tener entre {} y {} caracteres",
                MESSAGE_MIN_LENGTH, MESSAGE_MAX_LENGTH
            ),
            (Locale::En, FieldKind::Name) => format!(
                "Name must be between {} and {} characters",
                NAME_MIN_LENGTH, NAME_MAX_LENGTH
            ),
            (Locale::En, FieldKind::Message) => format!(
                "Message must be between {} and {} characters",
                MESSAGE_MIN_LENGTH, MESSAGE_MAX_LENGTH
            ),
            (_, FieldKind::Email) => Rule::Email.message(&Default::default(), locale),
            (_, FieldKind::Phone) => Rule::Phone.message(&Default::default(), locale),
            (_, FieldKind::Website) => Rule::Url.message(&Default::default(), locale),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ValidationError::UnknownField(s.to_string()))
    }
}
