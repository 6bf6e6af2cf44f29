//! Human-readable validation messages
//!
//! Messages are keyed by rule. Rule names coming from outside the crate are
//! parsed into [`Rule`]; anything unrecognised gets the fallback text.

use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Message language. Spanish is the site's primary language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl FromStr for Locale {
    type Err = String;

    /// Accepts bare language codes and tags such as `en-US`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s
            .trim()
            .split(|c: char| c == '-' || c == '_')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "es" => Ok(Locale::Es),
            "en" => Ok(Locale::En),
            _ => Err(format!("unsupported locale '{}'", s)),
        }
    }
}

/// The named validation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rule {
    Required,
    MinLength,
    MaxLength,
    Range,
    Pattern,
    Email,
    Phone,
    Url,
}

impl Rule {
    pub const ALL: [Rule; 8] = [
        Rule::Required,
        Rule::MinLength,
        Rule::MaxLength,
        Rule::Range,
        Rule::Pattern,
        Rule::Email,
        Rule::Phone,
        Rule::Url,
    ];

    /// Canonical rule name
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::MinLength => "minLength",
            Rule::MaxLength => "maxLength",
            Rule::Range => "range",
            Rule::Pattern => "pattern",
            Rule::Email => "email",
            Rule::Phone => "phone",
            Rule::Url => "url",
        }
    }

    /// Render the message for this rule
    pub fn message(&self, options: &MessageOptions, locale: Locale) -> String {
        let min = options.min_text();
        let max = options.max_text();

        match (locale, self) {
            (Locale::Es, Rule::Email) => "Por favor ingresa un email válido".to_string(),
            (Locale::Es, Rule::Phone) => {
                "Por favor ingresa un número de teléfono válido".to_string()
            }
            (Locale::Es, Rule::Url) => "Por favor ingresa una URL válida".to_string(),
            (Locale::Es, Rule::Required) => "Este campo es requerido".to_string(),
            (Locale::Es, Rule::MinLength) => format!("Debe tener al menos {} caracteres", min),
            (Locale::Es, Rule::MaxLength) => format!("No puede tener más de {} caracteres", max),
            (Locale::Es, Rule::Range) => format!("Debe estar entre {} y {}", min, max),
            (Locale::Es, Rule::Pattern) => "El formato no es válido".to_string(),

            (Locale::En, Rule::Email) => "Please enter a valid email".to_string(),
            (Locale::En, Rule::Phone) => "Please enter a valid phone number".to_string(),
            (Locale::En, Rule::Url) => "Please enter a valid URL".to_string(),
            (Locale::En, Rule::Required) => "This field is required".to_string(),
            (Locale::En, Rule::MinLength) => format!("Must be at least {} characters", min),
            (Locale::En, Rule::MaxLength) => format!("Cannot be more than {} characters", max),
            (Locale::En, Rule::Range) => format!("Must be between {} and {}", min, max),
            (Locale::En, Rule::Pattern) => "The format is not valid".to_string(),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rule {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::ALL
            .into_iter()
            .find(|rule| rule.name() == s)
            .ok_or_else(|| ValidationError::UnknownRule(s.to_string()))
    }
}

/// Numbers interpolated into message templates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageOptions {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl MessageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    // A missing bound renders as nothing
    fn min_text(&self) -> String {
        self.min.map(|n| n.to_string()).unwrap_or_default()
    }

    fn max_text(&self) -> String {
        self.max.map(|n| n.to_string()).unwrap_or_default()
    }
}

/// Message used when the rule name is not recognised
pub fn fallback_message(locale: Locale) -> &'static str {
    match locale {
        Locale::Es => "Campo inválido",
        Locale::En => "Invalid field",
    }
}

/// Look up the message for a rule name, in Spanish.
///
/// The field name does not change the text; it is only used for tracing.
pub fn get_validation_message(field: &str, rule: &str, options: &MessageOptions) -> String {
    validation_message_in(field, rule, options, Locale::default())
}

/// Look up the message for a rule name in the given locale
pub fn validation_message_in(
    field: &str,
    rule: &str,
    options: &MessageOptions,
    locale: Locale,
) -> String {
    match rule.parse::<Rule>() {
        Ok(rule) => rule.message(options, locale),
        Err(_) => {
            log::debug!("No message for rule '{}' on field '{}'", rule, field);
            fallback_message(locale).to_string()
        }
    }
}
