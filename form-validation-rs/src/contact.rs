//! Contact form handling
//!
//! Validates a whole submission, turns it into the flat parameter map the
//! email template expects, and hands it to a [`MailDispatcher`].

use crate::fields::FieldKind;
use crate::messages::{Locale, Rule};
use crate::sanitizers::{format_phone, sanitize_input};
use crate::validators::trim_input;
use portfolio_config_rs::{ConfigError, EmailServiceConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Flat named parameters sent to the email template
pub type TemplateParams = BTreeMap<String, String>;

/// Raw values as typed by the visitor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The raw value for a field kind
    pub fn value(&self, kind: FieldKind) -> &str {
        match kind {
            FieldKind::Name => &self.name,
            FieldKind::Email => &self.email,
            FieldKind::Phone => &self.phone,
            FieldKind::Website => &self.website,
            FieldKind::Message => &self.message,
        }
    }
}

/// A rejected field and the message to show next to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FieldKind,
    pub rule: Rule,
    pub message: String,
}

/// Outcome of validating every field of a submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormReport {
    pub errors: Vec<FieldError>,
}

impl FormReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, field: FieldKind) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }
}

/// Successful hand-off to the email service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReceipt {
    pub status: u16,
    pub text: String,
}

/// Failure reported by the email service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("email dispatch failed with status {status}: {text}")]
pub struct DispatchError {
    pub status: u16,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("submission has {} invalid field(s)", .0.errors.len())]
    Invalid(FormReport),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// The third-party email service, seen as a black box
#[cfg_attr(test, mockall::automock)]
pub trait MailDispatcher {
    fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<DispatchReceipt, DispatchError>;
}

/// Everything a contact form needs besides the submission itself
#[derive(Debug, Clone, PartialEq)]
pub struct ContactConfig {
    pub email: EmailServiceConfig,
    pub locale: Locale,
}

impl ContactConfig {
    pub fn new(email: EmailServiceConfig) -> Self {
        Self {
            email,
            locale: Locale::default(),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Read the dispatch identifiers and locale from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let email = portfolio_config_rs::get_email_service_config()?;
        let locale = portfolio_config_rs::get_parsed_setting(
            portfolio_config_rs::LOCALE_VAR,
            Locale::default(),
            |raw| raw.parse().ok(),
        );
        Ok(Self { email, locale })
    }
}

/// A contact form bound to one dispatch configuration
#[derive(Debug, Clone)]
pub struct ContactForm {
    config: ContactConfig,
}

impl ContactForm {
    pub fn new(config: ContactConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        ContactConfig::from_env().map(Self::new)
    }

    pub fn config(&self) -> &ContactConfig {
        &self.config
    }

    /// Validate a single field, as done when it loses focus.
    ///
    /// Surrounding whitespace is ignored.
    pub fn validate_field(&self, field: FieldKind, value: &str) -> Result<(), FieldError> {
        field.check(trim_input(value)).map_err(|failure| {
            log::debug!("Field '{}' failed rule '{}'", field, failure.rule);
            FieldError {
                field,
                rule: failure.rule,
                message: failure.message(self.config.locale),
            }
        })
    }

    /// Validate every field and collect all failures
    pub fn validate(&self, submission: &ContactSubmission) -> FormReport {
        let errors = FieldKind::ALL
            .into_iter()
            .filter_map(|kind| self.validate_field(kind, submission.value(kind)).err())
            .collect();
        FormReport { errors }
    }

    /// Build sanitized template parameters. Blank optional fields are left out.
    pub fn template_params(&self, submission: &ContactSubmission) -> TemplateParams {
        let mut params = TemplateParams::new();
        params.insert("from_name".to_string(), sanitize_input(&submission.name));
        params.insert("from_email".to_string(), sanitize_input(&submission.email));
        params.insert("message".to_string(), sanitize_input(&submission.message));

        let phone = format_phone(&submission.phone);
        if !phone.is_empty() {
            params.insert("phone".to_string(), phone);
        }
        let website = sanitize_input(&submission.website);
        if !website.is_empty() {
            params.insert("website".to_string(), website);
        }
        params
    }

    /// Validate, then send through `dispatcher`. Nothing is sent when any
    /// field is invalid.
    pub fn submit(
        &self,
        submission: &ContactSubmission,
        dispatcher: &dyn MailDispatcher,
    ) -> Result<DispatchReceipt, SubmitError> {
        let report = self.validate(submission);
        if !report.is_valid() {
            log::debug!(
                "Contact submission rejected: {} invalid field(s)",
                report.errors.len()
            );
            return Err(SubmitError::Invalid(report));
        }

        let params = self.template_params(submission);
        let email = &self.config.email;
        match dispatcher.send(&email.service_id, &email.template_id, &params) {
            Ok(receipt) => {
                log::info!(
                    "Contact message dispatched via {} (status {})",
                    email.service_id,
                    receipt.status
                );
                Ok(receipt)
            }
            Err(e) => {
                log::error!("Contact message dispatch failed: status {}, {}", e.status, e.text);
                Err(SubmitError::Dispatch(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::{always, eq};

    fn form() -> ContactForm {
        ContactForm::new(ContactConfig::new(EmailServiceConfig {
            public_key: "public".to_string(),
            service_id: "service_portfolio".to_string(),
            template_id: "template_contact".to_string(),
        }))
    }

    fn valid_submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            website: String::new(),
            message: "I would like to talk about a project.".to_string(),
        }
    }

    #[test]
    fn test_valid_submission() {
        let report = form().validate(&valid_submission());
        assert!(report.is_valid());
    }

    #[test]
    fn test_all_invalid_fields_are_reported() {
        let submission = ContactSubmission {
            name: "A".to_string(),
            email: "nope".to_string(),
            phone: "123".to_string(),
            website: "not a url".to_string(),
            message: "short".to_string(),
        };
        let report = form().validate(&submission);

        assert_eq!(report.errors.len(), 5);
        let name = report.error_for(FieldKind::Name).unwrap();
        assert_eq!(name.rule, Rule::MinLength);
        assert_eq!(name.message, "Debe tener al menos 2 caracteres");
        assert_eq!(report.error_for(FieldKind::Website).unwrap().rule, Rule::Url);
    }

    #[test]
    fn test_field_values_are_trimmed_before_validation() {
        let form = form();
        assert!(form.validate_field(FieldKind::Email, "  ada@example.com ").is_ok());

        let err = form.validate_field(FieldKind::Name, "  A  ").unwrap_err();
        assert_eq!(err.rule, Rule::MinLength);
    }

    #[test]
    fn test_messages_follow_locale() {
        let form = ContactForm::new(form().config().clone().with_locale(Locale::En));
        let err = form.validate_field(FieldKind::Email, "").unwrap_err();
        assert_eq!(err.message, "This field is required");
    }

    #[test]
    fn test_template_params_are_sanitized() {
        let mut submission = valid_submission();
        submission.name = "  <b>Ada</b> ".to_string();
        submission.message = "Say \"hi\" to 'Bob'".to_string();

        let params = form().template_params(&submission);
        assert_eq!(params["from_name"], "&lt;b&gt;Ada&lt;/b&gt;");
        assert_eq!(params["message"], "Say &#34;hi&#34; to &#39;Bob&#39;");
        assert_eq!(params["phone"], "15551234567");
        assert!(!params.contains_key("website"));
    }

    #[test]
    fn test_submit_dispatches_valid_submission() {
        let mut dispatcher = MockMailDispatcher::new();
        dispatcher
            .expect_send()
            .with(eq("service_portfolio"), eq("template_contact"), always())
            .times(1)
            .returning(|_, _, params| {
                assert_eq!(params["from_email"], "ada@example.com");
                Ok(DispatchReceipt {
                    status: 200,
                    text: "OK".to_string(),
                })
            });

        let receipt = form().submit(&valid_submission(), &dispatcher).unwrap();
        assert_eq!(receipt.status, 200);
    }

    #[test]
    fn test_submit_does_not_dispatch_invalid_submission() {
        let mut dispatcher = MockMailDispatcher::new();
        dispatcher.expect_send().times(0);

        let mut submission = valid_submission();
        submission.email = String::new();

        match form().submit(&submission, &dispatcher) {
            Err(SubmitError::Invalid(report)) => {
                assert_eq!(report.errors.len(), 1);
                assert_eq!(report.errors[0].field, FieldKind::Email);
            }
            other => panic!("Expected invalid submission, got {:?}", other),
        }
    }

    #[test]
    fn test_submit_surfaces_dispatch_failure() {
        let mut dispatcher = MockMailDispatcher::new();
        dispatcher.expect_send().times(1).returning(|_, _, _| {
            Err(DispatchError {
                status: 412,
                text: "template not found".to_string(),
            })
        });

        let err = form().submit(&valid_submission(), &dispatcher).unwrap_err();
        assert_eq!(
            err,
            SubmitError::Dispatch(DispatchError {
                status: 412,
                text: "template not found".to_string(),
            })
        );
        assert!(err.to_string().contains("412"));
    }

    #[test]
    fn test_submission_from_json() {
        let json = r#"{"name":"Ada","email":"ada@example.com","message":"Hello there, world"}"#;
        let submission = ContactSubmission::from_json(json).unwrap();
        assert_eq!(submission.phone, "");
        assert!(form().validate(&submission).is_valid());

        assert!(ContactSubmission::from_json(r#"{"name":"Ada"}"#).is_err());
    }

    // The only test in this crate that touches the process environment
    #[test]
    fn test_contact_config_from_env() {
        use portfolio_config_rs::{
            EMAIL_PUBLIC_KEY_VAR, EMAIL_SERVICE_ID_VAR, EMAIL_TEMPLATE_ID_VAR, LOCALE_VAR,
        };

        std::env::set_var(EMAIL_PUBLIC_KEY_VAR, "public_env");
        std::env::set_var(EMAIL_SERVICE_ID_VAR, "service_env");
        std::env::set_var(EMAIL_TEMPLATE_ID_VAR, "template_env");

        std::env::set_var(LOCALE_VAR, "en-US");
        let config = ContactConfig::from_env().unwrap();
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.email.service_id, "service_env");
        assert_eq!(config.email.template_id, "template_env");

        // Unsupported locales fall back to Spanish
        std::env::set_var(LOCALE_VAR, "fr");
        assert_eq!(ContactConfig::from_env().unwrap().locale, Locale::Es);

        std::env::remove_var(LOCALE_VAR);
        let form = ContactForm::from_env().unwrap();
        assert_eq!(form.config().locale, Locale::Es);
    }

    #[test]
    fn test_report_serializes_field_names() {
        let report = form().validate(&ContactSubmission::default());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["errors"][0]["field"], "name");
        assert_eq!(json["errors"][0]["rule"], "required");
    }
}
