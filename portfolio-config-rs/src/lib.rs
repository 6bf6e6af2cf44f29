//! portfolio-config-rs/lib.rs
//! Settings for the portfolio contact form, read from the environment
//! (optionally seeded from a `.env` file)

use std::env;
use std::sync::Once;
use thiserror::Error;

pub const EMAIL_PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";
pub const EMAIL_SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
pub const EMAIL_TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
pub const LOCALE_VAR: &str = "PORTFOLIO_LOCALE";

static DOTENV: Once = Once::new();

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Missing required setting: {0}")]
    Missing(String),

    #[error("Invalid value for {0}: '{1}'")]
    InvalidValue(String, String),
}

/// Identifiers the email-dispatch service needs for every send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailServiceConfig {
    pub public_key: String,
    pub service_id: String,
    pub template_id: String,
}

/// Load `.env` into the process environment, once.
///
/// A missing file is not an error; variables already set take precedence.
pub fn load_dotenv() {
    DOTENV.call_once(|| match dotenv::dotenv() {
        Ok(path) => log::debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => log::warn!("Ignoring unreadable .env file: {}", e),
    });
}

/// Get a setting that has no sensible default
pub fn get_required_setting(name: &str) -> Result<String, ConfigError> {
    load_dotenv();
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        Ok(value) => Err(ConfigError::InvalidValue(name.to_string(), value)),
        Err(_) => Err(ConfigError::Missing(name.to_string())),
    }
}

/// Parse a setting, falling back to `default` with a warning when the value
/// cannot be parsed
pub fn get_parsed_setting<T, F>(name: &str, default: T, parse: F) -> T
where
    F: FnOnce(&str) -> Option<T>,
{
    load_dotenv();
    match env::var(name) {
        Ok(raw) => parse(raw.trim()).unwrap_or_else(|| {
            log::warn!("Invalid value '{}' in {}, using default", raw, name);
            default
        }),
        Err(_) => default,
    }
}

/// Read the email-dispatch identifiers
pub fn get_email_service_config() -> Result<EmailServiceConfig, ConfigError> {
    Ok(EmailServiceConfig {
        public_key: get_required_setting(EMAIL_PUBLIC_KEY_VAR)?,
        service_id: get_required_setting(EMAIL_SERVICE_ID_VAR)?,
        template_id: get_required_setting(EMAIL_TEMPLATE_ID_VAR)?,
    })
}
