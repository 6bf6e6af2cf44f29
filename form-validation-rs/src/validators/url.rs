//! URL validators

use crate::errors::{ValidationError, ValidationResult};
use url::Url;

/// Validate that a string is an absolute URL with a host
pub fn check_url(s: &str) -> ValidationResult<()> {
    match Url::parse(s) {
        Ok(url) if url.has_host() => Ok(()),
        Ok(url) => Err(ValidationError::InvalidUrl(format!(
            "URL '{}' has no host component",
            url
        ))),
        Err(e) => Err(ValidationError::InvalidUrl(format!("Invalid URL: {}", e))),
    }
}

/// True if the string parses as an absolute URL with a host
pub fn validate_url(s: &str) -> bool {
    check_url(s).is_ok()
}
