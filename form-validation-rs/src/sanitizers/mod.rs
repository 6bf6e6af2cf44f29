//! Input sanitization utilities
//!
//! Sanitizers never fail. Each returns the cleaned value and whether it
//! differs from the input.

pub mod html;
pub mod string;

// Re-export all sanitizers for convenience
pub use html::*;
pub use string::*;

/// Sanitization result containing the sanitized content and information
/// about whether changes were made during sanitization
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizeResult<T> {
    /// Sanitized content
    pub sanitized: T,
    /// Whether any changes were made during sanitization
    pub was_modified: bool,
    /// Optional details about what was modified
    pub details: Option<String>,
}

impl<T> SanitizeResult<T> {
    /// Create a result with unmodified content
    pub fn unmodified(content: T) -> Self {
        Self {
            sanitized: content,
            was_modified: false,
            details: None,
        }
    }

    /// Create a result with modified content
    pub fn modified(content: T, details: Option<String>) -> Self {
        Self {
            sanitized: content,
            was_modified: true,
            details,
        }
    }

    /// Discard the bookkeeping and keep the value
    pub fn into_inner(self) -> T {
        self.sanitized
    }
}

/// Run multiple sanitizers in sequence
pub fn chain_sanitizers(
    input: &str,
    sanitizers: &[&dyn Fn(&str) -> SanitizeResult<String>],
) -> SanitizeResult<String> {
    let mut result = SanitizeResult::unmodified(input.to_string());
    let mut all_details = Vec::new();

    for sanitizer in sanitizers {
        let current = sanitizer(&result.sanitized);

        if current.was_modified {
            result.was_modified = true;
            if let Some(details) = current.details {
                all_details.push(details);
            }
        }
        result.sanitized = current.sanitized;
    }

    if !all_details.is_empty() {
        result.details = Some(all_details.join("; "));
    }

    result
}
