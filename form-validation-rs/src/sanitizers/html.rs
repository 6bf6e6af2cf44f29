//! HTML escaping for user input
//!
//! Form values end up inside an email template and on the page, so the
//! markup-significant characters are replaced with character references.

use super::string::trim_whitespace;
use super::{chain_sanitizers, SanitizeResult};

/// Replacements applied in this order. `&` is left alone.
const HTML_REPLACEMENTS: [(char, &str); 4] = [
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('\'', "&#39;"),
    ('"', "&#34;"),
];

/// Escape `<`, `>`, `'` and `"`
pub fn escape_html_chars(input: &str) -> SanitizeResult<String> {
    if !input.contains(|c: char| HTML_REPLACEMENTS.iter().any(|(from, _)| *from == c)) {
        return SanitizeResult::unmodified(input.to_string());
    }

    let mut result = input.to_string();
    for (from, to) in &HTML_REPLACEMENTS {
        result = result.replace(*from, to);
    }

    SanitizeResult::modified(result, Some("Escaped HTML characters".to_string()))
}

/// Trim the value and escape markup characters. Never fails.
pub fn sanitize_input(input: &str) -> String {
    chain_sanitizers(input, &[&trim_whitespace, &escape_html_chars]).into_inner()
}
