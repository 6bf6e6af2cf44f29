//! Validator functions and utilities
//!
//! Every rule comes in two forms: a `validate_*` predicate returning `bool`,
//! and a `check_*` function returning a `ValidationError` naming the failure.

pub mod numeric;
pub mod string;
pub mod url;

// Re-export all validators for convenience
pub use numeric::*;
pub use string::*;
pub use url::*;
