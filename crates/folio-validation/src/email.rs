//! Email field rules

use crate::string::{trim_input, validate_required};
use once_cell::sync::Lazy;
use regex::Regex;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Validates basic email shape
///
/// Requires something before a single `@`, and a domain containing a `.`
/// with text on both sides. Whitespace anywhere fails.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validates an email address
pub fn validate_email(value: &str) -> Result<(), String> {
    let email = trim_input(value);
    validate_required(email, EMAIL_REQUIRED)?;

    if !is_valid_email(email) {
        return Err(EMAIL_INVALID.to_string());
    }

    Ok(())
}
