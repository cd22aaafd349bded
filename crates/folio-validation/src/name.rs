//! Name field rules

use crate::string::{trim_input, validate_min_length, validate_required};
use once_cell::sync::Lazy;
use regex::Regex;

pub const NAME_MIN_LENGTH: usize = 2;

pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const NAME_INVALID_CHARS: &str =
    "Name can only contain letters, spaces, hyphens, and apostrophes";

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").unwrap());

/// Returns true if the name only uses ASCII letters, whitespace, `'` and `-`
pub fn is_valid_name_chars(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

/// Validates a name
///
/// Checks, in order:
/// - not empty
/// - at least 2 characters
/// - letters, spaces, hyphens and apostrophes only
pub fn validate_name(value: &str) -> Result<(), String> {
    let name = trim_input(value);
    validate_required(name, NAME_REQUIRED)?;
    validate_min_length(name, NAME_MIN_LENGTH, NAME_TOO_SHORT)?;

    if !is_valid_name_chars(name) {
        return Err(NAME_INVALID_CHARS.to_string());
    }

    Ok(())
}
