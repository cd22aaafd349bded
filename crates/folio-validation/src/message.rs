//! Message field rules

use crate::string::{trim_input, validate_min_length, validate_required};

pub const MESSAGE_MIN_LENGTH: usize = 10;

pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters";

/// Validates the message body
pub fn validate_message(value: &str) -> Result<(), String> {
    let message = trim_input(value);
    validate_required(message, MESSAGE_REQUIRED)?;
    validate_min_length(message, MESSAGE_MIN_LENGTH, MESSAGE_TOO_SHORT)
}
