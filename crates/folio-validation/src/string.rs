//! String helpers shared by the field rules

/// Trims like `String.prototype.trim`
///
/// `str::trim` keeps U+FEFF (byte order mark); browsers strip it.
pub fn trim_input(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Length in characters, not bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Validates a minimum character length
pub fn validate_min_length(s: &str, min: usize, message: &str) -> Result<(), String> {
    if char_len(s) >= min {
        Ok(())
    } else {
        Err(message.to_string())
    }
}

/// Fails with `message` when the value is empty
pub fn validate_required(s: &str, message: &str) -> Result<(), String> {
    if s.is_empty() {
        Err(message.to_string())
    } else {
        Ok(())
    }
}
