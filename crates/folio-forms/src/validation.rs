// File: src/validation.rs
// Purpose: Per-field validation results for the contact form

use crate::field::{FieldId, FormValues};
use folio_validation as rules;
use serde::Serialize;

/// Outcome of validating one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(message.into()),
        }
    }
}

impl From<Result<(), String>> for ValidationResult {
    fn from(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(message) => Self::invalid(message),
        }
    }
}

/// Validates a single field value
///
/// Pure: trims the value and applies the field's rules in order, stopping
/// at the first failure.
pub fn validate(field: FieldId, value: &str) -> ValidationResult {
    let result = match field {
        FieldId::Name => rules::validate_name(value),
        FieldId::Email => rules::validate_email(value),
        FieldId::Message => rules::validate_message(value),
    };
    result.into()
}

/// Results for all three fields from one synchronous pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormValidation {
    pub name: ValidationResult,
    pub email: ValidationResult,
    pub message: ValidationResult,
}

impl FormValidation {
    pub fn get(&self, field: FieldId) -> &ValidationResult {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Message => &self.message,
        }
    }

    pub fn is_valid(&self) -> bool {
        FieldId::ALL.iter().all(|field| self.get(*field).valid)
    }

    /// Fields that failed, with their messages, in form order
    pub fn errors(&self) -> Vec<(FieldId, &str)> {
        FieldId::ALL
            .iter()
            .filter_map(|field| {
                self.get(*field)
                    .error
                    .as_deref()
                    .map(|message| (*field, message))
            })
            .collect()
    }
}

/// Validates every field of the form
pub fn validate_form(values: &FormValues) -> FormValidation {
    FormValidation {
        name: validate(FieldId::Name, &values.name),
        email: validate(FieldId::Email, &values.email),
        message: validate(FieldId::Message, &values.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validate_dispatches_by_field() {
        assert_eq!(validate(FieldId::Name, "Jane"), ValidationResult::ok());
        assert_eq!(
            validate(FieldId::Email, "jane"),
            ValidationResult::invalid(rules::EMAIL_INVALID)
        );
        assert_eq!(
            validate(FieldId::Message, "short"),
            ValidationResult::invalid(rules::MESSAGE_TOO_SHORT)
        );
    }

    #[test]
    fn test_short_name_blocks_form() {
        let values = FormValues::new("A", "a@b.com", "Hello there!");
        let validation = validate_form(&values);

        assert!(!validation.is_valid());
        assert_eq!(
            validation.name,
            ValidationResult::invalid(rules::NAME_TOO_SHORT)
        );
        assert!(validation.email.valid);
        assert!(validation.message.valid);
        assert_eq!(
            validation.errors(),
            vec![(FieldId::Name, rules::NAME_TOO_SHORT)]
        );
    }

    #[test]
    fn test_valid_form() {
        let values = FormValues::new(
            "Jane Doe",
            "jane@example.com",
            "This is a long enough message.",
        );
        let validation = validate_form(&values);
        assert!(validation.is_valid());
        assert!(validation.errors().is_empty());
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let validation = validate_form(&FormValues::default());
        let fields: Vec<FieldId> = validation.errors().into_iter().map(|(f, _)| f).collect();
        assert_eq!(fields, FieldId::ALL.to_vec());
    }
}
