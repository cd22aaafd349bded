// File: src/surface.rs
// Purpose: Rendering seam between form state and the interactive page

use crate::field::FieldId;
use crate::status::StatusMessage;
use crate::validation::{FormValidation, ValidationResult};

/// Applies form state to whatever is displaying the form
///
/// Methods take `&self`; implementations that record or mutate use
/// interior mutability.
pub trait FormSurface: Send + Sync {
    /// Marks the field errored and shows `message` under it
    fn show_field_error(&self, field: FieldId, message: &str);

    /// Removes the error mark and message from the field
    fn clear_field_error(&self, field: FieldId);

    /// Disables (true) or re-enables (false) the submit control
    fn set_submitting(&self, submitting: bool);

    fn show_status(&self, status: &StatusMessage);

    fn clear_status(&self);

    /// Empties all form inputs
    fn reset_fields(&self);
}

/// Shows or clears a single field's error
pub fn render_field<S: FormSurface + ?Sized>(
    surface: &S,
    field: FieldId,
    result: &ValidationResult,
) {
    match &result.error {
        Some(message) if !result.valid => surface.show_field_error(field, message),
        _ => surface.clear_field_error(field),
    }
}

/// Shows or clears every field's error
pub fn render_validation<S: FormSurface + ?Sized>(surface: &S, validation: &FormValidation) {
    for field in FieldId::ALL {
        render_field(surface, field, validation.get(field));
    }
}
