//! folio WASM
//!
//! WebAssembly bindings for the folio page. The browser glue calls these
//! so client-side checks and scroll math match the native crates exactly.

use folio_forms::{
    validate, validate_form, EndpointConfig, FieldId, FormValues, SubmissionOutcome,
};
use folio_page::{
    active_section, anchor_target, intersection_ratio, scroll_progress, Rect, SectionBounds,
};
use serde::Serialize;
use std::time::Duration;
use wasm_bindgen::prelude::*;

/// Success messages hide after this long
const SUCCESS_DISMISS_MS: u64 = 4000;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Whole-form result returned to JavaScript
#[derive(Serialize)]
struct FormCheck {
    valid: bool,
    fields: folio_forms::FormValidation,
}

/// Validate a single field value
///
/// # Returns
/// `{ valid: boolean, error?: string }`
///
/// # Example (JavaScript)
/// ```javascript
/// const result = validateField('email', input.value);
/// if (!result.valid) showError(input, result.error);
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field_name: &str, value: &str) -> Result<JsValue, JsValue> {
    let field: FieldId = field_name.parse().map_err(|e| {
        web_sys::console::warn_1(&JsValue::from_str(&format!("{}", e)));
        JsValue::from_str(&format!("{}", e))
    })?;

    Ok(serde_wasm_bindgen::to_value(&validate(field, value))?)
}

/// Validate `{ name, email, message }` in one pass
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form_js(values: JsValue) -> Result<JsValue, JsValue> {
    let values: FormValues = serde_wasm_bindgen::from_value(values)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse form values: {}", e)))?;

    let fields = validate_form(&values);
    let check = FormCheck {
        valid: fields.is_valid(),
        fields,
    };
    Ok(serde_wasm_bindgen::to_value(&check)?)
}

/// True while the form action still carries the template value
#[wasm_bindgen(js_name = isPlaceholderEndpoint)]
pub fn is_placeholder_endpoint(url: &str) -> bool {
    EndpointConfig::new(url).is_placeholder()
}

/// Status message `{ text, kind, dismissAfter? }` for an HTTP response status
#[wasm_bindgen(js_name = statusForHttpStatus)]
pub fn status_for_http_status(status: u16) -> Result<JsValue, JsValue> {
    status_for(&SubmissionOutcome::from_status(status))
}

/// Status message for a request that never got a response
#[wasm_bindgen(js_name = networkFailureStatus)]
pub fn network_failure_status() -> Result<JsValue, JsValue> {
    status_for(&SubmissionOutcome::NetworkFailure)
}

/// Status message for a placeholder endpoint
#[wasm_bindgen(js_name = notConfiguredStatus)]
pub fn not_configured_status() -> Result<JsValue, JsValue> {
    status_for(&SubmissionOutcome::NotConfigured)
}

fn status_for(outcome: &SubmissionOutcome) -> Result<JsValue, JsValue> {
    let message = outcome.status_message(Duration::from_millis(SUCCESS_DISMISS_MS));
    Ok(serde_wasm_bindgen::to_value(&message)?)
}

/// Progress bar width in percent
#[wasm_bindgen(js_name = scrollProgress)]
pub fn scroll_progress_js(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    scroll_progress(scroll_y, scroll_height, viewport_height)
}

/// Current section id for `[{ id, top, height }, ...]` in document order
#[wasm_bindgen(js_name = activeSection)]
pub fn active_section_js(
    sections: JsValue,
    scroll_y: f64,
    offset: f64,
) -> Result<Option<String>, JsValue> {
    let sections: Vec<SectionBounds> = serde_wasm_bindgen::from_value(sections)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse sections: {}", e)))?;

    Ok(active_section(&sections, scroll_y, offset).map(str::to_string))
}

/// Section id for an in-page link, if any
#[wasm_bindgen(js_name = anchorTarget)]
pub fn anchor_target_js(href: &str) -> Option<String> {
    anchor_target(href).map(str::to_string)
}

/// Visible fraction of an element given its viewport-relative top and height
#[wasm_bindgen(js_name = intersectionRatio)]
pub fn intersection_ratio_js(
    top: f64,
    height: f64,
    viewport_height: f64,
    bottom_margin: f64,
) -> f64 {
    intersection_ratio(&Rect::new(0.0, top, 0.0, height), viewport_height, bottom_margin)
}

/// Quick email check
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    folio_validation::is_valid_email(folio_validation::trim_input(email))
}
