// File: src/controller.rs
// Purpose: One end-to-end contact form submission

use crate::config::EndpointConfig;
use crate::field::FormValues;
use crate::outcome::SubmissionOutcome;
use crate::transport::{FormPayload, Transport};
use crate::validation::validate_form;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Runs the guard → validate → send → classify sequence
///
/// Holds no per-attempt state; the in-flight guard lives in the form host.
#[derive(Clone)]
pub struct SubmissionController {
    transport: Arc<dyn Transport>,
}

impl SubmissionController {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Submits the form once
    ///
    /// Never sends anything for a placeholder endpoint or an invalid form.
    /// Otherwise issues exactly one request and classifies the response.
    pub async fn submit(
        &self,
        values: &FormValues,
        endpoint: &EndpointConfig,
    ) -> SubmissionOutcome {
        if endpoint.is_placeholder() {
            warn!(url = %endpoint.url, "Contact form endpoint is not configured");
            return SubmissionOutcome::NotConfigured;
        }

        let validation = validate_form(values);
        if !validation.is_valid() {
            debug!(
                invalid_fields = validation.errors().len(),
                "Contact form failed validation"
            );
            return SubmissionOutcome::Invalid(validation);
        }

        let payload = FormPayload::from_values(values);
        debug!(
            url = %endpoint.url,
            transport = self.transport.name(),
            fields = payload.len(),
            "Submitting contact form"
        );

        match self.transport.post_form(&endpoint.url, &payload).await {
            Ok(status) => {
                let outcome = SubmissionOutcome::from_status(status);
                if outcome.is_success() {
                    info!(url = %endpoint.url, status_code = status, "Contact form submitted");
                } else {
                    warn!(
                        url = %endpoint.url,
                        status_code = status,
                        outcome = outcome.as_str(),
                        "Contact form endpoint returned an error"
                    );
                }
                outcome
            }
            Err(e) => {
                warn!(url = %endpoint.url, error = %e, "Contact form request failed");
                SubmissionOutcome::NetworkFailure
            }
        }
    }
}
