// File: src/form.rs
// Purpose: Interactive contact form host with an explicit in-flight guard

use crate::config::{ContactConfig, EndpointConfig};
use crate::controller::SubmissionController;
use crate::field::{FieldId, FormValues};
use crate::outcome::SubmissionOutcome;
use crate::status::{DismissTicket, StatusRegion};
use crate::surface::{render_field, render_validation, FormSurface};
use crate::transport::Transport;
use crate::validation::{validate, ValidationResult};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::debug;

/// Result of pressing submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Another attempt was still in flight; nothing happened
    Ignored,
    /// The attempt ran to completion
    Completed {
        outcome: SubmissionOutcome,
        /// Set when the status message should auto-dismiss
        dismiss: Option<DismissTicket>,
    },
}

impl SubmitAttempt {
    pub fn outcome(&self) -> Option<&SubmissionOutcome> {
        match self {
            SubmitAttempt::Ignored => None,
            SubmitAttempt::Completed { outcome, .. } => Some(outcome),
        }
    }
}

/// The contact form as the page sees it
///
/// Owns the status region and the in-flight flag. A second submit while
/// one is awaiting the network is ignored.
pub struct ContactForm<S: FormSurface> {
    controller: SubmissionController,
    endpoint: EndpointConfig,
    extra_fields: BTreeMap<String, String>,
    success_dismiss: Duration,
    surface: Arc<S>,
    status: Mutex<StatusRegion>,
    in_flight: AtomicBool,
}

impl<S: FormSurface> ContactForm<S> {
    pub fn new(config: &ContactConfig, transport: Arc<dyn Transport>, surface: Arc<S>) -> Self {
        Self {
            controller: SubmissionController::new(transport),
            endpoint: config.endpoint_config(),
            extra_fields: config.extra_fields.clone(),
            success_dismiss: config.success_dismiss(),
            surface,
            status: Mutex::new(StatusRegion::new()),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Validates a field when it loses focus
    pub fn on_blur(&self, field: FieldId, value: &str) -> ValidationResult {
        let result = validate(field, value);
        render_field(self.surface.as_ref(), field, &result);
        result
    }

    /// Clears a field's error when it regains focus
    pub fn on_focus(&self, field: FieldId) {
        self.surface.clear_field_error(field);
    }

    /// Handles a submit press
    pub async fn on_submit(&self, values: FormValues) -> SubmitAttempt {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("Submission already in flight, ignoring");
            return SubmitAttempt::Ignored;
        }
        let _guard = SubmittingGuard::engage(&self.in_flight, self.surface.as_ref());

        self.status.lock().await.clear();
        self.surface.clear_status();

        let values = values.with_defaults(&self.extra_fields);
        let outcome = self.controller.submit(&values, &self.endpoint).await;

        if let SubmissionOutcome::Invalid(validation) = &outcome {
            render_validation(self.surface.as_ref(), validation);
        }

        let message = outcome.status_message(self.success_dismiss);
        let auto_dismiss = message.dismiss_after.is_some();
        let ticket = self.status.lock().await.show(message.clone());
        self.surface.show_status(&message);

        if outcome.is_success() {
            self.surface.reset_fields();
        }

        SubmitAttempt::Completed {
            outcome,
            dismiss: auto_dismiss.then_some(ticket),
        }
    }

    /// Hides the status message if it is still the one `ticket` refers to
    pub async fn dismiss_status(&self, ticket: DismissTicket) -> bool {
        let dismissed = self.status.lock().await.dismiss(ticket);
        if dismissed {
            self.surface.clear_status();
        }
        dismissed
    }

    /// Waits out the success delay, then dismisses
    pub async fn run_auto_dismiss(&self, ticket: DismissTicket) -> bool {
        tokio::time::sleep(self.success_dismiss).await;
        self.dismiss_status(ticket).await
    }
}

/// Disables the submit control for its lifetime
///
/// Dropping re-enables the control and releases the in-flight flag, on
/// every exit path including cancellation of the submit future.
struct SubmittingGuard<'a, S: FormSurface> {
    in_flight: &'a AtomicBool,
    surface: &'a S,
}

impl<'a, S: FormSurface> SubmittingGuard<'a, S> {
    fn engage(in_flight: &'a AtomicBool, surface: &'a S) -> Self {
        surface.set_submitting(true);
        Self { in_flight, surface }
    }
}

impl<S: FormSurface> Drop for SubmittingGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.set_submitting(false);
        self.in_flight.store(false, Ordering::Release);
    }
}
