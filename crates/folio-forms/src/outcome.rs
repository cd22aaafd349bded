// File: src/outcome.rs
// Purpose: Classified result of one submission attempt

use crate::status::StatusMessage;
use crate::validation::FormValidation;
use std::time::Duration;

pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";
pub const NOT_CONFIGURED_MESSAGE: &str =
    "Contact form is not configured yet. Please reach out via email instead.";
pub const VALIDATION_FAILED_MESSAGE: &str = "Please fix the errors above before submitting.";
pub const NOT_FOUND_MESSAGE: &str =
    "Form endpoint not found. Please check the form configuration.";
pub const REJECTED_MESSAGE: &str =
    "The form submission was rejected. Please check your input and try again.";
pub const NETWORK_FAILURE_MESSAGE: &str =
    "Network error. Please check your connection or email me directly.";

/// What happened to a submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Endpoint answered 2xx
    Success,
    /// Endpoint is still a placeholder; nothing was sent
    NotConfigured,
    /// At least one field failed validation; nothing was sent
    Invalid(FormValidation),
    /// Endpoint answered 404
    NotFound,
    /// Endpoint answered 422
    RejectedByServer,
    /// Endpoint answered some other non-2xx status
    ServerError(u16),
    /// No response was received
    NetworkFailure,
}

impl SubmissionOutcome {
    /// Classifies an HTTP status code
    pub fn from_status(status: u16) -> Self {
        match status {
            200..=299 => SubmissionOutcome::Success,
            404 => SubmissionOutcome::NotFound,
            422 => SubmissionOutcome::RejectedByServer,
            other => SubmissionOutcome::ServerError(other),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success)
    }

    /// Short label for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionOutcome::Success => "success",
            SubmissionOutcome::NotConfigured => "not_configured",
            SubmissionOutcome::Invalid(_) => "invalid",
            SubmissionOutcome::NotFound => "not_found",
            SubmissionOutcome::RejectedByServer => "rejected",
            SubmissionOutcome::ServerError(_) => "server_error",
            SubmissionOutcome::NetworkFailure => "network_failure",
        }
    }

    /// The status line shown for this outcome
    ///
    /// Success messages dismiss themselves after `success_dismiss`; errors
    /// stay until the next attempt.
    pub fn status_message(&self, success_dismiss: Duration) -> StatusMessage {
        match self {
            SubmissionOutcome::Success => {
                StatusMessage::success(SUCCESS_MESSAGE).dismiss_after(success_dismiss)
            }
            SubmissionOutcome::NotConfigured => StatusMessage::error(NOT_CONFIGURED_MESSAGE),
            SubmissionOutcome::Invalid(_) => StatusMessage::error(VALIDATION_FAILED_MESSAGE),
            SubmissionOutcome::NotFound => StatusMessage::error(NOT_FOUND_MESSAGE),
            SubmissionOutcome::RejectedByServer => StatusMessage::error(REJECTED_MESSAGE),
            SubmissionOutcome::ServerError(status) => StatusMessage::error(format!(
                "Something went wrong (error {}). Please try again later.",
                status
            )),
            SubmissionOutcome::NetworkFailure => StatusMessage::error(NETWORK_FAILURE_MESSAGE),
        }
    }
}
