//! # folio-forms
//!
//! Contact form flow for the folio portfolio page.
//!
//! The crate is split into a pure state layer and thin adapters:
//!
//! - [`validation`]: per-field checks producing [`ValidationResult`]s
//! - [`controller`]: one end-to-end submit attempt, classified into a
//!   [`SubmissionOutcome`]
//! - [`status`]: the single status region and its auto-dismiss tickets
//! - [`transport`]: the outbound request seam ([`Transport`])
//! - [`surface`]: the rendering seam ([`FormSurface`])
//! - `form`: the interactive host that ties them together (feature `runtime`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use folio_forms::{ContactForm, FormsConfig, FormValues, HttpTransport};
//! use std::sync::Arc;
//!
//! let config = FormsConfig::load("folio.toml")?;
//! let transport = Arc::new(HttpTransport::from_config(&config.contact)?);
//! let form = ContactForm::new(&config.contact, transport, Arc::new(my_surface));
//!
//! let values = FormValues::new("Jane Doe", "jane@example.com", "Hello from the docs!");
//! form.on_submit(values).await;
//! ```

pub mod config;
pub mod controller;
pub mod field;
pub mod outcome;
pub mod status;
pub mod surface;
pub mod transport;
pub mod validation;

#[cfg(feature = "runtime")]
pub mod form;

pub use config::{ContactConfig, EndpointConfig, FormsConfig};
pub use controller::SubmissionController;
pub use field::{FieldId, FormValues, UnknownField};
pub use outcome::SubmissionOutcome;
pub use status::{DismissTicket, StatusKind, StatusMessage, StatusRegion};
pub use surface::FormSurface;
pub use transport::{FormPayload, Transport, TransportError};
pub use validation::{validate, validate_form, FormValidation, ValidationResult};

#[cfg(feature = "http")]
pub use transport::http::HttpTransport;

#[cfg(feature = "runtime")]
pub use form::{ContactForm, SubmitAttempt};
