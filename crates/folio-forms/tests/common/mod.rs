//! Shared test doubles for the contact form tests

#![allow(dead_code)]

use async_trait::async_trait;
use folio_forms::{FieldId, FormPayload, FormSurface, StatusMessage, Transport, TransportError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Everything the form asked the page to do, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    FieldError(FieldId, String),
    FieldCleared(FieldId),
    Submitting(bool),
    Status(StatusMessage),
    StatusCleared,
    Reset,
}

#[derive(Default)]
pub struct RecordingSurface {
    events: Mutex<Vec<SurfaceEvent>>,
}

impl RecordingSurface {
    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self, event: &SurfaceEvent) -> usize {
        self.events().iter().filter(|e| *e == event).count()
    }

    pub fn last_status(&self) -> Option<StatusMessage> {
        self.events().into_iter().rev().find_map(|e| match e {
            SurfaceEvent::Status(message) => Some(message),
            _ => None,
        })
    }

    fn push(&self, event: SurfaceEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl FormSurface for RecordingSurface {
    fn show_field_error(&self, field: FieldId, message: &str) {
        self.push(SurfaceEvent::FieldError(field, message.to_string()));
    }

    fn clear_field_error(&self, field: FieldId) {
        self.push(SurfaceEvent::FieldCleared(field));
    }

    fn set_submitting(&self, submitting: bool) {
        self.push(SurfaceEvent::Submitting(submitting));
    }

    fn show_status(&self, status: &StatusMessage) {
        self.push(SurfaceEvent::Status(status.clone()));
    }

    fn clear_status(&self) {
        self.push(SurfaceEvent::StatusCleared);
    }

    fn reset_fields(&self) {
        self.push(SurfaceEvent::Reset);
    }
}

/// Replies with a fixed status (or a transport error) and records payloads
pub struct StubTransport {
    status: Option<u16>,
    calls: AtomicUsize,
    payloads: Mutex<Vec<FormPayload>>,
}

impl StubTransport {
    pub fn replying(status: u16) -> Self {
        Self {
            status: Some(status),
            calls: AtomicUsize::new(0),
            payloads: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            status: None,
            calls: AtomicUsize::new(0),
            payloads: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn payloads(&self) -> Vec<FormPayload> {
        self.payloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn post_form(&self, url: &str, payload: &FormPayload) -> Result<u16, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.payloads.lock().unwrap().push(payload.clone());
        self.status.ok_or_else(|| TransportError::Request {
            url: url.to_string(),
            message: "connection reset".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

/// Holds every request until released
#[derive(Default)]
pub struct GatedTransport {
    pub entered: Notify,
    pub release: Notify,
    calls: AtomicUsize,
}

impl GatedTransport {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Transport for GatedTransport {
    async fn post_form(&self, _url: &str, _payload: &FormPayload) -> Result<u16, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entered.notify_one();
        self.release.notified().await;
        Ok(200)
    }

    fn name(&self) -> &'static str {
        "gated"
    }
}
