// File: src/status.rs
// Purpose: The single status region under the contact form

use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    /// Class name applied to the status region
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

/// One user-visible status line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    #[serde(skip_serializing_if = "Option::is_none", with = "millis")]
    pub dismiss_after: Option<Duration>,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Success,
            dismiss_after: None,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
            dismiss_after: None,
        }
    }

    pub fn dismiss_after(mut self, delay: Duration) -> Self {
        self.dismiss_after = Some(delay);
        self
    }
}

mod millis {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(delay) => s.serialize_u64(delay.as_millis() as u64),
            None => s.serialize_none(),
        }
    }
}

/// Identifies the message a dismissal was scheduled for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTicket(u64);

/// Holds at most one message
///
/// Every `show` bumps a generation counter, so a dismissal scheduled for an
/// older message never hides a newer one.
#[derive(Debug, Default)]
pub struct StatusRegion {
    current: Option<StatusMessage>,
    generation: u64,
}

impl StatusRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }

    /// Replaces the displayed message
    pub fn show(&mut self, message: StatusMessage) -> DismissTicket {
        self.generation += 1;
        self.current = Some(message);
        DismissTicket(self.generation)
    }

    /// Hides whatever is displayed
    pub fn clear(&mut self) {
        self.generation += 1;
        self.current = None;
    }

    /// Hides the message if `ticket` still refers to it
    ///
    /// Returns true when something was hidden.
    pub fn dismiss(&mut self, ticket: DismissTicket) -> bool {
        if ticket.0 == self.generation && self.current.is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }
}
