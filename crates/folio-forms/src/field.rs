// File: src/field.rs
// Purpose: Field identifiers and the values captured from the contact form

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the three named contact form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldId {
    Name,
    Email,
    Message,
}

impl FieldId {
    /// All fields in form order
    pub const ALL: [FieldId; 3] = [FieldId::Name, FieldId::Email, FieldId::Message];

    /// Input name used in markup and in the outbound payload
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Message => "message",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldId {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FieldId::Name),
            "email" => Ok(FieldId::Email),
            "message" => Ok(FieldId::Message),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Raw values read from the form at submit time
///
/// The three named fields are stored untrimmed; trimming happens when they
/// are validated or turned into a payload. `extra` holds ancillary inputs
/// the host form defines (hidden subject lines, honeypots and so on).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

impl FormValues {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Adds an ancillary field
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Fills in ancillary fields the form did not set itself
    pub fn with_defaults(mut self, defaults: &BTreeMap<String, String>) -> Self {
        for (key, value) in defaults {
            self.extra
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
        self
    }

    /// Raw value of a named field
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Message => &self.message,
        }
    }

    /// Trimmed value of a named field
    pub fn trimmed(&self, field: FieldId) -> &str {
        folio_validation::trim_input(self.get(field))
    }
}
