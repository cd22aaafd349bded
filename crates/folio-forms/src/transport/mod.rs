//! Outbound submission transports

use crate::field::{FieldId, FormValues};
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[cfg(feature = "http")]
pub mod http;

/// Failure to get any response from the endpoint
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid endpoint url {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("failed to build http client: {0}")]
    Client(String),
}

/// Ordered key/value body of one submission
///
/// The three named fields come first (trimmed), followed by ancillary fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormPayload(Vec<(String, String)>);

impl FormPayload {
    pub fn from_values(values: &FormValues) -> Self {
        let mut pairs: Vec<(String, String)> = FieldId::ALL
            .iter()
            .map(|field| (field.as_str().to_string(), values.trimmed(*field).to_string()))
            .collect();

        pairs.extend(
            values
                .extra
                .iter()
                .filter(|(key, _)| key.parse::<FieldId>().is_err())
                .map(|(key, value)| (key.clone(), value.clone())),
        );

        Self(pairs)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Sends a payload to the form relay
///
/// Implementations POST the payload with `Accept: application/json` and
/// return the response status. Any status, including 4xx/5xx, is `Ok`;
/// `Err` means no response arrived.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_form(&self, url: &str, payload: &FormPayload) -> Result<u16, TransportError>;

    /// Transport name for logs
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_order_and_trimming() {
        let values = FormValues::new(" Jane Doe ", "jane@example.com", " Hello there, world! ")
            .with_extra("_subject", "Portfolio");
        let payload = FormPayload::from_values(&values);

        let keys: Vec<&str> = payload.pairs().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["name", "email", "message", "_subject"]);
        assert_eq!(payload.get("name"), Some("Jane Doe"));
        assert_eq!(payload.get("message"), Some("Hello there, world!"));
        assert_eq!(payload.len(), 4);
    }

    #[test]
    fn test_extra_cannot_shadow_named_fields() {
        let values = FormValues::new("Jane", "jane@example.com", "Hello there!")
            .with_extra("email", "spoofed@example.com");
        let payload = FormPayload::from_values(&values);

        assert_eq!(payload.len(), 3);
        assert_eq!(payload.get("email"), Some("jane@example.com"));
    }
}
