//! reqwest-backed transport

use super::{FormPayload, Transport, TransportError};
use crate::config::ContactConfig;
use async_trait::async_trait;
use reqwest::header::ACCEPT;

/// Posts url-encoded form bodies with reqwest
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Builds a client honoring the configured timeout (none by default)
    pub fn from_config(config: &ContactConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_form(&self, url: &str, payload: &FormPayload) -> Result<u16, TransportError> {
        let parsed = reqwest::Url::parse(url).map_err(|e| TransportError::InvalidUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let response = self
            .client
            .post(parsed)
            .header(ACCEPT, "application/json")
            .form(payload.pairs())
            .send()
            .await
            .map_err(|e| TransportError::Request {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        Ok(response.status().as_u16())
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
