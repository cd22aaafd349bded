// File: src/config.rs
// Purpose: Contact form configuration parsed from folio.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// The `[contact]` part of folio.toml
///
/// Other sections in the same file are ignored here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormsConfig {
    #[serde(default)]
    pub contact: ContactConfig,
}

/// Contact form settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Form-relay URL the form posts to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Substrings that mark the endpoint as not yet configured
    #[serde(default = "default_placeholder_markers")]
    pub placeholder_markers: Vec<String>,

    /// How long a success message stays visible (default: 4000)
    #[serde(default = "default_success_dismiss_ms")]
    pub success_dismiss_ms: u64,

    /// Request timeout in seconds; 0 waits as long as the transport does
    #[serde(default)]
    pub request_timeout_secs: u64,

    /// Ancillary fields sent with every submission
    #[serde(default)]
    pub extra_fields: BTreeMap<String, String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            placeholder_markers: default_placeholder_markers(),
            success_dismiss_ms: default_success_dismiss_ms(),
            request_timeout_secs: 0,
            extra_fields: BTreeMap::new(),
        }
    }
}

impl ContactConfig {
    pub fn endpoint_config(&self) -> EndpointConfig {
        EndpointConfig {
            url: self.endpoint.clone(),
            placeholder_markers: self.placeholder_markers.clone(),
        }
    }

    pub fn success_dismiss(&self) -> Duration {
        Duration::from_millis(self.success_dismiss_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}

/// Where submissions go
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub url: String,
    #[serde(default = "default_placeholder_markers")]
    pub placeholder_markers: Vec<String>,
}

impl EndpointConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            placeholder_markers: default_placeholder_markers(),
        }
    }

    /// True while the hosting page still carries the template value
    pub fn is_placeholder(&self) -> bool {
        let url = self.url.trim();
        url.is_empty()
            || self
                .placeholder_markers
                .iter()
                .any(|marker| !marker.is_empty() && url.contains(marker.as_str()))
    }
}

impl FormsConfig {
    /// Load configuration from a folio.toml file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load configuration from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid folio.toml")
    }

    /// Load configuration or fall back to defaults when the file is missing
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Using default contact config");
                Self::default()
            }
        }
    }
}

fn default_endpoint() -> String {
    "https://formspree.io/f/YOUR_FORM_ID".to_string()
}

fn default_placeholder_markers() -> Vec<String> {
    vec!["YOUR_FORM_ID".to_string()]
}

fn default_success_dismiss_ms() -> u64 {
    4000
}
