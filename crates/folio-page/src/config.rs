// File: src/config.rs
// Purpose: Page interaction settings parsed from folio.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// The `[scroll]` part of folio.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default)]
    pub scroll: ScrollConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// How far above the viewport top a section counts as current (default: 200)
    #[serde(default = "default_nav_offset")]
    pub nav_offset: f64,

    /// Visible fraction that triggers a reveal (default: 0.1)
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f64,

    /// Signed adjustment of the viewport's bottom edge for reveals (default: -100)
    #[serde(default = "default_reveal_bottom_margin")]
    pub reveal_bottom_margin: f64,

    /// Ripple lifetime (default: 600)
    #[serde(default = "default_ripple_duration_ms")]
    pub ripple_duration_ms: u64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            nav_offset: default_nav_offset(),
            reveal_threshold: default_reveal_threshold(),
            reveal_bottom_margin: default_reveal_bottom_margin(),
            ripple_duration_ms: default_ripple_duration_ms(),
        }
    }
}

impl ScrollConfig {
    pub fn ripple_duration(&self) -> Duration {
        Duration::from_millis(self.ripple_duration_ms)
    }
}

impl PageConfig {
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
        let config: PageConfig = toml::from_str(content).context("Invalid folio.toml")?;

        if !(0.0..=1.0).contains(&config.scroll.reveal_threshold) {
            anyhow::bail!(
                "scroll.reveal_threshold must be between 0 and 1, got {}",
                config.scroll.reveal_threshold
            );
        }

        Ok(config)
    }
}

fn default_nav_offset() -> f64 {
    200.0
}

fn default_reveal_threshold() -> f64 {
    0.1
}

fn default_reveal_bottom_margin() -> f64 {
    -100.0
}

fn default_ripple_duration_ms() -> u64 {
    600
}
