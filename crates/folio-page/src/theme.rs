//! Light/dark theme preference

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// Storage key for the saved theme
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Client-local key/value storage
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Reads and writes the theme through a store
pub struct ThemePreference<P: PreferenceStore> {
    store: P,
    current: Theme,
}

impl<P: PreferenceStore> ThemePreference<P> {
    /// Saved theme, else the system preference
    pub fn load(store: P, system_prefers_dark: bool) -> Self {
        let fallback = if system_prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        };

        let current = match store.get(THEME_KEY) {
            Some(saved) => saved.parse().unwrap_or_else(|e: UnknownTheme| {
                warn!(error = %e, "Ignoring saved theme");
                fallback
            }),
            None => fallback,
        };

        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flips the theme and saves it
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.store.set(THEME_KEY, self.current.as_str());
        self.current
    }

    pub fn store(&self) -> &P {
        &self.store
    }
}
