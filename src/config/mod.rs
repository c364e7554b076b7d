//! Theme configuration store (themes.yaml parsing).
//!
//! A theme config names at most one fallback theme. The store is a flat
//! mapping from theme name to config; looking up an unregistered theme
//! yields a default (no-fallback) config rather than an error.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TilepathError};

/// Conventional filename for the theme configuration file.
pub const THEMES_FILENAME: &str = "themes.yaml";

/// Configuration for a single visual theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Theme consulted when this theme lacks a requested asset.
    pub fallback: Option<String>,
}

impl ThemeConfig {
    /// Create a config with a fallback theme.
    pub fn with_fallback(fallback: impl Into<String>) -> Self {
        Self {
            fallback: Some(fallback.into()),
        }
    }
}

/// Store of theme configurations, looked up by theme name.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    themes: HashMap<String, ThemeConfig>,
}

impl ThemeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a registry from a themes.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TilepathError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read theme config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a registry from a YAML mapping of theme name to config.
    pub fn parse(content: &str) -> Result<Self> {
        let themes: HashMap<String, ThemeConfig> =
            serde_yaml::from_str(content).map_err(|e| TilepathError::Parse {
                message: format!("Invalid theme config: {}", e),
                help: Some(format!("Check {} syntax", THEMES_FILENAME)),
            })?;

        Ok(Self { themes })
    }

    /// Register a theme config, replacing any existing entry.
    pub fn insert(&mut self, name: impl Into<String>, config: ThemeConfig) -> &mut Self {
        self.themes.insert(name.into(), config);
        self
    }

    /// Look up a theme's config.
    ///
    /// Unregistered themes get a default config with no fallback.
    pub fn lookup(&self, name: &str) -> ThemeConfig {
        self.themes.get(name).cloned().unwrap_or_default()
    }

    /// Check whether a theme is registered at all.
    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// All registered theme names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    /// Number of registered themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Check if no themes are registered.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
