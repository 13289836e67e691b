//! Shell configuration
//!
//! Loaded from TOML. Every field is optional in the file; missing fields
//! keep their defaults. Command-line flags are applied on top by the
//! binary.
//!
//! ```toml
//! show_programmer = true
//! show_history = false
//! animate = true
//! tick_ms = 80
//! clipboard = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Panels;

/// Shortest backdrop tick accepted, in milliseconds
pub const MIN_TICK_MS: u64 = 10;

/// Default backdrop tick, in milliseconds
pub const DEFAULT_TICK_MS: u64 = 80;

/// Errors from loading or validating a [`ShellConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range
    #[error("invalid config value: {message}")]
    Invalid {
        /// What is wrong
        message: String,
    },
}

impl ConfigError {
    /// Create a validation error
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// Presentation-shell settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Open the programmer panel at start
    pub show_programmer: bool,
    /// Open the history panel at start
    pub show_history: bool,
    /// Draw the animated backdrop
    pub animate: bool,
    /// Backdrop tick interval in milliseconds
    pub tick_ms: u64,
    /// Use the system clipboard (otherwise copies stay in memory)
    pub clipboard: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            show_programmer: false,
            show_history: false,
            animate: true,
            tick_ms: DEFAULT_TICK_MS,
            clipboard: true,
        }
    }
}

impl ShellConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Checks value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms < MIN_TICK_MS {
            return Err(ConfigError::invalid(format!(
                "tick_ms must be at least {MIN_TICK_MS}, got {}",
                self.tick_ms
            )));
        }
        Ok(())
    }

    /// Panels to open at start
    #[must_use]
    pub const fn panels(&self) -> Panels {
        Panels {
            programmer: self.show_programmer,
            history: self.show_history,
        }
    }

    /// Set programmer panel visibility
    #[must_use]
    pub const fn with_programmer(mut self, show: bool) -> Self {
        self.show_programmer = show;
        self
    }

    /// Set history panel visibility
    #[must_use]
    pub const fn with_history(mut self, show: bool) -> Self {
        self.show_history = show;
        self
    }

    /// Set backdrop animation
    #[must_use]
    pub const fn with_animation(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    /// Set backdrop tick interval
    #[must_use]
    pub const fn with_tick_ms(mut self, tick_ms: u64) -> Self {
        self.tick_ms = tick_ms;
        self
    }

    /// Set system clipboard use
    #[must_use]
    pub const fn with_clipboard(mut self, clipboard: bool) -> Self {
        self.clipboard = clipboard;
        self
    }
}
