//! Generator configuration
//!
//! Settings can be loaded from a TOML file; every key is optional.
//!
//! ```toml
//! on_malformed = "skip"
//! print_width = 100
//! indent_width = 2
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::markup::FormatOptions;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// What to do when an icon's markup cannot be transformed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnMalformed {
    /// Stop the run with an error
    #[default]
    Abort,
    /// Leave the icon out, log a warning and continue
    Skip,
}

/// Configuration for a generation run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub on_malformed: OnMalformed,
    /// Line width for the component formatter
    pub print_width: usize,
    /// Spaces per indentation level in components
    pub indent_width: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            on_malformed: OnMalformed::Abort,
            print_width: 80,
            indent_width: 2,
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the malformed-icon policy
    pub fn with_on_malformed(mut self, policy: OnMalformed) -> Self {
        self.on_malformed = policy;
        self
    }

    /// Set the formatter print width
    pub fn with_print_width(mut self, width: usize) -> Self {
        self.print_width = width;
        self
    }

    /// Set the formatter indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Formatter options derived from this configuration
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions::new()
            .with_print_width(self.print_width)
            .with_indent_width(self.indent_width)
    }
}
