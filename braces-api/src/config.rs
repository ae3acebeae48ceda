//! High-level configuration API

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Default configuration constants
pub mod defaults {
    /// Delimiter placed between expanded words
    pub const DELIMITER: &str = braces_core::DEFAULT_DELIMITER;
}

/// Expansion configuration
///
/// Loadable from TOML:
///
/// ```
/// use braces_api::Config;
///
/// let config = Config::from_toml_str(r#"delimiter = ", ""#).unwrap();
/// assert_eq!(config.delimiter(), ", ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub(crate) delimiter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delimiter: defaults::DELIMITER.to_string(),
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// One word per line
    pub fn lines() -> Self {
        Self {
            delimiter: "\n".to_string(),
        }
    }

    /// Delimiter placed between expanded words
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Parse a configuration from TOML text
    ///
    /// Missing keys take their defaults; unknown keys are rejected.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Render the configuration as TOML text
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    delimiter: Option<String>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delimiter placed between expanded words
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        let mut config = Config::default();

        if let Some(delimiter) = self.delimiter {
            config.delimiter = delimiter;
        }

        config
    }
}
