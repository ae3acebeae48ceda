//! Public API for braces shell-style brace expansion
//!
//! This crate provides a small, stable interface over the expansion
//! algorithm in `braces-core`: a reusable [`Expander`] bound to a
//! [`Config`], the [`Expansion`] output type, and convenience functions.
//!
//! The number of words grows with the product of the alternative counts of
//! all groups in a pattern; callers expanding untrusted patterns should
//! bound the pattern length themselves.
//!
//! ```
//! use braces_api::{Config, Expander};
//!
//! assert_eq!(braces_api::expand("foo{bar,baz}qux"), "foobarqux foobazqux");
//!
//! let expander = Expander::with_config(Config::builder().delimiter(",").build());
//! assert_eq!(expander.expand("{a,b}{c,d}").to_string(), "ac,ad,bc,bd");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use std::sync::Arc;
use tracing::debug;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::Expansion;
pub use error::{ApiError, Result};

/// Reusable brace expander
///
/// Cheap to clone; clones share one configuration.
#[derive(Debug, Clone, Default)]
pub struct Expander {
    config: Arc<Config>,
}

impl Expander {
    /// Create an expander with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an expander with a custom configuration
    pub fn with_config(config: Config) -> Self {
        debug!(delimiter = ?config.delimiter(), "creating expander");
        Self {
            config: Arc::new(config),
        }
    }

    /// Create an expander from TOML configuration text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(Self::with_config(Config::from_toml_str(text)?))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Expand a pattern into its ordered words
    pub fn expand(&self, pattern: &str) -> Expansion {
        Expansion::new(
            braces_core::expand_words(pattern),
            self.config.delimiter(),
        )
    }

    /// Expand a pattern and join the words with the configured delimiter
    pub fn expand_to_string(&self, pattern: &str) -> String {
        braces_core::expand(pattern, self.config.delimiter())
    }
}

// Convenience functions

/// Expand a pattern and join the words with a single space
pub fn expand(pattern: &str) -> String {
    braces_core::expand(pattern, config::defaults::DELIMITER)
}

/// Expand a pattern into its ordered words
pub fn expand_words(pattern: &str) -> Vec<String> {
    braces_core::expand_words(pattern)
}

/// Expand a pattern with a given configuration
pub fn expand_with_config(pattern: &str, config: &Config) -> Expansion {
    Expansion::new(braces_core::expand_words(pattern), config.delimiter())
}
