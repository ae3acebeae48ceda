//! API error types

use thiserror::Error;

/// API-level errors
///
/// Expansion itself never fails; only the configuration and serialization
/// surfaces do.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Configuration text could not be parsed
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// Configuration could not be rendered as TOML
    #[error("configuration rendering error: {0}")]
    ConfigRender(#[from] toml::ser::Error),

    /// Serialization error
    #[cfg(feature = "json")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
