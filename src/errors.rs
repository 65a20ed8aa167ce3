//! Error types for the toolscout suggestion engine
//!
//! Only the configuration path can fail. Learning and ranking operations
//! are total over their input domain: lookup misses are `Option::None`,
//! zero-observation rates report 0.0, malformed input degrades to defaults.

use thiserror::Error;

/// Main error type for the suggestion engine
#[derive(Error, Debug)]
pub enum ToolscoutError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// I/O errors (config file access)
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML deserialization errors
    #[error("Config parse error: {0}")]
    TomlDeError(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("Config encode error: {0}")]
    TomlSerError(#[from] toml::ser::Error),
}

/// Result type alias for suggestion engine operations
pub type Result<T> = std::result::Result<T, ToolscoutError>;

/// Convert anyhow errors to ToolscoutError
impl From<anyhow::Error> for ToolscoutError {
    fn from(err: anyhow::Error) -> Self {
        ToolscoutError::ConfigError(err.to_string())
    }
}
