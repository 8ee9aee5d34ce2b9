//! Error types for veff-gen

use thiserror::Error;

/// Result type alias for veff-gen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a job manifest
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or contradictory generation parameters
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// YAML parse or serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
