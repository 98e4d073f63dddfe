//! Error types for tmbridge

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ReportError
pub type Result<T> = std::result::Result<T, ReportError>;

/// Boxed error carried by transport failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for reporting operations
#[derive(Debug, Error)]
pub enum ReportError {
    /// Configuration-related errors, raised while a reporter is being built
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Remote system answered with an unexpected HTTP status
    #[error("API error from {system}: {status} - {message}")]
    Api {
        system: String,
        status: u16,
        message: String,
    },

    /// Request never produced a usable response
    #[error("Transport error talking to {system}: {message}")]
    Transport {
        system: String,
        message: String,
        #[source]
        source: BoxError,
    },

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ReportError {
    /// Wrap a transport-level failure with the system it happened against
    pub fn transport(
        system: impl Into<String>,
        message: impl Into<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::Transport {
            system: system.into(),
            message: message.into(),
            source: source.into(),
        }
    }

    /// Whether this error happened at construction time
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// Credentials cannot be turned into an Authorization header
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Configured project is unknown to the remote system
    #[error("Supplied project key not found: {0}")]
    ProjectNotFound(String),

    /// Configured test cycle is unknown to the remote system
    #[error("Supplied test cycle key not found: {0}")]
    TestCycleNotFound(String),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}
