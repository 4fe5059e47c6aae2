//! Error types for the Coffee Shop CLI

use coffee_shop_config::ConfigurationError;
use color_eyre::eyre::Report;
use thiserror::Error;

/// CLI error type with minimal variants
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration loading or validation failed
    #[error(transparent)]
    Config(#[from] ConfigurationError),

    /// Invalid command-line input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File output failures
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The failure was already written to stdout (e.g. as JSON); exit
    /// non-zero without printing it again
    #[error("{0}")]
    Reported(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Everything else (using color-eyre's Report for rich errors)
    #[error(transparent)]
    Internal(#[from] Report),
}

impl CliError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
