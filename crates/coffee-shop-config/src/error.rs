//! Error types for configuration loading and validation

use crate::environment::Environment;
use thiserror::Error;

/// Everything that can go wrong while producing an [`EnvironmentConfig`].
///
/// [`EnvironmentConfig`]: crate::EnvironmentConfig
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// A field is missing, malformed or still holds a template placeholder
    #[error("invalid configuration value for `{field}`: {reason}")]
    Misconfiguration { field: &'static str, reason: String },

    /// The `production` flag disagrees with the selected environment
    #[error("`production` is {production} but the selected environment is {environment}")]
    EnvironmentMismatch {
        environment: Environment,
        production: bool,
    },

    #[error("unknown environment `{0}` (expected `development` or `production`)")]
    UnknownEnvironment(String),

    #[error("unknown configuration key `{0}`")]
    UnknownKey(String),

    /// Layered sources could not be read or extracted
    #[error("failed to parse configuration: {details}")]
    ParseError { details: String },

    #[error("failed to serialize configuration: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConfigurationError {
    pub fn misconfigured(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Misconfiguration {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the offending field, when the error is about a single field
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Misconfiguration { field, .. } => Some(*field),
            Self::EnvironmentMismatch { .. } => Some("production"),
            _ => None,
        }
    }
}

impl From<figment::Error> for ConfigurationError {
    fn from(err: figment::Error) -> Self {
        Self::ParseError {
            details: err.to_string(),
        }
    }
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigurationError>;
