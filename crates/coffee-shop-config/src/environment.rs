//! Deployment environment selection

use crate::defaults::ENV_SELECTOR;
use crate::error::{ConfigurationError, Result};
use figment::Profile;
use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::fmt;
use std::str::FromStr;

/// The deployment target a configuration record is built for.
///
/// Exactly one environment is active per process; its values are never
/// merged with another environment's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development against loopback services
    #[default]
    Development,
    /// Production deployment
    Production,
}

impl Environment {
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    /// Figment profile holding this environment's values
    pub fn profile(&self) -> Profile {
        Profile::new(self.as_str())
    }

    /// Read the active environment from `COFFEE_SHOP_ENV`, defaulting to
    /// development when the variable is unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var(ENV_SELECTOR) {
            Ok(value) => value.parse(),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(raw)) => Err(ConfigurationError::UnknownEnvironment(
                raw.to_string_lossy().into_owned(),
            )),
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(ConfigurationError::UnknownEnvironment(s.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
