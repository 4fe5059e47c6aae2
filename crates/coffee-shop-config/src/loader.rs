//! Layered configuration loading and environment selection

use crate::defaults::{DEFAULT_CONFIG_FILE, ENV_PREFIX};
use crate::environment::Environment;
use crate::error::{ConfigurationError, Result};
use crate::record::{EnvironmentConfig, RawEnvironmentConfig};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Loads the record for a single environment.
///
/// Sources, later ones winning:
/// 1. built-in defaults for every environment
/// 2. a TOML file with one `[development]` / `[production]` table each
/// 3. `COFFEE_SHOP_*` environment variables, nested keys split on `__`
///    (e.g. `COFFEE_SHOP_AUTH0__CLIENT_ID`)
///
/// Only the selected environment's profile is extracted.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    environment: Environment,
    file: Option<PathBuf>,
    env_prefix: String,
}

/// Layout of the TOML configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    pub development: RawEnvironmentConfig,
    pub production: RawEnvironmentConfig,
}

impl ConfigLoader {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            file: Some(PathBuf::from(DEFAULT_CONFIG_FILE)),
            env_prefix: ENV_PREFIX.to_string(),
        }
    }

    /// Read overrides from `path` instead of the default file
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Skip the configuration file entirely
    pub fn without_file(mut self) -> Self {
        self.file = None;
        self
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// The layered figment with the selected profile applied
    pub fn figment(&self) -> Figment {
        let mut figment = Figment::new()
            .merge(Serialized::from(
                RawEnvironmentConfig::defaults_for(Environment::Development),
                Environment::Development.profile(),
            ))
            .merge(Serialized::from(
                RawEnvironmentConfig::defaults_for(Environment::Production),
                Environment::Production.profile(),
            ));

        if let Some(path) = &self.file {
            if path.exists() {
                debug!("Merging configuration file: {}", path.display());
            } else {
                debug!(
                    "Configuration file not found, using defaults: {}",
                    path.display()
                );
            }
            figment = figment.merge(Toml::file(path).nested());
        }

        self.merge_env(figment).select(self.environment.profile())
    }

    /// Merge `COFFEE_SHOP_*` variables into the selected profile.
    ///
    /// Values are kept as the strings the environment holds. figment's `Env`
    /// provider would re-type `12345` as an integer or `[drinks]` as a list,
    /// neither of which extracts into a string field. Only `production` is
    /// read as a boolean.
    fn merge_env(&self, figment: Figment) -> Figment {
        let profile = self.environment.profile();
        let env = Env::prefixed(&self.env_prefix).ignore(&["ENV"]).split("__");

        let merged = env.iter().fold(figment, |figment, (key, value)| {
            let key = key.as_str();
            debug!("Merging environment override for `{key}`");
            match value.parse::<bool>() {
                Ok(flag) if key == "production" => {
                    figment.merge(Serialized::from(flag, profile.clone()).key(key))
                }
                _ => figment.merge(Serialized::from(value, profile.clone()).key(key)),
            }
        });
        merged
    }

    /// Extract the selected environment's values without validating them
    pub fn load_raw(&self) -> Result<RawEnvironmentConfig> {
        Ok(self.figment().extract()?)
    }

    /// Load and validate the selected environment's record
    pub fn load(&self) -> Result<EnvironmentConfig> {
        let raw = self.load_raw()?;

        if raw.production != self.environment.is_production() {
            return Err(ConfigurationError::EnvironmentMismatch {
                environment: self.environment,
                production: raw.production,
            });
        }

        let config = EnvironmentConfig::try_from(raw)?;
        info!(
            environment = %self.environment,
            api_server_url = config.api_server_url(),
            "Loaded environment configuration"
        );
        Ok(config)
    }

    /// Render a starter configuration file with both environment tables.
    ///
    /// Production values are left empty; they must be filled in before a
    /// production build will load.
    pub fn example_toml() -> Result<String> {
        let file = ConfigFile {
            development: RawEnvironmentConfig::defaults_for(Environment::Development),
            production: RawEnvironmentConfig::defaults_for(Environment::Production),
        };
        let body = toml::to_string_pretty(&file).map_err(|e| ConfigurationError::ParseError {
            details: format!("Failed to serialize config: {e}"),
        })?;
        Ok(format!(
            "# Coffee Shop environment configuration.\n\
             # Fill in every production value before building for production.\n\n{body}"
        ))
    }
}

/// Load the record for the environment named by `COFFEE_SHOP_ENV` using the
/// default file and environment variables.
pub fn load_from_env() -> Result<EnvironmentConfig> {
    ConfigLoader::new(Environment::from_env()?).load()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_without_sources() {
        let config = ConfigLoader::new(Environment::Development)
            .without_file()
            .with_env_prefix("COFFEE_SHOP_UNIT_NONE_")
            .load()
            .unwrap();
        assert_eq!(config, EnvironmentConfig::development());
    }

    #[test]
    fn test_production_without_sources_fails() {
        let err = ConfigLoader::new(Environment::Production)
            .without_file()
            .with_env_prefix("COFFEE_SHOP_UNIT_NONE_")
            .load()
            .unwrap_err();
        assert_eq!(err.field(), Some("api_server_url"));
    }

    #[test]
    fn test_example_toml_round_trips() {
        let rendered = ConfigLoader::example_toml().unwrap();
        assert!(rendered.starts_with("# Coffee Shop"));

        let parsed: ConfigFile = toml::from_str(&rendered).unwrap();
        assert_eq!(
            parsed.development,
            RawEnvironmentConfig::defaults_for(Environment::Development)
        );
        assert!(parsed.production.production);
        assert!(parsed.production.api_server_url.is_empty());
    }

    #[test]
    fn test_loader_accessors() {
        let loader = ConfigLoader::new(Environment::Production).with_file("deploy/prod.toml");
        assert_eq!(loader.environment(), Environment::Production);
        assert_eq!(loader.file(), Some(Path::new("deploy/prod.toml")));
        assert_eq!(
            ConfigLoader::new(Environment::Development).file(),
            Some(Path::new(DEFAULT_CONFIG_FILE))
        );
    }
}
