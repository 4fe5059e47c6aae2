//! The environment configuration record

use crate::defaults::{
    DEV_API_SERVER_URL, DEV_AUTH0_AUDIENCE, DEV_AUTH0_CALLBACK_URL, DEV_AUTH0_CLIENT_ID,
    DEV_AUTH0_URL,
};
use crate::environment::Environment;
use crate::error::{ConfigurationError, Result};
use crate::validation;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use url::Url;

/// Auth0 tenant settings consumed by the login flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Auth0Config {
    /// Tenant domain, a bare hostname such as `tenant.us.auth0.com`
    pub url: String,

    /// API identifier issued tokens must target
    pub audience: String,

    /// Public identifier of the front-end application
    pub client_id: String,

    /// Where Auth0 redirects after login
    pub callback_url: String,
}

impl Auth0Config {
    /// Development tenant settings
    pub fn development() -> Self {
        Self {
            url: DEV_AUTH0_URL.to_string(),
            audience: DEV_AUTH0_AUDIENCE.to_string(),
            client_id: DEV_AUTH0_CLIENT_ID.to_string(),
            callback_url: DEV_AUTH0_CALLBACK_URL.to_string(),
        }
    }
}

/// Unvalidated form of the record, as read from files and environment
/// variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RawEnvironmentConfig {
    pub production: bool,
    pub api_server_url: String,
    pub auth0: Auth0Config,
}

impl RawEnvironmentConfig {
    /// Built-in values for an environment.
    ///
    /// Production starts out empty so a deployment that forgets to supply its
    /// values fails validation instead of shipping development settings.
    pub fn defaults_for(environment: Environment) -> Self {
        match environment {
            Environment::Development => Self {
                production: false,
                api_server_url: DEV_API_SERVER_URL.to_string(),
                auth0: Auth0Config::development(),
            },
            Environment::Production => Self {
                production: true,
                ..Self::default()
            },
        }
    }
}

/// Validated, immutable configuration record.
///
/// Every value of this type has passed validation: it is built through
/// [`EnvironmentConfig::new`], deserialization, or the loader. Fields are
/// read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEnvironmentConfig", into = "RawEnvironmentConfig")]
pub struct EnvironmentConfig {
    production: bool,
    api_server_url: String,
    auth0: Auth0Config,
    api_base: Url,
    callback: Url,
}

impl EnvironmentConfig {
    pub fn new(
        production: bool,
        api_server_url: impl Into<String>,
        auth0: Auth0Config,
    ) -> Result<Self> {
        Self::try_from(RawEnvironmentConfig {
            production,
            api_server_url: api_server_url.into(),
            auth0,
        })
    }

    /// The built-in development record
    pub fn development() -> Self {
        let raw = RawEnvironmentConfig::defaults_for(Environment::Development);
        Self {
            production: raw.production,
            api_base: Url::parse(&raw.api_server_url).expect("development API URL is valid"),
            callback: Url::parse(&raw.auth0.callback_url)
                .expect("development callback URL is valid"),
            api_server_url: raw.api_server_url,
            auth0: raw.auth0,
        }
    }

    pub fn production(&self) -> bool {
        self.production
    }

    pub fn environment(&self) -> Environment {
        if self.production {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    /// Base URL of the drinks API, exactly as configured
    pub fn api_server_url(&self) -> &str {
        &self.api_server_url
    }

    /// Parsed form of [`Self::api_server_url`]
    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    pub fn auth0(&self) -> &Auth0Config {
        &self.auth0
    }

    /// Parsed form of the Auth0 callback URL
    pub fn callback(&self) -> &Url {
        &self.callback
    }

    /// Get configuration value by key
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "production" => Ok(self.production.to_string()),
            "api_server_url" | "apiServerUrl" => Ok(self.api_server_url.clone()),
            "auth0.url" => Ok(self.auth0.url.clone()),
            "auth0.audience" => Ok(self.auth0.audience.clone()),
            "auth0.client_id" | "auth0.clientId" => Ok(self.auth0.client_id.clone()),
            "auth0.callback_url" | "auth0.callbackURL" => Ok(self.auth0.callback_url.clone()),
            _ => Err(ConfigurationError::UnknownKey(key.to_string())),
        }
    }

    /// All values as key/value pairs, in declaration order
    pub fn to_map(&self) -> Vec<(&'static str, String)> {
        vec![
            ("production", self.production.to_string()),
            ("api_server_url", self.api_server_url.clone()),
            ("auth0.url", self.auth0.url.clone()),
            ("auth0.audience", self.auth0.audience.clone()),
            ("auth0.client_id", self.auth0.client_id.clone()),
            ("auth0.callback_url", self.auth0.callback_url.clone()),
        ]
    }

    /// Wrap the record for sharing with many read-only consumers
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl TryFrom<RawEnvironmentConfig> for EnvironmentConfig {
    type Error = ConfigurationError;

    fn try_from(raw: RawEnvironmentConfig) -> Result<Self> {
        let parsed = validation::validate(&raw)?;
        Ok(Self {
            production: raw.production,
            api_server_url: raw.api_server_url,
            auth0: raw.auth0,
            api_base: parsed.api_base,
            callback: parsed.callback,
        })
    }
}

impl From<EnvironmentConfig> for RawEnvironmentConfig {
    fn from(config: EnvironmentConfig) -> Self {
        Self {
            production: config.production,
            api_server_url: config.api_server_url,
            auth0: config.auth0,
        }
    }
}
