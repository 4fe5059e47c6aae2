//! Transport form of the record for injection into client bundles
//!
//! The front-end reads camelCase keys (`apiServerUrl`, `auth0.clientId`,
//! `auth0.callbackURL`), which differ from the snake_case keys used in
//! configuration files and environment variables.

use crate::error::Result;
use crate::record::{Auth0Config, EnvironmentConfig};
use serde::{Deserialize, Serialize};

/// The record as the front-end sees it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleRecord {
    pub production: bool,
    pub api_server_url: String,
    pub auth0: BundleAuth0,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleAuth0 {
    pub url: String,
    pub audience: String,
    pub client_id: String,
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
}

impl From<&EnvironmentConfig> for BundleRecord {
    fn from(config: &EnvironmentConfig) -> Self {
        let auth0 = config.auth0();
        Self {
            production: config.production(),
            api_server_url: config.api_server_url().to_string(),
            auth0: BundleAuth0 {
                url: auth0.url.clone(),
                audience: auth0.audience.clone(),
                client_id: auth0.client_id.clone(),
                callback_url: auth0.callback_url.clone(),
            },
        }
    }
}

impl TryFrom<BundleRecord> for EnvironmentConfig {
    type Error = crate::error::ConfigurationError;

    fn try_from(record: BundleRecord) -> Result<Self> {
        EnvironmentConfig::new(
            record.production,
            record.api_server_url,
            Auth0Config {
                url: record.auth0.url,
                audience: record.auth0.audience,
                client_id: record.auth0.client_id,
                callback_url: record.auth0.callback_url,
            },
        )
    }
}

/// Serialize the record as pretty-printed JSON
pub fn to_json(config: &EnvironmentConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(&BundleRecord::from(config))?)
}

/// Parse and validate a record from its JSON transport form
pub fn from_json(input: &str) -> Result<EnvironmentConfig> {
    let record: BundleRecord = serde_json::from_str(input)?;
    EnvironmentConfig::try_from(record)
}

/// Render an ES module exporting the record as `environment`
pub fn to_module(config: &EnvironmentConfig) -> Result<String> {
    let json = to_json(config)?;
    Ok(format!("export const environment = {json};\n"))
}
