//! Handlers for `show`, `validate` and `get`

use crate::error::{CliError, Result};
use crate::output::{print_json, status, Rows, Status};
use coffee_shop_config::bundle::BundleRecord;
use coffee_shop_config::{ConfigLoader, EnvironmentConfig};
use serde_json::json;

pub fn handle_show(config: &EnvironmentConfig, json: bool) -> Result<()> {
    if json {
        return print_json(&BundleRecord::from(config));
    }
    Rows::titled(format!("{} configuration", config.environment()))
        .rows(config.to_map())
        .print();
    Ok(())
}

pub fn handle_validate(loader: &ConfigLoader, json: bool) -> Result<()> {
    let environment = loader.environment();
    match loader.load() {
        Ok(_) => {
            if json {
                print_json(&json!({ "environment": environment, "valid": true }))
            } else {
                status(Status::Done, &format!("Configuration for {environment} is valid"));
                Ok(())
            }
        }
        Err(err) => {
            if !json {
                status(Status::Failed, &format!("Configuration for {environment} is invalid"));
                return Err(err.into());
            }
            print_json(&json!({
                "environment": environment,
                "valid": false,
                "field": err.field(),
                "error": err.to_string(),
            }))?;
            Err(CliError::Reported(err.to_string()))
        }
    }
}

pub fn handle_get(config: &EnvironmentConfig, key: &str) -> Result<()> {
    println!("{}", config.get(key)?);
    Ok(())
}
