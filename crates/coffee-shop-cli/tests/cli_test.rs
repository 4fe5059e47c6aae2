//! Command handler tests for coffee-shop-cli
//! Tests handlers against the built-in development configuration

use coffee_shop_cli::cli::handlers;
use coffee_shop_cli::{Args, CliError, Commands};
use coffee_shop_config::{ConfigLoader, ConfigurationError, Environment, EnvironmentConfig};
use clap::Parser;

#[test]
fn test_show_and_get_succeed_for_development() {
    let config = EnvironmentConfig::development();
    assert!(handlers::config::handle_show(&config, false).is_ok());
    assert!(handlers::config::handle_show(&config, true).is_ok());
    assert!(handlers::config::handle_get(&config, "auth0.audience").is_ok());
}

#[test]
fn test_get_unknown_key() {
    let err = handlers::config::handle_get(&EnvironmentConfig::development(), "auth0.secret")
        .unwrap_err();
    assert!(matches!(
        err,
        CliError::Config(ConfigurationError::UnknownKey(_))
    ));
}

#[test]
fn test_validate_reports_production_misconfiguration() {
    let loader = ConfigLoader::new(Environment::Production)
        .without_file()
        .with_env_prefix("COFFEE_SHOP_CLI_TEST_NONE_");

    let err = handlers::config::handle_validate(&loader, false).unwrap_err();
    match err {
        CliError::Config(inner) => assert_eq!(inner.field(), Some("api_server_url")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_validate_json_failure_is_not_reported_twice() {
    let loader = ConfigLoader::new(Environment::Production)
        .without_file()
        .with_env_prefix("COFFEE_SHOP_CLI_TEST_NONE_");

    let err = handlers::config::handle_validate(&loader, true).unwrap_err();
    match err {
        CliError::Reported(message) => assert!(message.contains("api_server_url")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_validate_development() {
    let loader = ConfigLoader::new(Environment::Development)
        .without_file()
        .with_env_prefix("COFFEE_SHOP_CLI_TEST_NONE_");
    assert!(handlers::config::handle_validate(&loader, false).is_ok());
}

#[test]
fn test_login_and_logout_urls() {
    let config = EnvironmentConfig::development();
    assert!(handlers::auth::handle_login_url(&config, false, String::new(), None, false).is_ok());
    assert!(
        handlers::auth::handle_login_url(&config, true, String::new(), Some("s".into()), true)
            .is_ok()
    );
    assert!(handlers::auth::handle_logout_url(&config, "https://127.0.0.1:8080/", false).is_ok());
    assert!(handlers::auth::handle_logout_url(&config, "not a url", false).is_err());
}

#[test]
fn test_endpoints() {
    let config = EnvironmentConfig::development();
    assert!(handlers::endpoints::handle_endpoints(&config, false).is_ok());
    assert!(handlers::endpoints::handle_endpoints(&config, true).is_ok());
}

#[tokio::test]
async fn test_run_bundle_with_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("coffee-shop.toml");
    let output = dir.path().join("environment.js");

    let init = Args::try_parse_from([
        "coffee-shop",
        "--env",
        "development",
        "--config",
        config_path.to_str().unwrap(),
        "init",
    ])
    .unwrap();
    assert!(matches!(init.command, Commands::Init { .. }));
    init.run().await.unwrap();

    let bundle = Args::try_parse_from([
        "coffee-shop",
        "--env",
        "development",
        "--config",
        config_path.to_str().unwrap(),
        "bundle",
        "--output",
        output.to_str().unwrap(),
    ])
    .unwrap();
    bundle.run().await.unwrap();

    let module = tokio::fs::read_to_string(&output).await.unwrap();
    assert!(module.starts_with("export const environment = "));
    assert!(module.contains("\"callbackURL\": \"https://127.0.0.1:8080/login-results\""));
}
