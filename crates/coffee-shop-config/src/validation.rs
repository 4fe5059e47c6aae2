//! Eager validation of configuration records
//!
//! Validation runs when a record is loaded, so a bad value aborts startup
//! with the field name instead of surfacing later as a network or login
//! failure.

use crate::defaults::DEV_AUTH0_CLIENT_ID;
use crate::error::{ConfigurationError, Result};
use crate::record::RawEnvironmentConfig;
use tracing::debug;
use url::{Host, Url};

/// Substrings that mark an un-replaced template value
const PLACEHOLDER_MARKERS: &[&str] = &[
    "your-",
    "your_",
    "replace-me",
    "replace_me",
    "replace-with",
    "changeme",
    "change-me",
    "<",
    ">",
];

/// Prefixes that mark an un-replaced template value (`REPLACE`,
/// `replace with client id`, ...)
const PLACEHOLDER_PREFIXES: &[&str] = &["replace"];

/// Whole values that mark an un-replaced template value
const PLACEHOLDER_VALUES: &[&str] = &["todo", "tbd", "xxx", "placeholder"];

/// Parsed URLs produced as a by-product of validation
#[derive(Debug, Clone)]
pub struct ValidatedUrls {
    pub api_base: Url,
    pub callback: Url,
}

/// Validate a raw record, returning the parsed URLs on success.
///
/// Checks run in field order so the first reported error names the first
/// bad field.
pub fn validate(raw: &RawEnvironmentConfig) -> Result<ValidatedUrls> {
    let fields: [(&'static str, &str); 5] = [
        ("api_server_url", &raw.api_server_url),
        ("auth0.url", &raw.auth0.url),
        ("auth0.audience", &raw.auth0.audience),
        ("auth0.client_id", &raw.auth0.client_id),
        ("auth0.callback_url", &raw.auth0.callback_url),
    ];

    for (field, value) in fields {
        require_non_empty(field, value)?;
    }
    for (field, value) in fields {
        reject_placeholder(field, value)?;
    }

    let api_base = parse_web_url("api_server_url", &raw.api_server_url)?;
    validate_hostname("auth0.url", &raw.auth0.url)?;
    let callback = parse_web_url("auth0.callback_url", &raw.auth0.callback_url)?;

    if raw.production {
        validate_production(raw, &api_base, &callback)?;
    }

    debug!(production = raw.production, "Configuration record validated");
    Ok(ValidatedUrls { api_base, callback })
}

fn require_non_empty(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigurationError::misconfigured(field, "value is empty"));
    }
    if value.trim() != value {
        return Err(ConfigurationError::misconfigured(
            field,
            "value has leading or trailing whitespace",
        ));
    }
    Ok(())
}

fn reject_placeholder(field: &'static str, value: &str) -> Result<()> {
    let lowered = value.to_ascii_lowercase();
    let is_placeholder = PLACEHOLDER_VALUES.contains(&lowered.as_str())
        || PLACEHOLDER_PREFIXES.iter().any(|prefix| lowered.starts_with(prefix))
        || PLACEHOLDER_MARKERS.iter().any(|marker| lowered.contains(marker));

    if is_placeholder {
        return Err(ConfigurationError::misconfigured(
            field,
            format!("`{value}` looks like an un-replaced template value"),
        ));
    }
    Ok(())
}

/// Parse an absolute `http`/`https` URL with a host
fn parse_web_url(field: &'static str, value: &str) -> Result<Url> {
    let url = Url::parse(value)
        .map_err(|e| ConfigurationError::misconfigured(field, format!("not a valid URL: {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigurationError::misconfigured(
            field,
            format!("unsupported scheme `{}`, expected http or https", url.scheme()),
        ));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(ConfigurationError::misconfigured(field, "URL has no host"));
    }
    Ok(url)
}

/// The tenant domain is a bare hostname: no scheme, port or path
fn validate_hostname(field: &'static str, value: &str) -> Result<()> {
    if value.contains("://") {
        return Err(ConfigurationError::misconfigured(
            field,
            "expected a bare hostname without a scheme",
        ));
    }
    if value.contains(['/', ':', '?', '#', ' ']) {
        return Err(ConfigurationError::misconfigured(
            field,
            "expected a bare hostname without port or path",
        ));
    }
    Host::parse(value).map_err(|e| {
        ConfigurationError::misconfigured(field, format!("not a valid hostname: {e}"))
    })?;
    Ok(())
}

fn validate_production(raw: &RawEnvironmentConfig, api_base: &Url, callback: &Url) -> Result<()> {
    for (field, url) in [("api_server_url", api_base), ("auth0.callback_url", callback)] {
        if url.scheme() != "https" {
            return Err(ConfigurationError::misconfigured(
                field,
                "production URLs must use https",
            ));
        }
        if is_loopback(url) {
            return Err(ConfigurationError::misconfigured(
                field,
                "production URLs must not point at a loopback host",
            ));
        }
    }

    if raw.auth0.client_id == DEV_AUTH0_CLIENT_ID {
        return Err(ConfigurationError::misconfigured(
            "auth0.client_id",
            "production uses the development client ID",
        ));
    }
    Ok(())
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(domain)) => {
            domain.eq_ignore_ascii_case("localhost") || domain.ends_with(".localhost")
        }
        Some(Host::Ipv4(ip)) => ip.is_loopback() || ip.is_unspecified(),
        Some(Host::Ipv6(ip)) => ip.is_loopback() || ip.is_unspecified(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::record::Auth0Config;

    fn dev() -> RawEnvironmentConfig {
        RawEnvironmentConfig::defaults_for(Environment::Development)
    }

    fn prod() -> RawEnvironmentConfig {
        RawEnvironmentConfig {
            production: true,
            api_server_url: "https://api.coffee.example.com".to_string(),
            auth0: Auth0Config {
                url: "coffee.eu.auth0.com".to_string(),
                audience: "drinks".to_string(),
                client_id: "Zx81pQm0LkW2aa7TnB4cVd9eRf6gHh1J".to_string(),
                callback_url: "https://coffee.example.com/login-results".to_string(),
            },
        }
    }

    fn field_of(result: Result<ValidatedUrls>) -> &'static str {
        result.unwrap_err().field().unwrap()
    }

    #[test]
    fn test_development_record_is_valid() {
        let urls = validate(&dev()).unwrap();
        assert_eq!(urls.api_base.host_str(), Some("127.0.0.1"));
        assert_eq!(urls.callback.path(), "/login-results");
    }

    #[test]
    fn test_production_record_is_valid() {
        assert!(validate(&prod()).is_ok());
    }

    #[test]
    fn test_every_field_must_be_non_empty() {
        let mut raw = dev();
        raw.auth0.audience = "   ".to_string();
        assert_eq!(field_of(validate(&raw)), "auth0.audience");

        let mut raw = dev();
        raw.auth0.client_id.clear();
        assert_eq!(field_of(validate(&raw)), "auth0.client_id");
    }

    #[test]
    fn test_first_bad_field_is_reported() {
        let mut raw = dev();
        raw.api_server_url.clear();
        raw.auth0.url.clear();
        assert_eq!(field_of(validate(&raw)), "api_server_url");
    }

    #[test]
    fn test_placeholders_rejected() {
        let mut raw = dev();
        raw.auth0.client_id = "your-client-id".to_string();
        assert_eq!(field_of(validate(&raw)), "auth0.client_id");

        let mut raw = dev();
        raw.auth0.url = "<tenant>.auth0.com".to_string();
        assert_eq!(field_of(validate(&raw)), "auth0.url");

        let mut raw = dev();
        raw.auth0.audience = "TODO".to_string();
        assert_eq!(field_of(validate(&raw)), "auth0.audience");

        for value in ["REPLACE", "replace with client id", "replace-me"] {
            let mut raw = dev();
            raw.auth0.client_id = value.to_string();
            assert_eq!(field_of(validate(&raw)), "auth0.client_id", "{value}");
        }
    }

    #[test]
    fn test_malformed_urls_rejected() {
        let mut raw = dev();
        raw.api_server_url = "127.0.0.1:5000".to_string();
        assert_eq!(field_of(validate(&raw)), "api_server_url");

        let mut raw = dev();
        raw.auth0.callback_url = "ftp://127.0.0.1/login-results".to_string();
        assert_eq!(field_of(validate(&raw)), "auth0.callback_url");
    }

    #[test]
    fn test_tenant_must_be_bare_hostname() {
        for bad in [
            "https://test-alanoud.us.auth0.com",
            "test-alanoud.us.auth0.com/authorize",
            "test-alanoud.us.auth0.com:443",
        ] {
            let mut raw = dev();
            raw.auth0.url = bad.to_string();
            assert_eq!(field_of(validate(&raw)), "auth0.url", "{bad}");
        }
    }

    #[test]
    fn test_production_requires_https() {
        let mut raw = prod();
        raw.api_server_url = "http://api.coffee.example.com".to_string();
        assert_eq!(field_of(validate(&raw)), "api_server_url");
    }

    #[test]
    fn test_production_rejects_loopback() {
        let mut raw = prod();
        raw.auth0.callback_url = "https://localhost:8080/login-results".to_string();
        assert_eq!(field_of(validate(&raw)), "auth0.callback_url");

        let mut raw = prod();
        raw.api_server_url = "https://[::1]:5000".to_string();
        assert_eq!(field_of(validate(&raw)), "api_server_url");
    }

    #[test]
    fn test_production_rejects_development_client_id() {
        let mut raw = prod();
        raw.auth0.client_id = Auth0Config::development().client_id;
        assert_eq!(field_of(validate(&raw)), "auth0.client_id");
    }

    #[test]
    fn test_production_rejects_development_callback() {
        let mut raw = prod();
        raw.auth0 = Auth0Config::development();
        assert_eq!(field_of(validate(&raw)), "auth0.callback_url");
    }
}
