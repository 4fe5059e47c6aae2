//! Auth0 URLs derived from the configuration record
//!
//! The front-end signs users in by redirecting to the tenant's `/authorize`
//! endpoint and reading the access token back from the callback URL fragment.
//! This module builds those URLs; it does not talk to Auth0.

use crate::error::{ConfigurationError, Result};
use crate::record::{Auth0Config, EnvironmentConfig};
use oauth2::{
    basic::BasicClient, AuthUrl, ClientId, CsrfToken, PkceCodeChallenge, RedirectUrl, TokenUrl,
};
use serde::Serialize;
use tracing::debug;
use url::Url;

/// Well-known endpoints of an Auth0 tenant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Auth0Endpoints {
    pub issuer: String,
    pub authorize: String,
    pub token: String,
    pub jwks: String,
    pub userinfo: String,
}

impl Auth0Endpoints {
    pub fn new(auth0: &Auth0Config) -> Self {
        let host = auth0.url.trim_end_matches('/');
        Self {
            issuer: format!("https://{host}/"),
            authorize: format!("https://{host}/authorize"),
            token: format!("https://{host}/oauth/token"),
            jwks: format!("https://{host}/.well-known/jwks.json"),
            userinfo: format!("https://{host}/userinfo"),
        }
    }
}

/// Which OAuth 2.0 grant the login link starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginFlow {
    /// `response_type=token`; the token comes back in the URL fragment
    #[default]
    Implicit,
    /// `response_type=code` with a PKCE S256 challenge
    AuthorizationCode,
}

/// A login link ready to open in the browser
#[derive(Debug, Clone)]
pub struct LoginLink {
    pub url: Url,
    /// CSRF state the callback must echo back
    pub state: String,
    /// PKCE verifier for the token exchange, authorization-code flow only
    pub pkce_verifier: Option<String>,
}

/// Builder for the Auth0 authorization URL
#[derive(Debug, Clone)]
pub struct LoginRequest<'a> {
    config: &'a EnvironmentConfig,
    flow: LoginFlow,
    state: Option<String>,
    callback_path: String,
}

impl<'a> LoginRequest<'a> {
    pub fn new(config: &'a EnvironmentConfig) -> Self {
        Self {
            config,
            flow: LoginFlow::default(),
            state: None,
            callback_path: String::new(),
        }
    }

    pub fn flow(mut self, flow: LoginFlow) -> Self {
        self.flow = flow;
        self
    }

    /// Use a fixed state value instead of a random one
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Suffix appended to the configured callback URL
    pub fn callback_path(mut self, path: impl Into<String>) -> Self {
        self.callback_path = path.into();
        self
    }

    pub fn redirect_uri(&self) -> String {
        format!("{}{}", self.config.auth0().callback_url, self.callback_path)
    }

    /// Build the authorization URL.
    ///
    /// Host is the tenant domain; `client_id`, `audience` and `redirect_uri`
    /// come from the record and are percent-encoded.
    pub fn build(self) -> Result<LoginLink> {
        let auth0 = self.config.auth0();
        let endpoints = Auth0Endpoints::new(auth0);
        let redirect_uri = self.redirect_uri();
        debug!(
            "Building {:?} login link for client_id: {}",
            self.flow, auth0.client_id
        );

        let auth_url = AuthUrl::new(endpoints.authorize).map_err(|e| {
            ConfigurationError::misconfigured("auth0.url", format!("Invalid auth endpoint: {e}"))
        })?;
        let token_url = TokenUrl::new(endpoints.token).map_err(|e| {
            ConfigurationError::misconfigured("auth0.url", format!("Invalid token endpoint: {e}"))
        })?;
        let redirect_url = RedirectUrl::new(redirect_uri).map_err(|e| {
            ConfigurationError::misconfigured(
                "auth0.callback_url",
                format!("Invalid redirect URI: {e}"),
            )
        })?;

        let client = BasicClient::new(
            ClientId::new(auth0.client_id.clone()),
            None,
            auth_url,
            Some(token_url),
        )
        .set_redirect_uri(redirect_url);

        let state = self.state.clone();
        let mut request = client
            .authorize_url(move || match state {
                Some(state) => CsrfToken::new(state),
                None => CsrfToken::new_random(),
            })
            .add_extra_param("audience", auth0.audience.clone());

        let mut pkce_verifier = None;
        match self.flow {
            LoginFlow::Implicit => {
                request = request.use_implicit_flow();
            }
            LoginFlow::AuthorizationCode => {
                let (challenge, verifier) = PkceCodeChallenge::new_random_sha256();
                request = request.set_pkce_challenge(challenge);
                pkce_verifier = Some(verifier.secret().clone());
            }
        }

        let (url, csrf_token) = request.url();
        Ok(LoginLink {
            url,
            state: csrf_token.secret().clone(),
            pkce_verifier,
        })
    }
}

/// Build the tenant logout URL that returns the browser to `return_to`
pub fn logout_url(auth0: &Auth0Config, return_to: &str) -> Result<Url> {
    let return_to = Url::parse(return_to).map_err(|e| {
        ConfigurationError::misconfigured("return_to", format!("not a valid URL: {e}"))
    })?;
    let mut url = Url::parse(&format!("https://{}/v2/logout", auth0.url.trim_end_matches('/')))
        .map_err(|e| ConfigurationError::misconfigured("auth0.url", e.to_string()))?;
    url.query_pairs_mut()
        .append_pair("client_id", &auth0.client_id)
        .append_pair("returnTo", return_to.as_str());
    Ok(url)
}

/// Extract `access_token` from the fragment of a login callback.
///
/// Accepts either the full callback URL or just the fragment (with or
/// without the leading `#`).
pub fn access_token_from_fragment(input: &str) -> Option<String> {
    let fragment = match Url::parse(input) {
        Ok(url) => url.fragment()?.to_string(),
        Err(_) => input.trim_start_matches('#').to_string(),
    };

    url::form_urlencoded::parse(fragment.as_bytes())
        .find(|(key, _)| key == "access_token")
        .map(|(_, value)| value.into_owned())
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn query(url: &Url) -> HashMap<String, String> {
        url.query_pairs().into_owned().collect()
    }

    #[test]
    fn test_endpoints() {
        let endpoints = Auth0Endpoints::new(&Auth0Config::development());
        assert_eq!(endpoints.issuer, "https://test-alanoud.us.auth0.com/");
        assert_eq!(endpoints.authorize, "https://test-alanoud.us.auth0.com/authorize");
        assert_eq!(endpoints.token, "https://test-alanoud.us.auth0.com/oauth/token");
        assert_eq!(
            endpoints.jwks,
            "https://test-alanoud.us.auth0.com/.well-known/jwks.json"
        );
    }

    #[test]
    fn test_implicit_login_link() {
        let config = EnvironmentConfig::development();
        let link = LoginRequest::new(&config).state("fixed-state").build().unwrap();

        assert_eq!(link.url.scheme(), "https");
        assert_eq!(link.url.host_str(), Some("test-alanoud.us.auth0.com"));
        assert_eq!(link.url.path(), "/authorize");

        let params = query(&link.url);
        assert_eq!(params["response_type"], "token");
        assert_eq!(params["client_id"], "3Hd4Of7KRQq5biFW1y3glQ8A5WhZ4Rn2");
        assert_eq!(params["audience"], "drinks");
        assert_eq!(params["redirect_uri"], "https://127.0.0.1:8080/login-results");
        assert_eq!(params["state"], "fixed-state");
        assert_eq!(link.state, "fixed-state");
        assert!(link.pkce_verifier.is_none());
    }

    #[test]
    fn test_redirect_uri_is_percent_encoded() {
        let config = EnvironmentConfig::development();
        let link = LoginRequest::new(&config).build().unwrap();
        let raw_query = link.url.query().unwrap();

        assert!(raw_query.contains("redirect_uri=https%3A%2F%2F127.0.0.1%3A8080%2Flogin-results"));
        assert!(!link.state.is_empty());
    }

    #[test]
    fn test_callback_path_suffix() {
        let config = EnvironmentConfig::development();
        let link = LoginRequest::new(&config)
            .callback_path("/tabs/user-page")
            .build()
            .unwrap();
        assert_eq!(
            query(&link.url)["redirect_uri"],
            "https://127.0.0.1:8080/login-results/tabs/user-page"
        );
    }

    #[test]
    fn test_authorization_code_login_link() {
        let config = EnvironmentConfig::development();
        let link = LoginRequest::new(&config)
            .flow(LoginFlow::AuthorizationCode)
            .build()
            .unwrap();

        let params = query(&link.url);
        assert_eq!(params["response_type"], "code");
        assert_eq!(params["code_challenge_method"], "S256");
        assert!(params.contains_key("code_challenge"));
        assert!(link.pkce_verifier.is_some());
    }

    #[test]
    fn test_logout_url() {
        let url = logout_url(&Auth0Config::development(), "https://127.0.0.1:8080/").unwrap();
        assert_eq!(url.host_str(), Some("test-alanoud.us.auth0.com"));
        assert_eq!(url.path(), "/v2/logout");

        let params = query(&url);
        assert_eq!(params["client_id"], "3Hd4Of7KRQq5biFW1y3glQ8A5WhZ4Rn2");
        assert_eq!(params["returnTo"], "https://127.0.0.1:8080/");

        assert!(logout_url(&Auth0Config::development(), "not a url").is_err());
    }

    #[test]
    fn test_access_token_from_fragment() {
        let callback = "https://127.0.0.1:8080/login-results\
                        #access_token=eyJ.abc.def&expires_in=7200&token_type=Bearer";
        assert_eq!(access_token_from_fragment(callback).as_deref(), Some("eyJ.abc.def"));
        assert_eq!(
            access_token_from_fragment("#token_type=Bearer&access_token=xyz").as_deref(),
            Some("xyz")
        );
        assert_eq!(access_token_from_fragment("https://127.0.0.1:8080/login-results"), None);
        assert_eq!(access_token_from_fragment("#access_token="), None);
    }
}
