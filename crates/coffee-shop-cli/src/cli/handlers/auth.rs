//! Handlers for Auth0 login and logout links

use crate::error::Result;
use crate::output::{print_json, status, Rows, Status};
use coffee_shop_config::auth0::{logout_url, LoginFlow, LoginRequest};
use coffee_shop_config::EnvironmentConfig;
use serde_json::json;
use tracing::debug;

pub fn handle_login_url(
    config: &EnvironmentConfig,
    code: bool,
    path: String,
    state: Option<String>,
    json: bool,
) -> Result<()> {
    let flow = if code {
        LoginFlow::AuthorizationCode
    } else {
        LoginFlow::Implicit
    };

    let mut request = LoginRequest::new(config).flow(flow).callback_path(path);
    if let Some(state) = state {
        request = request.state(state);
    }
    let link = request.build()?;
    debug!("Built login link with state {}", link.state);

    if json {
        return print_json(&json!({
            "url": link.url.as_str(),
            "state": link.state,
            "pkce_verifier": link.pkce_verifier,
        }));
    }

    println!("{}", link.url);
    if let Some(verifier) = &link.pkce_verifier {
        status(Status::Note, "Keep this PKCE verifier for the token exchange:");
        Rows::new().row("code_verifier", verifier.as_str()).print();
    }
    Ok(())
}

pub fn handle_logout_url(config: &EnvironmentConfig, return_to: &str, json: bool) -> Result<()> {
    let url = logout_url(config.auth0(), return_to)?;
    if json {
        return print_json(&json!({ "url": url.as_str() }));
    }
    println!("{url}");
    Ok(())
}
