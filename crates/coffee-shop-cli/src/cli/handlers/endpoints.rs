//! Handler for `endpoints`

use crate::error::Result;
use crate::output::{print_json, Rows};
use coffee_shop_config::api::ApiEndpoints;
use coffee_shop_config::auth0::Auth0Endpoints;
use coffee_shop_config::EnvironmentConfig;
use serde_json::json;

pub fn handle_endpoints(config: &EnvironmentConfig, json: bool) -> Result<()> {
    let auth0 = Auth0Endpoints::new(config.auth0());
    let routes = ApiEndpoints::new(config).routes();

    if json {
        return print_json(&json!({ "auth0": auth0, "api": routes }));
    }

    let tenant = Rows::titled("Auth0")
        .dim_values()
        .row("issuer", auth0.issuer.as_str())
        .row("authorize", auth0.authorize.as_str())
        .row("token", auth0.token.as_str())
        .row("jwks", auth0.jwks.as_str())
        .row("userinfo", auth0.userinfo.as_str());

    let api = Rows::titled("Drinks API").rows(routes.into_iter().map(|route| {
        let permission = route.permission.map_or("public".to_string(), |p| p.to_string());
        (format!("{} {}", route.method, route.url), format!("({permission})"))
    }));

    tenant.print();
    println!();
    api.print();
    Ok(())
}
