//! Development defaults and naming constants
//!
//! These values are compiled into the binary so a local checkout runs against
//! the local drinks API without any configuration file. There are no
//! production defaults: production values must come from deployment
//! configuration.

/// Base URL of the drinks API during local development
pub const DEV_API_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Auth0 tenant domain used for development
pub const DEV_AUTH0_URL: &str = "test-alanoud.us.auth0.com";

/// Auth0 API identifier that issued tokens must target
pub const DEV_AUTH0_AUDIENCE: &str = "drinks";

/// Auth0 client ID of the development front-end application
pub const DEV_AUTH0_CLIENT_ID: &str = "3Hd4Of7KRQq5biFW1y3glQ8A5WhZ4Rn2";

/// Redirect target Auth0 returns to after a development login
pub const DEV_AUTH0_CALLBACK_URL: &str = "https://127.0.0.1:8080/login-results";

/// Configuration file read when no explicit path is given
pub const DEFAULT_CONFIG_FILE: &str = "coffee-shop.toml";

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "COFFEE_SHOP_";

/// Environment variable selecting the active environment
pub const ENV_SELECTOR: &str = "COFFEE_SHOP_ENV";
