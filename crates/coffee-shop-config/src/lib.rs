//! # Coffee Shop Environment Configuration
//!
//! The single, immutable set of deployment-specific values the Coffee Shop
//! front-end is built against: the drinks API base URL, the Auth0 tenant
//! settings and the production flag.
//!
//! ## Architecture
//!
//! - [`ConfigLoader`] layers built-in defaults, a TOML file with one table per
//!   environment and `COFFEE_SHOP_` environment variables, then selects exactly
//!   one [`Environment`] profile
//! - [`EnvironmentConfig`] can only exist in a validated state; there are no
//!   setters, consumers receive `&EnvironmentConfig` or an `Arc` of it
//! - [`bundle`] renders the record into the shape injected into client bundles
//! - [`auth0`] and [`api`] derive the URLs consumers build from the record

pub mod api;
pub mod auth0;
pub mod bundle;
pub mod defaults;
pub mod environment;
pub mod error;
pub mod loader;
pub mod logging;
pub mod record;
pub mod validation;

pub use environment::Environment;
pub use error::{ConfigurationError, Result};
pub use loader::ConfigLoader;
pub use record::{Auth0Config, EnvironmentConfig, RawEnvironmentConfig};
