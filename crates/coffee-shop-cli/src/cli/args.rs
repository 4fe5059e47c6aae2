use crate::cli::{commands::Commands, handlers};
use crate::error::Result;
use clap::Parser;
use clap_verbosity_flag::{OffLevel, Verbosity};
use coffee_shop_config::{ConfigLoader, Environment};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Coffee Shop CLI - Environment configuration for the Coffee Shop front-end
#[derive(Parser, Debug)]
#[command(
    name = "coffee-shop",
    author = "Coffee Shop Team",
    version,
    about = "Coffee Shop CLI - Environment configuration for the Coffee Shop front-end",
    long_about = "Inspect, validate and emit the environment configuration the Coffee Shop
front-end is built against.

QUICK START:
  coffee-shop init                       # Write coffee-shop.toml
  coffee-shop validate                   # Check the development values
  coffee-shop --env production validate  # Check the production values

CONFIGURATION:
  coffee-shop show                       # Show resolved values
  coffee-shop get auth0.clientId         # Print a single value
  coffee-shop endpoints                  # Auth0 and drinks API URLs
  coffee-shop login-url                  # Auth0 login link
  coffee-shop bundle -o src/environments/environment.js

Values are layered: built-in development defaults, then the config file,
then COFFEE_SHOP_* environment variables (e.g. COFFEE_SHOP_AUTH0__CLIENT_ID)."
)]
pub struct Args {
    /// Environment to load
    #[arg(short, long, global = true, env = "COFFEE_SHOP_ENV", default_value = "development")]
    pub env: Environment,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "coffee-shop.toml")]
    pub config: PathBuf,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(flatten)]
    pub verbosity: Verbosity<OffLevel>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Args {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        let config_path = expand_tilde(&self.config);
        let loader = ConfigLoader::new(self.env).with_file(&config_path);
        debug!(environment = %self.env, "Using configuration file {}", config_path.display());

        match self.command {
            Commands::Init { output, force } => {
                let target = output.map(|p| expand_tilde(&p)).unwrap_or(config_path);
                handlers::init::handle_init(&target, force).await
            }
            Commands::Show => handlers::config::handle_show(&loader.load()?, self.json),
            Commands::Validate => handlers::config::handle_validate(&loader, self.json),
            Commands::Get { key } => handlers::config::handle_get(&loader.load()?, &key),
            Commands::LoginUrl { code, path, state } => {
                handlers::auth::handle_login_url(&loader.load()?, code, path, state, self.json)
            }
            Commands::LogoutUrl { return_to } => {
                handlers::auth::handle_logout_url(&loader.load()?, &return_to, self.json)
            }
            Commands::Endpoints => {
                handlers::endpoints::handle_endpoints(&loader.load()?, self.json)
            }
            Commands::Bundle { format, output } => {
                let output = output.map(|p| expand_tilde(&p));
                handlers::bundle::handle_bundle(&loader.load()?, format, output.as_deref()).await
            }
        }
    }
}

/// Expand tilde (~) in file paths to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(path_str) => PathBuf::from(shellexpand::tilde(path_str).as_ref()),
        None => path.to_path_buf(),
    }
}
