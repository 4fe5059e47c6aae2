//! Main entry point for the Coffee Shop CLI

use clap::{CommandFactory, Parser};
use clap_complete::env::CompleteEnv;
use coffee_shop_cli::cli::Args;
use coffee_shop_cli::CliError;
use color_eyre::eyre::{eyre, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle shell completions first (must be before argument parsing)
    CompleteEnv::with_factory(Args::command).complete();

    let args = Args::parse();

    // Disable location display (file paths and line numbers)
    color_eyre::config::HookBuilder::default()
        .display_location_section(false)
        .display_env_section(false)
        .install()?;

    // Logging stays off unless requested with -v or RUST_LOG
    coffee_shop_config::logging::init_cli_logging(&args.verbosity, "coffee_shop=info")
        .map_err(|e| eyre!("Failed to initialize logging: {}", e))?;

    match args.run().await {
        Err(CliError::Reported(_)) => std::process::exit(1),
        result => Ok(result?),
    }
}
