use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

/// Main CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a starter configuration file with both environment tables
    Init {
        /// Where to write the file (defaults to --config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the resolved configuration for the selected environment
    Show,

    /// Check the selected environment's configuration and report the first invalid field
    Validate,

    /// Print a single configuration value
    Get {
        /// Key such as `apiServerUrl` or `auth0.client_id`
        key: String,
    },

    /// Print the Auth0 login URL
    LoginUrl {
        /// Use the authorization-code flow with PKCE instead of the implicit flow
        #[arg(long)]
        code: bool,

        /// Path appended to the configured callback URL
        #[arg(long, default_value = "")]
        path: String,

        /// Fixed CSRF state value (random when omitted)
        #[arg(long)]
        state: Option<String>,
    },

    /// Print the Auth0 logout URL
    LogoutUrl {
        /// Where Auth0 sends the browser after logout
        #[arg(long)]
        return_to: String,
    },

    /// List Auth0 and drinks API endpoints derived from the configuration
    Endpoints,

    /// Emit the configuration in the form injected into the client bundle
    Bundle {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = BundleFormat::Module)]
        format: BundleFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Transport formats for the `bundle` command
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum BundleFormat {
    /// Plain JSON object
    Json,
    /// ES module exporting `environment`
    Module,
}
