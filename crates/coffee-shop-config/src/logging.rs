//! Logging setup shared by Coffee Shop binaries
//!
//! The filter comes from the first of these that is present:
//! 1. `-v`/`-q` on the command line
//! 2. `RUST_LOG`
//! 3. the directive the binary passes as its default

use anyhow::Result;
use clap_verbosity_flag::{LogLevel, Verbosity};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Where the active filter directive was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSource {
    Flags,
    RustLog,
    Default,
}

/// Resolve the filter for the given verbosity, falling back to `RUST_LOG`
/// and then to `default_filter`.
pub fn filter_for<L: LogLevel>(
    verbosity: &Verbosity<L>,
    default_filter: &str,
) -> Result<(EnvFilter, FilterSource)> {
    if let Some(level) = verbosity.log_level() {
        return Ok((EnvFilter::try_new(level.to_string())?, FilterSource::Flags));
    }
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok((filter, FilterSource::RustLog)),
        Err(_) => Ok((EnvFilter::try_new(default_filter)?, FilterSource::Default)),
    }
}

/// Install a stderr subscriber filtered by [`filter_for`].
///
/// ```no_run
/// use clap::Parser;
/// use clap_verbosity_flag::{InfoLevel, Verbosity};
/// use coffee_shop_config::logging;
///
/// #[derive(Parser)]
/// struct Args {
///     #[command(flatten)]
///     verbosity: Verbosity<InfoLevel>,
/// }
///
/// let args = Args::parse();
/// logging::init_logging(&args.verbosity, "coffee_shop=info").unwrap();
/// ```
pub fn init_logging<L: LogLevel>(verbosity: &Verbosity<L>, default_filter: &str) -> Result<()> {
    let (filter, source) = filter_for(verbosity, default_filter)?;
    let directive = filter.to_string();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()?;

    tracing::debug!(?source, %directive, "Logging initialized");
    Ok(())
}

/// Install logging only when `-v` or `RUST_LOG` asks for it, so a plain CLI
/// run prints nothing but its own output.
///
/// Returns `true` if a subscriber was installed.
pub fn init_cli_logging<L: LogLevel>(
    verbosity: &Verbosity<L>,
    default_filter: &str,
) -> Result<bool> {
    if verbosity.log_level().is_none() && std::env::var_os("RUST_LOG").is_none() {
        return Ok(false);
    }
    init_logging(verbosity, default_filter)?;
    Ok(true)
}
