//! Handler for `init`

use crate::error::{CliError, Result};
use crate::output::{display_path, status, Status};
use coffee_shop_config::ConfigLoader;
use std::path::Path;
use tracing::debug;

pub async fn handle_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::invalid_argument(format!(
            "{} already exists, pass --force to overwrite",
            display_path(path)
        )));
    }

    let contents = ConfigLoader::example_toml()?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, contents).await?;
    debug!("Example configuration written to {}", path.display());

    status(Status::Done, &format!("Configuration written to {}", display_path(path)));
    status(Status::Note, "Fill in the [production] table before building for production");
    Ok(())
}
