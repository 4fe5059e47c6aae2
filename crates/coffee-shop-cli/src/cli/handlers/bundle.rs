//! Handler for `bundle`

use crate::cli::commands::BundleFormat;
use crate::error::Result;
use crate::output::{display_path, status, Status};
use coffee_shop_config::{bundle, EnvironmentConfig};
use std::path::Path;
use tracing::info;

/// Render the configuration in the requested transport format
pub fn render(config: &EnvironmentConfig, format: BundleFormat) -> Result<String> {
    let rendered = match format {
        BundleFormat::Json => {
            let mut json = bundle::to_json(config)?;
            json.push('\n');
            json
        }
        BundleFormat::Module => bundle::to_module(config)?,
    };
    Ok(rendered)
}

pub async fn handle_bundle(
    config: &EnvironmentConfig,
    format: BundleFormat,
    output: Option<&Path>,
) -> Result<()> {
    let rendered = render(config, format)?;

    let Some(path) = output else {
        print!("{rendered}");
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, rendered).await?;

    info!(environment = %config.environment(), "Bundle written to {}", path.display());
    status(
        Status::Done,
        &format!(
            "Wrote {} configuration to {}",
            config.environment(),
            display_path(path)
        ),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_formats() {
        let config = EnvironmentConfig::development();
        let json = render(&config, BundleFormat::Json).unwrap();
        assert_eq!(bundle::from_json(&json).unwrap(), config);

        let module = render(&config, BundleFormat::Module).unwrap();
        assert!(module.starts_with("export const environment = "));
    }

    #[tokio::test]
    async fn test_bundle_written_to_nested_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("src").join("environments").join("environment.json");

        handle_bundle(&EnvironmentConfig::development(), BundleFormat::Json, Some(&path))
            .await
            .unwrap();

        let written = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(
            bundle::from_json(&written).unwrap(),
            EnvironmentConfig::development()
        );
    }
}
