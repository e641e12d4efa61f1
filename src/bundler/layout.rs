//! Bundle directory preparation.

use crate::bundler::{Result, Settings, utils::fs};
use crate::cli::RuntimeConfig;
use std::path::PathBuf;

/// Wipes and recreates the bundle directory.
///
/// Anything left from a previous run is removed first, so the directory is
/// always empty afterwards. Fails if the path exists but cannot be removed
/// (e.g. it is a regular file) or its parent is missing.
pub async fn prepare_output_directory(
    settings: &Settings,
    runtime_config: &RuntimeConfig,
) -> Result<PathBuf> {
    let output_dir = settings.output_directory().to_path_buf();
    log::debug!("Recreating bundle directory {}", output_dir.display());

    fs::create_dir(&output_dir, true).await?;

    runtime_config.progress(&format!("创建安装目录: {}", output_dir.display()))?;
    Ok(output_dir)
}
