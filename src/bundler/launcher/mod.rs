//! Platform launcher scripts.
//!
//! Writes `start.bat` for Windows and `start.sh` for Linux/macOS next to the
//! application binary. Both are static apart from the product and binary names.
//!
//! # Module Organization
//!
//! - `template` - script template constants
//! - `script` - template rendering

mod script;
mod template;

pub use script::{LauncherKind, render_launcher};

use crate::bundler::{
    error::{ErrorExt, Result},
    settings::Settings,
    utils::fs,
};
use crate::cli::RuntimeConfig;
use std::path::PathBuf;

/// Permission bits of `start.sh`.
pub const UNIX_LAUNCHER_MODE: u32 = 0o755;

/// Writes both launcher scripts into the bundle and marks `start.sh` executable.
///
/// # Returns
///
/// Paths of the written scripts, Windows first.
pub async fn emit_launchers(
    settings: &Settings,
    runtime_config: &RuntimeConfig,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for kind in [LauncherKind::Windows, LauncherKind::Unix] {
        let content = render_launcher(settings, kind)?;
        let path = settings.output_directory().join(kind.file_name());

        tokio::fs::write(&path, content)
            .await
            .fs_context("writing launcher script", &path)?;

        if kind == LauncherKind::Unix {
            fs::set_mode(&path, UNIX_LAUNCHER_MODE).await?;
            log::debug!("Set mode {:o} on {}", UNIX_LAUNCHER_MODE, path.display());
        }

        written.push(path);
    }

    runtime_config.progress("创建启动脚本完成")?;
    Ok(written)
}
