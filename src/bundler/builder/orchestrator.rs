//! Main bundler orchestration.
//!
//! This module provides the [`Bundler`] orchestrator that runs the bundle
//! stages in order.

use crate::bundler::{
    Result, Settings,
    assets::{self, CopiedAsset},
    guide,
    interface::{self, InterfaceSource},
    launcher, layout,
    report::{self, BundleEntry},
};
use crate::cli::RuntimeConfig;
use path_absolutize::Absolutize;
use std::path::PathBuf;

/// Outcome of a successful bundle run.
#[derive(Debug, Clone)]
pub struct BundleReport {
    /// Absolute path of the bundle directory.
    pub output_directory: PathBuf,
    /// Assets copied from the source directory, files first.
    pub assets: Vec<CopiedAsset>,
    /// Whether `interface.json` was copied or generated.
    pub interface: InterfaceSource,
    /// `start.bat` and `start.sh`.
    pub launchers: Vec<PathBuf>,
    /// The usage guide.
    pub guide: PathBuf,
    /// Immediate children of the bundle directory, sorted by name.
    pub entries: Vec<BundleEntry>,
}

/// Main bundler orchestrator.
///
/// Runs the stages strictly in sequence; each one depends on the previous
/// stage having completed:
///
/// 1. Recreate the bundle directory
/// 2. Copy the optional assets
/// 3. Generate `interface.json` if none was copied
/// 4. Write the launcher scripts
/// 5. Write the usage guide
/// 6. List the result
///
/// The first failing stage aborts the run. Nothing is rolled back, so a
/// failed run may leave a partial bundle behind.
///
/// # Examples
///
/// ```no_run
/// use mfa_bundler_install::bundler::{Bundler, SettingsBuilder};
/// use mfa_bundler_install::cli::RuntimeConfig;
///
/// # async fn example() -> mfa_bundler_install::bundler::Result<()> {
/// let settings = SettingsBuilder::new().version("v2.3.1").build()?;
/// let report = Bundler::new(settings).bundle(&RuntimeConfig::quiet()).await?;
///
/// for entry in &report.entries {
///     println!("{} {}", entry.marker(), entry.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler {
    settings: Settings,
}

impl Bundler {
    /// Creates a new bundler with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Assembles the bundle.
    pub async fn bundle(&self, runtime_config: &RuntimeConfig) -> Result<BundleReport> {
        log::info!(
            "Bundling {} {} into {}",
            self.settings.product_name(),
            self.settings.version_string(),
            self.settings.output_directory().display()
        );

        let output_dir = layout::prepare_output_directory(&self.settings, runtime_config).await?;
        let assets = assets::copy_assets(&self.settings, runtime_config).await?;
        let interface = interface::ensure_interface(&self.settings, runtime_config).await?;
        let launchers = launcher::emit_launchers(&self.settings, runtime_config).await?;
        let guide = guide::write_guide(&self.settings, runtime_config).await?;
        let entries = report::list_entries(&output_dir).await?;

        let output_directory = output_dir.absolutize()?.into_owned();
        log::info!("✓ Bundle ready: {}", output_directory.display());

        Ok(BundleReport {
            output_directory,
            assets,
            interface,
            launchers,
            guide,
            entries,
        })
    }

    /// Returns a reference to the bundler settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
