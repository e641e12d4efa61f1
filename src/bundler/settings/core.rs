//! Core Settings struct and implementations.

use super::PackageSettings;
use std::path::{Path, PathBuf};

/// Name of the configuration document inside the bundle.
pub const INTERFACE_FILE_NAME: &str = "interface.json";

/// Name of the usage guide inside the bundle.
pub const GUIDE_FILE_NAME: &str = "使用说明.txt";

/// Main settings for a bundle run.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder).
///
/// # Examples
///
/// ```no_run
/// use mfa_bundler_install::bundler::SettingsBuilder;
///
/// # fn example() -> mfa_bundler_install::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .version("v2.3.1")
///     .output_directory("dist/install")
///     .build()?;
/// assert!(settings.interface_path().ends_with("interface.json"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    /// Product metadata.
    package: PackageSettings,

    /// Directory the optional assets are read from.
    source_directory: PathBuf,

    /// Bundle directory, wiped and recreated on every run.
    output_directory: PathBuf,
}

impl Settings {
    pub(super) fn new(
        package: PackageSettings,
        source_directory: PathBuf,
        output_directory: PathBuf,
    ) -> Self {
        Self {
            package,
            source_directory,
            output_directory,
        }
    }

    /// Returns the product name.
    pub fn product_name(&self) -> &str {
        &self.package.product_name
    }

    /// Returns the executable name the launchers look for.
    pub fn binary_name(&self) -> &str {
        &self.package.binary_name
    }

    /// Returns the version string.
    pub fn version_string(&self) -> &str {
        &self.package.version
    }

    /// Returns the project homepage.
    pub fn homepage(&self) -> &str {
        &self.package.homepage
    }

    /// Returns the package metadata.
    pub fn package_settings(&self) -> &PackageSettings {
        &self.package
    }

    /// Returns the directory assets are copied from.
    pub fn source_directory(&self) -> &Path {
        &self.source_directory
    }

    /// Returns the bundle directory.
    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    /// Path of `interface.json` inside the bundle.
    pub fn interface_path(&self) -> PathBuf {
        self.output_directory.join(INTERFACE_FILE_NAME)
    }

    /// Path of the usage guide inside the bundle.
    pub fn guide_path(&self) -> PathBuf {
        self.output_directory.join(GUIDE_FILE_NAME)
    }
}
