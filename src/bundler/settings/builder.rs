//! Builder for constructing Settings.

use super::{PackageSettings, Settings};
use std::path::{Path, PathBuf};

/// Default bundle directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "install";

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```no_run
/// use mfa_bundler_install::bundler::SettingsBuilder;
///
/// # fn example() -> mfa_bundler_install::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .source_directory("build/publish")
///     .output_directory("build/install")
///     .version("v2.3.1")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    source_directory: Option<PathBuf>,
    output_directory: Option<PathBuf>,
    package_settings: Option<PackageSettings>,
    version: Option<String>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the directory assets are read from.
    ///
    /// Default: the current working directory
    pub fn source_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the bundle directory. It is deleted and recreated on every run,
    /// and its parent must already exist.
    ///
    /// Default: `install`
    pub fn output_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets package metadata.
    ///
    /// Default: [`PackageSettings::default`]
    pub fn package_settings(mut self, settings: PackageSettings) -> Self {
        self.package_settings = Some(settings);
        self
    }

    /// Overrides the version label of the package metadata.
    pub fn version<S: Into<String>>(mut self, version: S) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the output directory is empty or has no final
    /// component (e.g. `..`), since it could not be wiped safely.
    pub fn build(self) -> crate::bundler::Result<Settings> {
        use crate::bundler::error::Context;

        let output_directory = self
            .output_directory
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIRECTORY));
        output_directory
            .file_name()
            .context(format!(
                "output directory {:?} must name a directory",
                output_directory
            ))?;

        let mut package = self.package_settings.unwrap_or_default();
        if let Some(version) = self.version {
            package.version = version;
        }

        Ok(Settings::new(
            package,
            self.source_directory.unwrap_or_else(|| PathBuf::from(".")),
            output_directory,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_install_directory() {
        let settings = SettingsBuilder::new().build().unwrap();

        assert_eq!(settings.output_directory(), Path::new("install"));
        assert_eq!(settings.source_directory(), Path::new("."));
        assert_eq!(settings.version_string(), "unknown");
        assert_eq!(settings.product_name(), "MFAAvalonia");
        assert_eq!(settings.interface_path(), Path::new("install/interface.json"));
    }

    #[test]
    fn version_overrides_package_settings() {
        let settings = SettingsBuilder::new()
            .package_settings(PackageSettings {
                version: "v1".into(),
                ..Default::default()
            })
            .version("v2.3.1")
            .build()
            .unwrap();

        assert_eq!(settings.version_string(), "v2.3.1");
    }

    #[test]
    fn rejects_output_without_final_component() {
        assert!(SettingsBuilder::new().output_directory("..").build().is_err());
        assert!(SettingsBuilder::new().output_directory("").build().is_err());
    }
}
