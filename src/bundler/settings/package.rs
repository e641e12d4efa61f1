//! Product metadata stamped into generated files.

/// Version label used when the caller supplies none.
pub const DEFAULT_VERSION: &str = "unknown";

/// Product metadata used across the bundle stages.
///
/// The defaults describe MFAAvalonia; only `version` normally varies between
/// runs.
///
/// # Examples
///
/// ```no_run
/// use mfa_bundler_install::bundler::PackageSettings;
///
/// let settings = PackageSettings {
///     version: "v2.3.1".into(),
///     ..Default::default()
/// };
/// assert_eq!(settings.product_name, "MFAAvalonia");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSettings {
    /// Product name shown in launch messages and the usage guide heading.
    pub product_name: String,

    /// Executable name the launchers look for, without extension.
    pub binary_name: String,

    /// Opaque version label, e.g. "v2.3.1". Never parsed.
    pub version: String,

    /// Project homepage; the issue tracker is `<homepage>/issues`.
    pub homepage: String,
}

impl Default for PackageSettings {
    fn default() -> Self {
        Self {
            product_name: "MFAAvalonia".into(),
            binary_name: "MFAAvalonia".into(),
            version: DEFAULT_VERSION.into(),
            homepage: "https://github.com/Yibael/MFAAvalonia".into(),
        }
    }
}
