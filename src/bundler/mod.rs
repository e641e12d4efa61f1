//! Install bundle assembly.
//!
//! Builds the MFAAvalonia distribution directory in a fixed sequence of
//! stages, each in its own module:
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Directory preparation | `layout` | empty `install/` |
//! | Asset copy | `assets` | README files, LICENSE, `assets/`, `resource/`, `lang/` |
//! | Configuration default | `interface` | `interface.json` if none was copied |
//! | Launchers | `launcher` | `start.bat`, `start.sh` (0755) |
//! | Usage guide | `guide` | `使用说明.txt` |
//! | Listing | `report` | sorted bundle entries |
//!
//! [`Bundler`] runs them in order from a [`Settings`] value.

pub mod assets;
mod builder;
mod error;
pub mod guide;
pub mod interface;
pub mod launcher;
pub mod layout;
pub mod report;
mod settings;
mod utils;

pub use assets::{ASSET_DIRS, ASSET_FILES, AssetKind, CopiedAsset};
pub use builder::{BundleReport, Bundler};
pub use error::{Context, Error, ErrorExt, Result};
pub use interface::{InterfaceDocument, InterfaceSource, ResourceEntry, TaskEntry};
pub use launcher::{LauncherKind, UNIX_LAUNCHER_MODE};
pub use report::BundleEntry;
pub use settings::{
    DEFAULT_OUTPUT_DIRECTORY, DEFAULT_VERSION, GUIDE_FILE_NAME, INTERFACE_FILE_NAME,
    PackageSettings, Settings, SettingsBuilder,
};
