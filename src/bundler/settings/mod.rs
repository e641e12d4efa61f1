//! Configuration structures for a bundle run.
//!
//! Product metadata plus the source and output directories, assembled through
//! a builder.

mod builder;
mod core;
mod package;

pub use builder::{DEFAULT_OUTPUT_DIRECTORY, SettingsBuilder};
pub use core::{GUIDE_FILE_NAME, INTERFACE_FILE_NAME, Settings};
pub use package::{DEFAULT_VERSION, PackageSettings};
