//! MFAAvalonia install bundle assembler
//!
//! This library assembles the distributable `install/` directory after a build:
//! - copies README files, LICENSE and the asset directories
//! - writes a default `interface.json` when none is shipped
//! - emits `start.bat` / `start.sh` launchers
//! - writes the Chinese usage guide
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{InstallError, Result};
