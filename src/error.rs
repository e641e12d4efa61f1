//! Top-level error type for the installer.
//!
//! Everything that can go wrong during a run ends up here and is reported by
//! `main` as a single diagnostic line.

use thiserror::Error;

/// Result type alias for installer operations
pub type Result<T> = std::result::Result<T, InstallError>;

/// Main error type for a bundle run
#[derive(Error, Debug)]
pub enum InstallError {
    /// Bundle assembly failed
    #[error("{0}")]
    Bundler(#[from] crate::bundler::Error),

    /// Command line could not be parsed
    #[error("{0}")]
    Cli(#[from] clap::Error),

    /// Console output or other IO failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl InstallError {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
