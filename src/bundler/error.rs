//! Error types for bundle assembly.
//!
//! Filesystem failures carry the operation and the path they happened on so the
//! single top-level diagnostic line is enough to locate the problem.

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Result type alias for bundler operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while assembling the install bundle.
#[derive(Debug, Error)]
pub enum Error {
    /// Filesystem operation failed on a specific path.
    #[error("{context} `{}`: {source}", .path.display())]
    Fs {
        /// What was being done, e.g. "copying asset file".
        context: &'static str,
        /// Path the operation targeted.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },

    /// IO error without path information.
    #[error("{0}")]
    IoError(#[from] io::Error),

    /// Serializing interface.json failed.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Walking a source directory failed.
    #[error("{0}")]
    WalkdirError(#[from] walkdir::Error),

    /// A walked entry was not under its root.
    #[error("{0}")]
    StripPrefixError(#[from] std::path::StripPrefixError),

    /// Anything else, usually raised through [`bail!`](crate::bail).
    #[error("{0}")]
    GenericError(String),
}

/// Attaches operation and path information to IO results.
pub trait ErrorExt<T> {
    /// Wraps an `io::Error` into [`Error::Fs`].
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Converts optional values and foreign errors into [`Error::GenericError`].
pub trait Context<T> {
    /// Adds a message describing what was expected.
    fn context<C: Display>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}

impl<T, E: Display> Context<T> for std::result::Result<T, E> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{context}: {e}")))
    }
}

/// Returns early with [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_context_names_operation_and_path() {
        let err: Result<()> = Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
            .fs_context("creating install directory", "install");

        let message = err.unwrap_err().to_string();
        assert_eq!(message, "creating install directory `install`: denied");
    }

    #[test]
    fn option_context_becomes_generic_error() {
        let missing: Option<u8> = None;
        let err = missing.context("no file name").unwrap_err();
        assert!(matches!(err, Error::GenericError(ref m) if m == "no file name"));
    }

    #[test]
    fn bail_formats_message() {
        fn fails(name: &str) -> Result<()> {
            crate::bail!("{name} is not a file");
        }

        assert_eq!(fails("LICENSE").unwrap_err().to_string(), "LICENSE is not a file");
    }
}
