//! Command line argument parsing.
//!
//! The tool takes a single optional positional argument; everything else about
//! the bundle is fixed. The first argument is the version label whatever it
//! looks like (`--version`, `-rc1`), and anything after it is ignored, so there
//! are no flags at all.

use crate::bundler::DEFAULT_VERSION;
use crate::error::Result;
use clap::Parser;
use std::ffi::OsString;

/// MFAAvalonia install bundle assembler
#[derive(Parser, Debug)]
#[command(
    name = "mfa_install",
    disable_help_flag = true,
    disable_version_flag = true,
    about = "Assembles the MFAAvalonia install bundle",
    long_about = "Assembles the MFAAvalonia install bundle in ./install.

Copies README.md, README_en.md, LICENSE, interface.json and the assets/,
resource/ and lang/ directories from the current directory when present,
writes a default interface.json if none was copied, and emits start.bat,
start.sh and the usage guide.

Usage:
  mfa_install v2.3.1
  mfa_install

Exit code 0 = bundle complete. Exit code 1 = a step failed; the bundle may be partial."
)]
pub struct Args {
    /// Version label written into the usage guide; later arguments are ignored
    #[arg(
        value_name = "VERSION",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    values: Vec<OsString>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Result<Self> {
        Ok(Self::try_parse()?)
    }

    /// Version label: the first argument verbatim, or `unknown` when absent.
    pub fn release_version(&self) -> String {
        self.values
            .first()
            .map(|value| value.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_VERSION.to_string())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(_args: &Args) -> Self {
        Self::new(super::OutputManager::new(false))
    }
}

impl RuntimeConfig {
    /// Creates a runtime configuration around an output manager.
    pub fn new(output: super::OutputManager) -> Self {
        Self { output }
    }

    /// Runtime configuration that prints nothing, for library callers and tests.
    pub fn quiet() -> Self {
        Self::new(super::OutputManager::silent())
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print progress message
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }
}
