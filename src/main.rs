//! MFAAvalonia installer - assembles the distributable install bundle.
//!
//! Usage: `mfa_install [VERSION]`. Exit code 0 means the bundle in `install/`
//! is complete; any failure prints one diagnostic line and exits 1.

use mfa_bundler_install::cli::{self, OutputManager};
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            let message = format!("安装过程中出现错误: {}", e);
            if OutputManager::new(false).error(&message).is_err() {
                println!("❌ {}", message);
            }
            e.exit_code()
        }
    };

    process::exit(exit_code);
}
