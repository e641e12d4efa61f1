//! Command line interface for the installer.
//!
//! Parses the version argument, runs the [`Bundler`](crate::bundler::Bundler)
//! and prints the summary and bundle listing.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::bundler::{BundleReport, Bundler, SettingsBuilder};
use crate::error::Result;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args()?;
    let runtime_config = RuntimeConfig::from(&args);
    execute(&args, &runtime_config).await
}

/// Runs a bundle for already-parsed arguments.
pub async fn execute(args: &Args, runtime_config: &RuntimeConfig) -> Result<i32> {
    let version = args.release_version();
    let settings = SettingsBuilder::new().version(version.as_str()).build()?;

    runtime_config.progress(&format!(
        "开始安装 {} {}",
        settings.product_name(),
        version
    ))?;

    let bundler = Bundler::new(settings);
    let report = bundler.bundle(runtime_config).await?;

    print_summary(&bundler, &report, runtime_config)?;
    Ok(0)
}

fn print_summary(
    bundler: &Bundler,
    report: &BundleReport,
    runtime_config: &RuntimeConfig,
) -> std::io::Result<()> {
    let settings = bundler.settings();

    runtime_config.progress("")?;
    runtime_config.success(&format!(
        "{} {} 安装包准备完成!",
        settings.product_name(),
        settings.version_string()
    ))?;
    runtime_config.progress(&format!("安装目录: {}", report.output_directory.display()))?;

    runtime_config.section("📁 安装包内容:")?;
    for entry in &report.entries {
        runtime_config.indent(&format!("{} {}", entry.marker(), entry.name))?;
    }
    Ok(())
}
