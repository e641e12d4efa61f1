//! Default `interface.json` generation.
//!
//! The document is only written when the asset copy did not already bring one
//! in. An existing file is never read, merged or validated.

use crate::bundler::{PackageSettings, Result, Settings, error::ErrorExt};
use crate::cli::RuntimeConfig;
use serde::{Deserialize, Serialize};

/// Configuration document describing resources and tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceDocument {
    pub name: String,
    pub version: String,
    pub url: String,
    pub custom_title: String,
    pub resource: Vec<ResourceEntry>,
    pub task: Vec<TaskEntry>,
}

/// A resource bundle the application can load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceEntry {
    pub name: String,
    pub path: String,
}

/// A task exposed in the application UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEntry {
    pub name: String,
    pub entry: String,
    pub check: bool,
    pub doc: String,
}

impl InterfaceDocument {
    /// Starter document with one placeholder resource and one example task.
    pub fn default_for(package: &PackageSettings) -> Self {
        Self {
            name: package.product_name.clone(),
            version: "1.0.0".into(),
            url: package.homepage.clone(),
            custom_title: package.product_name.clone(),
            resource: vec![ResourceEntry {
                name: "默认资源".into(),
                path: "{PROJECT_DIR}/resource".into(),
            }],
            task: vec![TaskEntry {
                name: "示例任务".into(),
                entry: "ExampleTask".into(),
                check: false,
                doc: "这是一个示例任务，请根据实际需求修改 interface.json".into(),
            }],
        }
    }

    /// Pretty JSON with two-space indentation and literal non-ASCII text.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// How `interface.json` ended up in the bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceSource {
    /// Copied from the source directory.
    Copied,
    /// Generated from [`InterfaceDocument::default_for`].
    Generated,
}

/// Writes the default document unless the bundle already has one.
pub async fn ensure_interface(
    settings: &Settings,
    runtime_config: &RuntimeConfig,
) -> Result<InterfaceSource> {
    let path = settings.interface_path();
    if tokio::fs::try_exists(&path)
        .await
        .fs_context("checking for interface.json", &path)?
    {
        log::debug!("Keeping copied {}", path.display());
        return Ok(InterfaceSource::Copied);
    }

    let json = InterfaceDocument::default_for(settings.package_settings()).to_json()?;
    tokio::fs::write(&path, json)
        .await
        .fs_context("writing default interface.json", &path)?;

    runtime_config.progress(&format!("创建默认 interface.json: {}", path.display()))?;
    Ok(InterfaceSource::Generated)
}
