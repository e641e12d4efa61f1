//! Usage guide shipped inside the bundle.

mod template;

use crate::bundler::{
    error::{Error, ErrorExt, Result},
    settings::Settings,
};
use crate::cli::RuntimeConfig;
use handlebars::Handlebars;
use std::{collections::BTreeMap, path::PathBuf};
use template::GUIDE_TEMPLATE;

/// Renders the usage guide.
///
/// The footer's build time carries the version label rather than a clock
/// reading, so rebuilding the same version yields identical bytes.
pub fn render_guide(settings: &Settings) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.set_strict_mode(true);

    let mut data = BTreeMap::new();
    data.insert("product_name", settings.product_name());
    data.insert("binary_name", settings.binary_name());
    data.insert("version", settings.version_string());
    data.insert("homepage", settings.homepage());
    data.insert("build_time", settings.version_string());

    handlebars
        .register_template_string("guide", GUIDE_TEMPLATE)
        .map_err(|e| Error::GenericError(format!("failed to register guide template: {}", e)))?;

    handlebars
        .render("guide", &data)
        .map_err(|e| Error::GenericError(format!("failed to render usage guide: {}", e)))
}

/// Writes the usage guide into the bundle.
pub async fn write_guide(settings: &Settings, runtime_config: &RuntimeConfig) -> Result<PathBuf> {
    let content = render_guide(settings)?;
    let path = settings.guide_path();

    tokio::fs::write(&path, content)
        .await
        .fs_context("writing usage guide", &path)?;

    runtime_config.progress("创建使用说明完成")?;
    Ok(path)
}
