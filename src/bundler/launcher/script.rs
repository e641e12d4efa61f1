//! Launcher script rendering.
//!
//! Renders the launcher templates with Handlebars. Escaping is disabled since
//! the output is shell/batch text, not HTML.

use super::template::{START_BAT_TEMPLATE, START_SH_TEMPLATE};
use crate::bundler::{
    error::{Error, Result},
    settings::Settings,
};
use handlebars::Handlebars;
use std::collections::BTreeMap;

/// Target platform of a launcher script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherKind {
    /// `start.bat`
    Windows,
    /// `start.sh`
    Unix,
}

impl LauncherKind {
    /// File name inside the bundle.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Windows => "start.bat",
            Self::Unix => "start.sh",
        }
    }

    fn template(self) -> &'static str {
        match self {
            Self::Windows => START_BAT_TEMPLATE,
            Self::Unix => START_SH_TEMPLATE,
        }
    }
}

/// Renders the launcher script for `kind`.
pub fn render_launcher(settings: &Settings, kind: LauncherKind) -> Result<String> {
    let mut data = BTreeMap::new();
    data.insert("product_name", settings.product_name());
    data.insert("binary_name", settings.binary_name());

    render_script(kind.file_name(), kind.template(), &data)
}

/// Strict mode: a placeholder without data is an error, not an empty string.
fn render_script(name: &str, template: &str, data: &BTreeMap<&str, &str>) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.set_strict_mode(true);

    handlebars
        .register_template_string(name, template)
        .map_err(|e| Error::GenericError(format!("failed to register {} template: {}", name, e)))?;

    handlebars
        .render(name, data)
        .map_err(|e| Error::GenericError(format!("failed to render {}: {}", name, e)))
}
