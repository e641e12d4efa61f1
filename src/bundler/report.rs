//! Listing of the finished bundle.

use crate::bundler::{Result, error::ErrorExt};
use std::path::Path;

/// One immediate child of the bundle directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleEntry {
    pub name: String,
    pub is_dir: bool,
}

impl BundleEntry {
    /// Marker shown before the name in the listing.
    pub fn marker(&self) -> &'static str {
        if self.is_dir { "📁" } else { "📄" }
    }
}

/// Lists the immediate children of `dir`, sorted by name.
pub async fn list_entries(dir: &Path) -> Result<Vec<BundleEntry>> {
    let mut read_dir = tokio::fs::read_dir(dir)
        .await
        .fs_context("reading bundle directory", dir)?;

    let mut entries = Vec::new();
    while let Some(entry) = read_dir
        .next_entry()
        .await
        .fs_context("reading bundle directory entry", dir)?
    {
        // Follows symlinks, so a linked directory is listed as a directory
        let is_dir = tokio::fs::metadata(entry.path())
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false);
        entries.push((entry.file_name(), is_dir));
    }
    entries.sort();

    Ok(entries
        .into_iter()
        .map(|(name, is_dir)| BundleEntry {
            name: name.to_string_lossy().into_owned(),
            is_dir,
        })
        .collect())
}
