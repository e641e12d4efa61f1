//! Copies the optional project files into the bundle.

use crate::bundler::{ErrorExt, Result, Settings, utils::fs};
use crate::cli::RuntimeConfig;
use std::path::PathBuf;

/// Top-level files copied when present.
pub const ASSET_FILES: [&str; 4] = ["README.md", "README_en.md", "LICENSE", "interface.json"];

/// Directories merged into the bundle when present.
pub const ASSET_DIRS: [&str; 3] = ["assets", "resource", "lang"];

/// Whether a copied asset was a single file or a directory tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Single file.
    File,
    /// Directory tree.
    Directory,
}

/// An asset that was copied into the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedAsset {
    /// File or directory.
    pub kind: AssetKind,
    /// Name relative to the source directory.
    pub name: &'static str,
    /// Destination inside the bundle.
    pub destination: PathBuf,
}

/// Copies every asset candidate that exists in the source directory.
///
/// Missing candidates are skipped without error. A file candidate that exists
/// but is not a regular file fails the run; a directory candidate that is not
/// a directory is skipped. Any other failure to inspect a candidate, such as
/// permission denied, is an error rather than a skip.
pub async fn copy_assets(
    settings: &Settings,
    runtime_config: &RuntimeConfig,
) -> Result<Vec<CopiedAsset>> {
    let source_dir = settings.source_directory();
    let output_dir = settings.output_directory();
    let mut copied = Vec::new();

    for name in ASSET_FILES {
        let src = source_dir.join(name);
        let exists = tokio::fs::try_exists(&src)
            .await
            .fs_context("checking asset file", &src)?;
        if !exists {
            log::debug!("Skipping missing file {}", src.display());
            continue;
        }

        let dst = output_dir.join(name);
        fs::copy_file(&src, &dst).await?;
        runtime_config.progress(&format!("复制文件: {} -> {}", name, dst.display()))?;
        copied.push(CopiedAsset {
            kind: AssetKind::File,
            name,
            destination: dst,
        });
    }

    for name in ASSET_DIRS {
        let src = source_dir.join(name);
        let is_dir = fs::metadata_if_exists(&src)
            .await?
            .is_some_and(|metadata| metadata.is_dir());
        if !is_dir {
            log::debug!("Skipping missing directory {}", src.display());
            continue;
        }

        let dst = output_dir.join(name);
        fs::copy_dir(&src, &dst).await?;
        runtime_config.progress(&format!("复制目录: {} -> {}", name, dst.display()))?;
        copied.push(CopiedAsset {
            kind: AssetKind::Directory,
            name,
            destination: dst,
        });
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::SettingsBuilder;

    fn settings_for(root: &std::path::Path) -> Settings {
        let output = root.join("install");
        std::fs::create_dir(&output).unwrap();
        SettingsBuilder::new()
            .source_directory(root)
            .output_directory(output)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn copies_only_present_candidates() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("LICENSE"), "MIT").unwrap();
        std::fs::create_dir_all(tmp.path().join("lang").join("en")).unwrap();
        std::fs::write(tmp.path().join("lang").join("en").join("ui.json"), "{}").unwrap();
        let settings = settings_for(tmp.path());

        let copied = copy_assets(&settings, &RuntimeConfig::quiet()).await.unwrap();

        let names: Vec<_> = copied.iter().map(|a| (a.kind, a.name)).collect();
        assert_eq!(
            names,
            vec![(AssetKind::File, "LICENSE"), (AssetKind::Directory, "lang")]
        );
        assert!(tmp.path().join("install/lang/en/ui.json").is_file());
        assert!(!tmp.path().join("install/README.md").exists());
    }

    #[tokio::test]
    async fn file_named_like_asset_dir_is_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("assets"), "not a dir").unwrap();
        let settings = settings_for(tmp.path());

        let copied = copy_assets(&settings, &RuntimeConfig::quiet()).await.unwrap();

        assert!(copied.is_empty());
        assert!(!tmp.path().join("install/assets").exists());
    }

    #[tokio::test]
    async fn directory_named_like_asset_file_fails() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::create_dir(tmp.path().join("LICENSE")).unwrap();
        let settings = settings_for(tmp.path());

        assert!(copy_assets(&settings, &RuntimeConfig::quiet()).await.is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failed_candidate_lookup_is_an_error_not_a_skip() {
        let tmp = tempfile::tempdir().unwrap();
        let source = tmp.path().join("source");
        std::fs::write(&source, "a file where the project directory should be").unwrap();
        let output = tmp.path().join("install");
        std::fs::create_dir(&output).unwrap();
        let settings = SettingsBuilder::new()
            .source_directory(&source)
            .output_directory(&output)
            .build()
            .unwrap();

        let err = copy_assets(&settings, &RuntimeConfig::quiet()).await.unwrap_err();

        assert!(matches!(
            err,
            crate::bundler::Error::Fs { context: "checking asset file", .. }
        ));
        assert_eq!(std::fs::read_dir(&output).unwrap().count(), 0);
    }
}
