//! File system utilities for bundling.
//!
//! Provides file operations with metadata preservation and path-aware error
//! reporting.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::{
    fs::{File, FileTimes},
    io,
    path::Path,
};
use tokio::fs;

/// Creates the given directory path, erasing it first if specified.
///
/// Only the last component is created; a missing parent is an error.
pub async fn create_dir(path: &Path, erase: bool) -> Result<()> {
    if erase {
        // Try removal, ignore NotFound (idempotent)
        match fs::remove_dir_all(path).await {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(Error::Fs {
                    context: "removing previous bundle directory",
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        }
    }

    match fs::create_dir(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(Error::Fs {
            context: "creating bundle directory",
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Copies a regular file, preserving permission bits and access/modification times.
///
/// Fails if the source path is a directory or doesn't exist.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    let metadata = fs::metadata(from)
        .await
        .fs_context("reading source metadata", from)?;
    if !metadata.is_file() {
        crate::bail!("{from:?} is not a file");
    }

    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir)
            .await
            .fs_context("creating destination directory", dest_dir)?;
    }
    fs::copy(from, to).await.fs_context("copying file", from)?;

    let (from, to) = (from.to_path_buf(), to.to_path_buf());
    tokio::task::spawn_blocking(move || copy_times(&from, &to).fs_context("preserving file times", &to))
        .await
        .map_err(|e| Error::GenericError(format!("File time copy task panicked: {}", e)))?
}

/// Recursively merges a directory into another, creating the destination as needed.
///
/// Existing destination files are overwritten, entries only present at the
/// destination are left alone. Symbolic links are followed and their targets
/// copied. Copied directories get the permission bits and times of their
/// source once their contents are in place.
pub async fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    if !from.is_dir() {
        crate::bail!("{from:?} is not a directory");
    }

    let from = from.to_path_buf();
    let to = to.to_path_buf();

    tokio::task::spawn_blocking(move || {
        let mut dirs = Vec::new();
        for entry in walkdir::WalkDir::new(&from).follow_links(true) {
            let entry = entry?;
            let rel_path = entry.path().strip_prefix(&from)?;
            let dest_path = to.join(rel_path);

            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&dest_path)
                    .fs_context("creating directory", &dest_path)?;
                dirs.push((entry.into_path(), dest_path));
            } else {
                std::fs::copy(entry.path(), &dest_path).fs_context("copying file", entry.path())?;
                copy_times(entry.path(), &dest_path).fs_context("preserving file times", &dest_path)?;
            }
        }

        // Deepest first: writing into a directory bumps its mtime
        for (src_dir, dest_dir) in dirs.iter().rev() {
            copy_dir_stat(src_dir, dest_dir)
                .fs_context("preserving directory metadata", dest_dir)?;
        }

        Ok(())
    })
    .await
    .map_err(|e| Error::GenericError(format!("Directory copy task panicked: {}", e)))?
}

/// Returns the metadata of `path`, or `None` if nothing exists there.
///
/// Errors other than "not found" (permission denied, a file used as a parent
/// directory) are reported instead of being treated as absence.
pub async fn metadata_if_exists(path: &Path) -> Result<Option<std::fs::Metadata>> {
    match fs::metadata(path).await {
        Ok(metadata) => Ok(Some(metadata)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::Fs {
            context: "reading source metadata",
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Sets the permission bits of a file, e.g. `0o755` for scripts.
///
/// No-op on platforms without Unix permissions.
pub async fn set_mode(path: &Path, mode: u32) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
            .await
            .fs_context("setting file permissions", path)?;
    }
    #[cfg(not(unix))]
    {
        log::debug!("Skipping mode {:o} on {}: not a Unix host", mode, path.display());
    }
    Ok(())
}

fn copy_dir_stat(from: &Path, to: &Path) -> io::Result<()> {
    std::fs::set_permissions(to, std::fs::metadata(from)?.permissions())?;
    copy_times(from, to)
}

fn copy_times(from: &Path, to: &Path) -> io::Result<()> {
    let metadata = std::fs::metadata(from)?;
    let times = FileTimes::new()
        .set_accessed(metadata.accessed()?)
        .set_modified(metadata.modified()?);

    // futimens only needs ownership, so read-only copies stay settable
    #[cfg(unix)]
    let file = File::open(to)?;
    // Attribute access alone works on read-only files and, with backup
    // semantics, on directories
    #[cfg(windows)]
    let file = {
        use std::os::windows::fs::OpenOptionsExt;
        const FILE_WRITE_ATTRIBUTES: u32 = 0x0100;
        const FILE_FLAG_BACKUP_SEMANTICS: u32 = 0x0200_0000;
        File::options()
            .access_mode(FILE_WRITE_ATTRIBUTES)
            .custom_flags(FILE_FLAG_BACKUP_SEMANTICS)
            .open(to)?
    };
    #[cfg(not(any(unix, windows)))]
    let file = File::options().write(true).open(to)?;

    file.set_times(times)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_dir_erases_previous_contents() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("install");
        std::fs::create_dir(&dir).unwrap();
        std::fs::write(dir.join("stale.txt"), "old").unwrap();

        create_dir(&dir, true).await.unwrap();

        assert!(dir.is_dir());
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn create_dir_requires_parent() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("missing").join("install");

        let err = create_dir(&dir, true).await.unwrap_err();
        assert!(matches!(err, Error::Fs { context: "creating bundle directory", .. }));
    }

    #[tokio::test]
    async fn copy_file_keeps_modification_time() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("LICENSE");
        let dst = tmp.path().join("out").join("LICENSE");
        std::fs::write(&src, "MIT").unwrap();
        let past = std::time::SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(1_000_000);
        File::options()
            .write(true)
            .open(&src)
            .unwrap()
            .set_modified(past)
            .unwrap();

        copy_file(&src, &dst).await.unwrap();

        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "MIT");
        assert_eq!(std::fs::metadata(&dst).unwrap().modified().unwrap(), past);
    }

    #[tokio::test]
    async fn copy_file_keeps_read_only_flag_and_times() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("LICENSE");
        let dst = tmp.path().join("out").join("LICENSE");
        std::fs::write(&src, "MIT").unwrap();
        let past = std::time::SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(2_000_000);
        File::options()
            .write(true)
            .open(&src)
            .unwrap()
            .set_modified(past)
            .unwrap();
        let mut permissions = std::fs::metadata(&src).unwrap().permissions();
        permissions.set_readonly(true);
        std::fs::set_permissions(&src, permissions).unwrap();

        copy_file(&src, &dst).await.unwrap();

        let copied = std::fs::metadata(&dst).unwrap();
        assert!(copied.permissions().readonly());
        assert_eq!(copied.modified().unwrap(), past);

        for path in [&src, &dst] {
            let mut permissions = std::fs::metadata(path).unwrap().permissions();
            permissions.set_readonly(false);
            std::fs::set_permissions(path, permissions).unwrap();
        }
    }

    #[tokio::test]
    async fn copy_file_rejects_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let err = copy_file(tmp.path(), &tmp.path().join("copy")).await.unwrap_err();
        assert!(err.to_string().contains("is not a file"));
    }

    #[tokio::test]
    async fn copy_dir_merges_and_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("lang");
        let dst = tmp.path().join("install").join("lang");
        std::fs::create_dir_all(src.join("zh")).unwrap();
        std::fs::write(src.join("zh").join("strings.json"), "new").unwrap();
        std::fs::create_dir_all(dst.join("zh")).unwrap();
        std::fs::write(dst.join("zh").join("strings.json"), "old").unwrap();
        std::fs::write(dst.join("keep.txt"), "kept").unwrap();

        copy_dir(&src, &dst).await.unwrap();

        assert_eq!(std::fs::read_to_string(dst.join("zh").join("strings.json")).unwrap(), "new");
        assert_eq!(std::fs::read_to_string(dst.join("keep.txt")).unwrap(), "kept");
    }

    #[tokio::test]
    async fn copy_dir_keeps_directory_times() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("resource");
        let dst = tmp.path().join("install").join("resource");
        std::fs::create_dir_all(src.join("pipeline")).unwrap();
        std::fs::write(src.join("pipeline").join("main.json"), "{}").unwrap();
        let past = std::time::SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(3_000_000);
        for dir in [src.join("pipeline"), src.clone()] {
            let times = FileTimes::new().set_accessed(past).set_modified(past);
            #[cfg(unix)]
            File::open(&dir).unwrap().set_times(times).unwrap();
            #[cfg(windows)]
            {
                use std::os::windows::fs::OpenOptionsExt;
                File::options()
                    .access_mode(0x0100)
                    .custom_flags(0x0200_0000)
                    .open(&dir)
                    .unwrap()
                    .set_times(times)
                    .unwrap();
            }
        }

        copy_dir(&src, &dst).await.unwrap();

        assert!(dst.join("pipeline").join("main.json").is_file());
        assert_eq!(std::fs::metadata(&dst).unwrap().modified().unwrap(), past);
        assert_eq!(
            std::fs::metadata(dst.join("pipeline")).unwrap().modified().unwrap(),
            past
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn copy_dir_keeps_directory_mode() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("lang");
        let dst = tmp.path().join("install").join("lang");
        std::fs::create_dir_all(src.join("zh")).unwrap();
        std::fs::write(src.join("zh").join("strings.json"), "{}").unwrap();
        std::fs::set_permissions(src.join("zh"), std::fs::Permissions::from_mode(0o750)).unwrap();

        copy_dir(&src, &dst).await.unwrap();

        let mode = std::fs::metadata(dst.join("zh")).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o750);
    }

    #[tokio::test]
    async fn metadata_if_exists_treats_only_absence_as_none() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(metadata_if_exists(&tmp.path().join("lang")).await.unwrap().is_none());
        assert!(metadata_if_exists(tmp.path()).await.unwrap().unwrap().is_dir());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn metadata_if_exists_reports_file_used_as_parent() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("source");
        std::fs::write(&file, "not a dir").unwrap();

        let err = metadata_if_exists(&file.join("lang")).await.unwrap_err();
        assert!(matches!(err, Error::Fs { context: "reading source metadata", .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn set_mode_applies_bits() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let script = tmp.path().join("start.sh");
        std::fs::write(&script, "#!/bin/bash\n").unwrap();

        set_mode(&script, 0o755).await.unwrap();

        let mode = std::fs::metadata(&script).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}
