//! Header staging into the package output tree.
//!
//! Recursively copies `<source root>/include` into
//! `<package folder>/include`, preserving relative paths and symlinks.
//! The copy is additive: pre-existing unrelated files in the output are
//! left alone.

use std::io;
use std::path::Path;

use crate::recipe::error::{Error, Result};

/// Makes a symbolic link to a directory.
#[cfg(unix)]
fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a directory.
#[cfg(windows)]
fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(unix)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(windows)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(src, dst)
}

/// Stages the headers from `source_root` into `package_folder`.
///
/// Fails with [`Error::SourceNotFound`] before writing anything when
/// `<source_root>/include` does not exist. Returns the number of files
/// copied.
pub async fn stage(source_root: &Path, package_folder: &Path) -> Result<usize> {
    let include_src = source_root.join("include");
    if !include_src.exists() {
        return Err(Error::SourceNotFound { path: include_src });
    }
    if !include_src.is_dir() {
        crate::bail!("{} is not a directory", include_src.display());
    }

    log::debug!("resolved source directory: {}", source_root.display());

    let include_dst = package_folder.join("include");

    // Clone paths for move into blocking closure
    let from = include_src;
    let to = include_dst;

    // Offload the blocking walk to the dedicated thread pool
    tokio::task::spawn_blocking(move || -> Result<usize> {
        if let Some(parent) = to.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut copied = 0;
        for entry in walkdir::WalkDir::new(&from) {
            let entry = entry.map_err(|e| Error::Generic(e.to_string()))?;
            debug_assert!(entry.path().starts_with(&from));
            let rel_path = entry
                .path()
                .strip_prefix(&from)
                .map_err(|e| Error::Generic(e.to_string()))?;
            let dest_path = to.join(rel_path);

            if entry.file_type().is_symlink() {
                let target = std::fs::read_link(entry.path())?;
                if entry.path().is_dir() {
                    symlink_dir(&target, &dest_path)?;
                } else {
                    symlink_file(&target, &dest_path)?;
                }
                copied += 1;
            } else if entry.file_type().is_dir() {
                std::fs::create_dir_all(dest_path)?;
            } else {
                std::fs::copy(entry.path(), dest_path)?;
                copied += 1;
            }
        }

        Ok(copied)
    })
    .await
    .map_err(|e| Error::Generic(format!("staging copy task panicked: {e}")))?
}
