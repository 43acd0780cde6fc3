//! Metadata directory convention and scoped deletion
//!
//! A file may only be deleted through [`safe_delete`] when it lives inside a
//! metadata directory, or directly inside a working root that holds one. This
//! limits what a bug in a caller can destroy; it is a check on path text, not
//! an ownership check.

use crate::areas::METADATA_DIR_NAME;
use anyhow::Context;
use std::path::{Component, Path};
use tracing::debug;

/// Whether `path` points inside a metadata directory
///
/// `..` components are followed textually, so `.bit/../notes.txt` is outside.
pub fn is_in_metadata_dir(path: &Path) -> bool {
    // depth below the innermost metadata directory, if inside one
    let mut depth: Option<usize> = None;

    for component in path.components() {
        depth = match (component, depth) {
            (Component::Normal(name), _) if name == METADATA_DIR_NAME => Some(0),
            (Component::Normal(_), Some(depth)) => Some(depth + 1),
            (Component::ParentDir, Some(depth)) => depth.checked_sub(1),
            (Component::RootDir | Component::Prefix(_), _) => None,
            (_, depth) => depth,
        };
    }

    depth.is_some_and(|depth| depth > 0)
}

/// Whether the directory containing `path` also contains a metadata directory
pub fn is_in_working_root(path: &Path) -> bool {
    let parent = path.parent().unwrap_or(Path::new(""));

    parent.join(METADATA_DIR_NAME).is_dir()
}

/// Delete the file at `path`
///
/// Returns `true` if a file was deleted and `false` if there was nothing to
/// delete. Directories are never deleted.
pub fn safe_delete(path: impl AsRef<Path>) -> anyhow::Result<bool> {
    let path = path.as_ref();

    if !is_in_metadata_dir(path) && !is_in_working_root(path) {
        anyhow::bail!(
            "Not permitted: file to be deleted is not in {METADATA_DIR_NAME} or in a \
            {METADATA_DIR_NAME} working directory: {}",
            path.display()
        );
    }
    if path.is_dir() {
        anyhow::bail!("File to be deleted is a directory: {}", path.display());
    }

    match std::fs::remove_file(path) {
        Ok(()) => {
            debug!(path = %path.display(), "deleted file");
            Ok(true)
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(err) => {
            Err(err).with_context(|| format!("Unable to delete file {}", path.display()))
        }
    }
}
