//! Guarded file I/O
//!
//! Whole-file reads and writes that check the state of the path first, so a
//! failure says whether the file was missing, was a directory, or had no
//! usable parent, instead of surfacing a bare OS error.

use crate::artifacts::records::codec::{decode, encode};
use crate::artifacts::records::record::Record;
use anyhow::Context;
use bytes::Bytes;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, trace};

/// Read the entire contents of a regular file
pub fn read_bytes(path: impl AsRef<Path>) -> anyhow::Result<Bytes> {
    let path = path.as_ref();

    if check_metadata(path, "File")?.is_dir() {
        anyhow::bail!("File is a directory: {}", path.display());
    }

    let content =
        std::fs::read(path).with_context(|| format!("Unable to read file {}", path.display()))?;
    trace!(path = %path.display(), size = content.len(), "read file");

    Ok(Bytes::from(content))
}

/// Create or truncate `path` and write `contents` to it
///
/// To write several parts, compose them into one buffer first.
pub fn write_bytes(path: impl AsRef<Path>, contents: &[u8]) -> anyhow::Result<()> {
    let path = path.as_ref();

    if path.is_dir() {
        anyhow::bail!("Cannot overwrite directory: {}", path.display());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        match std::fs::metadata(parent) {
            Ok(metadata) if metadata.is_dir() => {}
            Ok(_) => anyhow::bail!("Parent path is not a directory: {}", path.display()),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                anyhow::bail!("Parent directory does not exist: {}", path.display())
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Unable to inspect parent of {}", path.display()));
            }
        }
    }

    std::fs::write(path, contents)
        .with_context(|| format!("Unable to write file {}", path.display()))?;
    debug!(path = %path.display(), size = contents.len(), "wrote file");

    Ok(())
}

/// Read a file as UTF-8 text
pub fn read_text(path: impl AsRef<Path>) -> anyhow::Result<String> {
    let path = path.as_ref();
    let content = read_bytes(path)?;

    String::from_utf8(content.to_vec())
        .map_err(|_| anyhow::anyhow!("File is not valid UTF-8: {}", path.display()))
}

/// Write `text` as UTF-8, replacing any previous contents
pub fn write_text(path: impl AsRef<Path>, text: &str) -> anyhow::Result<()> {
    write_bytes(path, text.as_bytes())
}

/// Read a record written by [`write_record`]
pub fn read_record<R: Record>(path: impl AsRef<Path>) -> anyhow::Result<R> {
    let path = path.as_ref();
    let content = read_bytes(path)?;

    decode(&content).with_context(|| format!("Unable to decode record from {}", path.display()))
}

/// Encode `record` and write it to `path`
pub fn write_record<R: Record>(path: impl AsRef<Path>, record: &R) -> anyhow::Result<()> {
    let path = path.as_ref();
    let content =
        encode(record).with_context(|| format!("Unable to encode record for {}", path.display()))?;

    write_bytes(path, &content)
}

/// Copy `source` over `destination`, overwriting it if it exists
pub fn copy_file(source: impl AsRef<Path>, destination: impl AsRef<Path>) -> anyhow::Result<()> {
    let (source, destination) = (source.as_ref(), destination.as_ref());

    if check_metadata(source, "Source file")?.is_dir() {
        anyhow::bail!("Source file is a directory: {}", source.display());
    }
    if destination.is_dir() {
        anyhow::bail!("Destination file is a directory: {}", destination.display());
    }

    std::fs::copy(source, destination).with_context(|| {
        format!(
            "Unable to copy {} to {}",
            source.display(),
            destination.display()
        )
    })?;
    debug!(source = %source.display(), destination = %destination.display(), "copied file");

    Ok(())
}

/// Metadata of an existing `path`
///
/// Only a missing path is reported as missing; any other failure, such as a
/// denied permission, keeps its OS error.
fn check_metadata(path: &Path, what: &str) -> anyhow::Result<std::fs::Metadata> {
    match std::fs::metadata(path) {
        Ok(metadata) => Ok(metadata),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            anyhow::bail!("{what} does not exist: {}", path.display())
        }
        Err(err) => Err(err).with_context(|| format!("Unable to read file {}", path.display())),
    }
}

/// Names of the regular files directly inside `dir`, in byte order
///
/// Subdirectories are skipped. Fails when `dir` cannot be listed, so an
/// empty result always means an empty directory.
pub fn list_plain_files(dir: impl AsRef<Path>) -> anyhow::Result<Vec<String>> {
    let dir = dir.as_ref();

    let entries = std::fs::read_dir(dir).with_context(|| {
        format!(
            "Not a directory, cannot list the files in it: {}",
            dir.display()
        )
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Unable to list directory {}", dir.display()))?;

        if entry.path().is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort_unstable();

    Ok(names)
}
