//! Content-addressed object database
//!
//! Each object is stored once, in a file named after the fingerprint of its
//! bytes: `objects/<first-2-chars>/<remaining-38-chars>`. Objects are written
//! to a temporary file and renamed into place; storing the same bytes twice
//! yields the same ID and touches nothing on disk.

use crate::areas::files::{list_plain_files, read_bytes};
use crate::areas::metadata::safe_delete;
use crate::artifacts::objects::OBJECT_ID_LENGTH;
use crate::artifacts::objects::digest::digest;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::records::codec::{decode, encode};
use crate::artifacts::records::record::Record;
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

#[derive(Debug, new)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    pub fn object_path(&self, object_id: &ObjectId) -> PathBuf {
        self.path.join(object_id.to_path())
    }

    pub fn contains(&self, object_id: &ObjectId) -> bool {
        self.object_path(object_id).is_file()
    }

    /// Store raw bytes, returning their fingerprint
    ///
    /// An object already on disk with the expected length is left alone; a
    /// short one, such as a write cut off by a crash, is replaced.
    pub fn store_bytes(&self, data: &[u8]) -> anyhow::Result<ObjectId> {
        let object_id = digest(data);
        let object_path = self.object_path(&object_id);

        match std::fs::metadata(&object_path) {
            Ok(metadata) if metadata.is_file() && metadata.len() == data.len() as u64 => {}
            _ => {
                self.write_object(&object_path, data)?;
                debug!(oid = %object_id, size = data.len(), "stored object");
            }
        }

        Ok(object_id)
    }

    fn write_object(&self, object_path: &Path, data: &[u8]) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .with_context(|| format!("Invalid object path {}", object_path.display()))?;
        std::fs::create_dir_all(object_dir).with_context(|| {
            format!("Unable to create object directory {}", object_dir.display())
        })?;

        let mut temp_file = tempfile::Builder::new()
            .prefix("tmp-obj-")
            .tempfile_in(object_dir)
            .with_context(|| format!("Unable to create object file in {}", object_dir.display()))?;
        temp_file.write_all(data).with_context(|| {
            format!(
                "Unable to write object file {}",
                temp_file.path().display()
            )
        })?;

        // readers only ever see a complete object
        temp_file
            .persist(object_path)
            .map_err(|e| e.error)
            .with_context(|| format!("Unable to rename object file to {}", object_path.display()))?;

        Ok(())
    }

    /// Encode and store a record, returning the fingerprint of its encoding
    pub fn store_record<R: Record>(&self, record: &R) -> anyhow::Result<ObjectId> {
        let content = encode(record)?;

        self.store_bytes(&content)
    }

    pub fn load_bytes(&self, object_id: &ObjectId) -> anyhow::Result<Bytes> {
        read_bytes(self.object_path(object_id))
            .with_context(|| format!("Unable to load object {object_id}"))
    }

    pub fn load_record<R: Record>(&self, object_id: &ObjectId) -> anyhow::Result<R> {
        let content = self.load_bytes(object_id)?;

        decode(&content).with_context(|| format!("Unable to decode object {object_id}"))
    }

    /// Delete a stored object; `false` if it was not stored
    pub fn remove(&self, object_id: &ObjectId) -> anyhow::Result<bool> {
        safe_delete(self.object_path(object_id))
    }

    /// Find all objects whose ID starts with `prefix`
    ///
    /// Used to resolve abbreviated IDs. More than one match means the prefix
    /// is ambiguous. For prefixes of 2+ characters only the matching fan-out
    /// directory is searched.
    pub fn find_objects_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<ObjectId>> {
        if prefix.len() > OBJECT_ID_LENGTH
            || !prefix.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
        {
            anyhow::bail!("Invalid object ID prefix: {}", prefix);
        }

        if prefix.len() < 2 {
            let mut matches = self.list_objects()?;
            matches.retain(|oid| oid.as_ref().starts_with(prefix));
            return Ok(matches);
        }

        let (dir_name, file_prefix) = prefix.split_at(2);
        let dir_path = self.path.join(dir_name);
        if !dir_path.is_dir() {
            return Ok(Vec::new());
        }

        Ok(list_plain_files(&dir_path)?
            .into_iter()
            .filter(|file_name| file_name.starts_with(file_prefix))
            .filter_map(|file_name| ObjectId::try_parse(format!("{dir_name}{file_name}")).ok())
            .collect())
    }

    /// Every stored object, sorted by ID
    pub fn list_objects(&self) -> anyhow::Result<Vec<ObjectId>> {
        let mut object_ids = Vec::new();

        for entry in WalkDir::new(&self.path).min_depth(2).max_depth(2) {
            let entry = entry.with_context(|| {
                format!("Unable to walk object directory {}", self.path.display())
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let dir_name = entry
                .path()
                .parent()
                .and_then(Path::file_name)
                .map(|name| name.to_string_lossy());
            let file_name = entry.file_name().to_string_lossy();

            if let Some(dir_name) = dir_name
                && let Ok(object_id) = ObjectId::try_parse(format!("{dir_name}{file_name}"))
            {
                object_ids.push(object_id);
            }
        }
        object_ids.sort();

        Ok(object_ids)
    }
}
