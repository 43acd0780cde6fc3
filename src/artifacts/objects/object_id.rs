//! Object identifier (SHA-1 content fingerprint)
//!
//! Object IDs are 40-character lowercase hexadecimal strings.
//!
//! ## Format
//!
//! - Full: 40 hex characters (e.g., "da39a3ee5e6b...afd80709")
//! - Short: first 7 characters (e.g., "da39a3e")
//!
//! ## Storage
//!
//! Objects are stored in `.bit/objects/<first-2-chars>/<remaining-38-chars>`

use crate::artifacts::objects::{OBJECT_ID_LENGTH, SHORT_OBJECT_ID_LENGTH};
use sha1::Sha1;
use std::path::PathBuf;

/// Content fingerprint of a byte sequence
///
/// Only constructible through [`ObjectId::try_parse`] or the digest engine, so
/// every value holds exactly 40 lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID
    ///
    /// Fails unless `id` is exactly 40 characters from `[0-9a-f]`.
    pub fn try_parse(id: impl Into<String>) -> anyhow::Result<Self> {
        let id = id.into();

        if id.len() != OBJECT_ID_LENGTH {
            anyhow::bail!("Invalid object ID length: {}", id.len());
        }
        if !id.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            anyhow::bail!("Invalid object ID characters: {}", id);
        }

        Ok(Self(id))
    }

    pub(crate) fn from_sha1(hash: sha1::digest::Output<Sha1>) -> Self {
        Self(format!("{hash:x}"))
    }

    /// Convert to the fan-out path used for object storage
    ///
    /// `abc123...` becomes `ab/c123...`
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }

    /// First 7 characters of the hash
    pub fn to_short_oid(&self) -> String {
        self.0[..SHORT_OBJECT_ID_LENGTH].to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
