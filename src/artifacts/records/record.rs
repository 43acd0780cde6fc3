use serde::Serialize;
use serde::de::DeserializeOwned;

/// A typed value with a defined byte encoding
///
/// `KIND` names the record in its encoding so a decode into the wrong type is
/// caught. Bump `VERSION` whenever the fields change shape; records written
/// under an older version are then reported as stale instead of being
/// misread.
///
/// Filesystem paths are deliberately not records: encoding a path would
/// capture a location instead of content. Read the file and store its bytes.
///
/// ```compile_fail
/// use bitstore::artifacts::records::codec::encode;
///
/// let _ = encode(&std::path::PathBuf::from("notes.txt"));
/// ```
pub trait Record: Serialize + DeserializeOwned {
    const KIND: &'static str;

    const VERSION: u32 = 1;
}
