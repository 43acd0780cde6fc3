//! Content fingerprints
//!
//! Every stored object is named by the SHA-1 hash of its bytes, rendered as
//! 40 lowercase hexadecimal characters.

pub mod digest;
pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of an abbreviated object ID
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
