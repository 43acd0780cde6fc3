//! Typed records and their byte encoding
//!
//! ## Encoding
//!
//! ```text
//! Header:
//!   - Magic: "BREC" (4 bytes)
//!   - Format version (1 byte)
//!   - Kind length (2 bytes, big-endian)
//!   - Kind (UTF-8, kind length bytes)
//!   - Schema version (4 bytes, big-endian)
//!
//! Payload:
//!   - JSON encoding of the record, no trailing bytes
//! ```
//!
//! The header lets `decode` tell foreign bytes, a stale codec, a different
//! record kind and an outdated record definition apart.

pub mod codec;
pub mod header;
pub mod record;

/// Magic bytes opening every encoded record
pub const MAGIC: &[u8; 4] = b"BREC";

/// Version of the header layout and payload encoding
pub const FORMAT_VERSION: u8 = 2;
