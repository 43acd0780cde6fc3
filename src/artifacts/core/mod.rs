//! Composition helpers shared by the storage areas
//!
//! - `chunk`: concatenation of raw bytes and text into one buffer
//! - `path`: joining path segments without touching the filesystem

pub mod chunk;
pub mod path;
