//! Storage support layer for a content-addressable version-control system
//!
//! - `artifacts`: content fingerprints, byte composition, path composition and the record codec
//! - `areas`: guarded file I/O, scoped deletion, the object database and the repository layout
//!
//! Every fallible operation returns `anyhow::Result` with a message precise enough
//! to be shown to an end user as is.

pub mod areas;
pub mod artifacts;
