//! Data types and pure algorithms
//!
//! - `core`: byte and path composition
//! - `objects`: content fingerprints (SHA-1 object IDs)
//! - `records`: typed records and their self-describing byte encoding

pub mod core;
pub mod objects;
pub mod records;
