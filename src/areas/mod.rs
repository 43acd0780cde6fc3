//! Filesystem-facing components
//!
//! - `files`: guarded whole-file reads and writes, copying and directory listing
//! - `metadata`: the metadata directory convention and scoped deletion
//! - `database`: content-addressed object storage under the metadata directory
//! - `repository`: layout of a working root and its metadata directory

pub mod database;
pub mod files;
pub mod metadata;
pub mod repository;

/// Name of the private metadata directory at the root of a working tree
pub const METADATA_DIR_NAME: &str = ".bit";

/// Name of the object database directory inside the metadata directory
pub const OBJECTS_DIR_NAME: &str = "objects";
