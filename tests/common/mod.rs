#![allow(dead_code)]

use assert_fs::TempDir;
use bitstore::areas::repository::Repository;
use bitstore::artifacts::records::record::Record;
use derive_new::new;
use rstest::fixture;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    Repository::new(repository_dir.path())
        .init()
        .expect("Failed to initialize repository");

    repository_dir
}

/// Commit-shaped record used to exercise the codec end to end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, new)]
pub struct CommitRecord {
    pub message: String,
    pub parent: Option<String>,
    pub timestamp: u64,
    pub blobs: BTreeMap<String, String>,
}

impl Record for CommitRecord {
    const KIND: &'static str = "commit";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, new)]
pub struct StagingRecord {
    pub added: BTreeMap<String, String>,
    pub removed: Vec<String>,
}

impl Record for StagingRecord {
    const KIND: &'static str = "staging";
}

#[derive(Debug, Clone, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_generated_files(dir: &Path, files_count: usize) -> Vec<FileSpec> {
    use fake::{
        Fake,
        faker::lorem::en::{Word, Words},
    };

    (0..files_count)
        .map(|index| {
            let file_name = format!("{index}-{}.txt", Word().fake::<String>());
            let file_content = Words(5..10).fake::<Vec<String>>().join(" ");

            let file_spec = FileSpec::new(dir.join(&file_name), file_content);
            write_file(&file_spec);

            file_spec
        })
        .collect::<Vec<_>>()
}

pub fn write_file(file_spec: &FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}
