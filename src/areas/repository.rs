//! Repository layout
//!
//! A repository is a working root plus its metadata directory:
//!
//! ```text
//! <root>/
//!   .bit/
//!     objects/    content-addressed object database
//!   ...           working tree files
//! ```

use crate::areas::database::Database;
use crate::areas::{METADATA_DIR_NAME, OBJECTS_DIR_NAME};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug)]
pub struct Repository {
    root: Box<Path>,
    database: Database,
}

impl Repository {
    /// Describe the repository rooted at `root`; performs no I/O
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let objects_path = root.join(METADATA_DIR_NAME).join(OBJECTS_DIR_NAME);

        Repository {
            root: root.into(),
            database: Database::new(objects_path.into_boxed_path()),
        }
    }

    /// Find the repository containing `start` by walking up its ancestors
    pub fn discover(start: impl AsRef<Path>) -> anyhow::Result<Self> {
        let start = start.as_ref();

        start
            .ancestors()
            .find(|dir| dir.join(METADATA_DIR_NAME).is_dir())
            .map(Self::new)
            .with_context(|| format!("Not inside a repository: {}", start.display()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.root.join(METADATA_DIR_NAME)
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn is_initialized(&self) -> bool {
        self.metadata_path().is_dir()
    }

    /// Create the metadata directory and an empty object database
    pub fn init(&self) -> anyhow::Result<()> {
        let metadata_path = self.metadata_path();

        if metadata_path.exists() {
            anyhow::bail!("A repository already exists in {}", self.root.display());
        }

        std::fs::create_dir_all(self.database.objects_path()).with_context(|| {
            format!(
                "Unable to create object directory {}",
                self.database.objects_path().display()
            )
        })?;
        debug!(path = %metadata_path.display(), "initialized repository");

        Ok(())
    }
}
