//! socagen-store — file-backed JSON result persistence.
//!
//! Keeps every assessment record in a single pretty-printed JSON array
//! that is overwritten on each mutation (append, bulk delete, selective
//! delete). The store implements the `ResultStore` contract from
//! `socagen-core` and inherits the purge operations from it.

use std::path::{Path, PathBuf};

use socagen_core::report::PersistedRecord;
use socagen_core::store::{ResultStore, StoreError};

/// A results document on disk.
pub struct JsonResultStore {
    path: PathBuf,
}

impl JsonResultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResultStore for JsonResultStore {
    fn load_all(&self) -> Result<Vec<PersistedRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content =
            std::fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
                path: self.path.display().to_string(),
                source,
            })?;
        match serde_json::from_str(&content) {
            Ok(records) => Ok(records),
            Err(e) => {
                // A corrupt document must not block every future append.
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "results document unreadable, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    fn replace_all(&self, records: Vec<PersistedRecord>) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&records)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                    path: self.path.display().to_string(),
                    source,
                })?;
            }
        }
        std::fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.display().to_string(),
            source,
        })
    }
}
