//! Persistence contract for assessment records.
//!
//! The scoring core never opens file handles; storage is injected
//! behind this trait (the file-backed implementation lives in
//! `socagen-store`). The purge operations are expressed in terms of
//! the load/replace primitives, so every backend gets them for free.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::report::PersistedRecord;

/// Errors from a result store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read results document {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write results document {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize results document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Append-only record storage with explicit bulk/selective purges.
pub trait ResultStore {
    /// Load every persisted record, oldest first.
    fn load_all(&self) -> Result<Vec<PersistedRecord>, StoreError>;

    /// Overwrite the whole document with the given records.
    fn replace_all(&self, records: Vec<PersistedRecord>) -> Result<(), StoreError>;

    /// Append one record.
    fn append(&self, record: PersistedRecord) -> Result<(), StoreError> {
        let mut records = self.load_all()?;
        records.push(record);
        self.replace_all(records)
    }

    /// Delete every record. Returns how many were removed.
    fn purge_all(&self) -> Result<usize, StoreError> {
        let removed = self.load_all()?.len();
        self.replace_all(Vec::new())?;
        Ok(removed)
    }

    /// Delete all records for one student. Returns how many were removed.
    fn purge_student(&self, student: &str) -> Result<usize, StoreError> {
        let records = self.load_all()?;
        let before = records.len();
        let kept: Vec<_> = records
            .into_iter()
            .filter(|record| record.student != student)
            .collect();
        let removed = before - kept.len();
        self.replace_all(kept)?;
        Ok(removed)
    }

    /// Delete records with a timestamp before the cutoff. Returns how
    /// many were removed.
    fn purge_before(&self, cutoff: DateTime<Utc>) -> Result<usize, StoreError> {
        let records = self.load_all()?;
        let before = records.len();
        let kept: Vec<_> = records
            .into_iter()
            .filter(|record| record.timestamp >= cutoff)
            .collect();
        let removed = before - kept.len();
        self.replace_all(kept)?;
        Ok(removed)
    }
}
