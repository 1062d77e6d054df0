// crates/domain/src/model/snapshot.rs
use std::collections::HashSet;

use serde::Serialize;
use treesnap_shared_kernel::{DomainError, DomainResult};

use crate::model::FileRecord;

/// The complete snapshot document: every captured record, in traversal order.
///
/// Serializes as `{"files": [...]}`. Construction rejects duplicate record
/// paths, so a snapshot never holds two entries for the same file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    files: Vec<FileRecord>,
}

impl Snapshot {
    pub fn from_records(records: Vec<FileRecord>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.path.as_str()) {
                return Err(DomainError::DuplicateRecordPath {
                    path: record.path.as_str().to_string(),
                });
            }
        }
        Ok(Self { files: records })
    }

    #[must_use]
    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    /// Number of captured entries, as reported to the user.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
