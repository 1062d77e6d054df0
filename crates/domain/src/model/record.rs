// crates/domain/src/model/record.rs
use serde::{Deserialize, Serialize};
use treesnap_shared_kernel::{RecordPath, RecordStatus};

/// One captured file: its root-relative path and decoded text content.
///
/// Field order matches the serialized shape, so every entry in the output
/// document reads `path`, `content`, `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: RecordPath,
    pub content: String,
    pub status: RecordStatus,
}

impl FileRecord {
    #[must_use]
    pub fn completed(path: RecordPath, content: String) -> Self {
        Self {
            path,
            content,
            status: RecordStatus::Completed,
        }
    }
}
