// crates/infra/src/sink.rs
use std::path::Path;

use treesnap_domain::Snapshot;
use treesnap_shared_kernel::Result;

use crate::persistence::FileWriter;

/// Persists snapshots as pretty-printed JSON documents.
#[derive(Debug, Default)]
pub struct JsonSnapshotSink;

impl JsonSnapshotSink {
    pub fn new() -> Self {
        Self
    }

    /// Serializes `snapshot` and writes it to `path` with a trailing newline.
    ///
    /// The document lands via temp file and rename; a partially written
    /// snapshot never appears at `path`.
    pub fn persist(&self, snapshot: &Snapshot, path: &Path) -> Result<()> {
        let mut data = serde_json::to_vec_pretty(snapshot)?;
        data.push(b'\n');
        FileWriter::atomic_write(path, &data)?;
        log::debug!("wrote {} bytes to '{}'", data.len(), path.display());
        Ok(())
    }
}
