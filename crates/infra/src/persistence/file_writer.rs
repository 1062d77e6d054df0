// crates/infra/src/persistence/file_writer.rs
use std::{
    fs,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use treesnap_shared_kernel::{InfraResult, InfrastructureError};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically write `data` to `path` via a temp file and rename.
    /// Missing parent directories are created first; fsync is best effort.
    pub fn atomic_write(path: &Path, data: &[u8]) -> InfraResult<()> {
        let write_error = |source: std::io::Error| InfrastructureError::FileWrite {
            path: path.to_path_buf(),
            source,
        };

        let parent = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        fs::create_dir_all(parent).map_err(write_error)?;

        let tmp = temp_sibling(parent);
        let file = File::create(&tmp).map_err(write_error)?;
        let mut w = BufWriter::new(file);
        w.write_all(data).map_err(write_error)?;
        w.flush().map_err(write_error)?;
        let _ = w.get_ref().sync_all();

        fs::rename(&tmp, path).map_err(write_error)?;

        // Sync the parent directory so the rename itself is durable on Unix.
        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        Ok(())
    }
}

// The temp file must live next to the target so the rename stays on one
// filesystem; PID and clock nanos keep concurrent runs from colliding.
fn temp_sibling(dir: &Path) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.join(format!(".{}.{}.tmp", std::process::id(), nanos))
}
