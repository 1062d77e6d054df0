// crates/infra/src/persistence/file_reader.rs
use std::{fs, io::Read, path::Path};

/// Whole-file reads with one preallocated buffer.
pub struct FileReader;

impl FileReader {
    /// Read the entire file at `path` into memory.
    ///
    /// The buffer is sized from metadata up front; a file that grows
    /// mid-read still loads fully through the normal `Read` path.
    pub fn read_to_end(path: &Path) -> std::io::Result<Vec<u8>> {
        let mut file = fs::File::open(path)?;
        let size = file.metadata().map(|meta| meta.len() as usize).unwrap_or(0);
        let mut buf = Vec::with_capacity(size);
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }
}
