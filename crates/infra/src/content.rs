// crates/infra/src/content.rs
use std::path::Path;

use treesnap_ports::content::{ContentReader, DecodedTextDto};
use treesnap_shared_kernel::{InfrastructureError, Result};

use crate::persistence::FileReader;

/// Filesystem adapter implementing the `ContentReader` port.
#[derive(Debug, Default)]
pub struct FsContentReader;

impl FsContentReader {
    pub fn new() -> Self {
        Self
    }
}

impl ContentReader for FsContentReader {
    fn read_text(&self, path: &Path) -> Result<DecodedTextDto> {
        let bytes = FileReader::read_to_end(path).map_err(|source| {
            InfrastructureError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let decoded = decode_utf8_dropping_invalid(bytes);
        if decoded.lossy {
            log::debug!("dropped invalid UTF-8 sequences in '{}'", path.display());
        }
        Ok(decoded)
    }
}

/// Decodes `bytes` as UTF-8, dropping invalid sequences.
///
/// Valid input converts wholesale without copying. For invalid input the
/// valid chunks are stitched together and the offending bytes are left out;
/// no replacement characters are inserted. The `lossy` flag records which
/// branch was taken.
#[must_use]
pub fn decode_utf8_dropping_invalid(bytes: Vec<u8>) -> DecodedTextDto {
    match String::from_utf8(bytes) {
        Ok(text) => DecodedTextDto { text, lossy: false },
        Err(err) => {
            let bytes = err.into_bytes();
            let mut text = String::with_capacity(bytes.len());
            for chunk in bytes.utf8_chunks() {
                text.push_str(chunk.valid());
            }
            DecodedTextDto { text, lossy: true }
        }
    }
}
