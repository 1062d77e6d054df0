// crates/ports/src/content.rs
use std::path::Path;

use treesnap_shared_kernel::Result;

/// Text decoded from a file, with a marker for the fallback branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedTextDto {
    pub text: String,
    /// True when invalid UTF-8 sequences had to be dropped.
    pub lossy: bool,
}

/// Port for loading file contents as text.
pub trait ContentReader: Send + Sync {
    /// Reads the file at `path` as UTF-8 text.
    ///
    /// Implementations recover from invalid UTF-8 instead of failing; only
    /// I/O problems surface as errors.
    fn read_text(&self, path: &Path) -> Result<DecodedTextDto>;
}
