// crates/ports/src/filesystem.rs
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use treesnap_shared_kernel::{RecordPath, Result};

/// Input parameters controlling directory traversal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkPlan {
    /// Directory whose tree is enumerated.
    pub root: PathBuf,
    /// Directory names pruned during traversal without descending.
    pub prune_dirs: Vec<String>,
}

/// DTO representing a regular file discovered under the walk root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkedFileDto {
    /// Path suitable for opening the file.
    pub absolute: PathBuf,
    /// Path relative to the walk root, `/` separated.
    pub relative: RecordPath,
}

/// Port for enumerating the files of a directory tree.
///
/// Implementations yield regular files only, in a deterministic order, and
/// never follow symbolic links.
pub trait TreeWalker: Send + Sync {
    fn collect(&self, plan: &WalkPlan) -> Result<Vec<WalkedFileDto>>;
}
