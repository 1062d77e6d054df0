// crates/usecase/src/dto.rs
use treesnap_domain::Snapshot;

/// Output of a completed snapshot build.
#[derive(Debug)]
pub struct SnapshotOutput {
    pub snapshot: Snapshot,
    /// Files the walker yielded, before rule filtering.
    pub walked: usize,
    /// Files rejected by the exclusion rules after the walk.
    pub excluded: usize,
    /// Files whose content needed the lossy decode fallback.
    pub lossy: usize,
}
