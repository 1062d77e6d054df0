use anyhow::{Context, Result};
use log::{debug, info};

use treesnap_domain::SnapshotConfig;
use treesnap_infra::content::FsContentReader;
use treesnap_infra::filesystem::SequentialTreeWalker;
use treesnap_infra::sink::JsonSnapshotSink;
use treesnap_usecase::BuildSnapshot;

/// Summary of a finished snapshot run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Entries written to the output document.
    pub entries: usize,
    /// Files rejected by the exclusion rules.
    pub excluded: usize,
    /// Entries whose content needed the lossy decode fallback.
    pub lossy: usize,
}

/// Builds the snapshot for `config` and persists it to the configured output.
pub fn run(config: &SnapshotConfig) -> Result<RunReport> {
    let walker = SequentialTreeWalker::new();
    let reader = FsContentReader::new();
    let usecase = BuildSnapshot::new(&walker, &reader);

    let output = usecase
        .run(config)
        .with_context(|| format!("snapshot of '{}' failed", config.root().display()))?;
    debug!(
        "walked {} files, excluded {}, lossy decoded {}",
        output.walked, output.excluded, output.lossy
    );

    JsonSnapshotSink::new()
        .persist(&output.snapshot, config.output())
        .with_context(|| format!("writing '{}'", config.output().display()))?;
    info!(
        "snapshot written to '{}' ({} entries)",
        config.output().display(),
        output.snapshot.len()
    );

    Ok(RunReport {
        entries: output.snapshot.len(),
        excluded: output.excluded,
        lossy: output.lossy,
    })
}
