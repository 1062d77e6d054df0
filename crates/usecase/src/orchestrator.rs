use treesnap_domain::{FileRecord, Snapshot, SnapshotConfig};
use treesnap_ports::content::ContentReader;
use treesnap_ports::filesystem::{TreeWalker, WalkPlan};
use treesnap_shared_kernel::{ErrorContext, Result};

use crate::dto::SnapshotOutput;

/// Builds a snapshot of the configured tree: walk, filter, read, assemble.
pub struct BuildSnapshot<'a> {
    walker: &'a dyn TreeWalker,
    reader: &'a dyn ContentReader,
}

impl<'a> BuildSnapshot<'a> {
    pub fn new(walker: &'a dyn TreeWalker, reader: &'a dyn ContentReader) -> Self {
        Self { walker, reader }
    }

    /// Runs the full pipeline for `config`.
    ///
    /// Every walked file is checked against the exclusion rules, even when
    /// the walker already pruned directories, so the rules stay authoritative
    /// for the final record set. Records keep traversal order.
    pub fn run(&self, config: &SnapshotConfig) -> Result<SnapshotOutput> {
        let plan = walk_plan(config);
        let walked = self.walker.collect(&plan)?;
        let walked_total = walked.len();

        let mut records = Vec::new();
        let mut lossy = 0usize;
        for file in walked {
            if config.rules().is_excluded(&file.relative) {
                log::debug!("excluding '{}'", file.relative);
                continue;
            }
            let decoded = self
                .reader
                .read_text(&file.absolute)
                .with_context(|| format!("capturing '{}'", file.relative))?;
            if decoded.lossy {
                lossy += 1;
            }
            records.push(FileRecord::completed(file.relative, decoded.text));
        }

        let excluded = walked_total - records.len();
        let snapshot = Snapshot::from_records(records)?;
        Ok(SnapshotOutput {
            snapshot,
            walked: walked_total,
            excluded,
            lossy,
        })
    }
}

fn walk_plan(config: &SnapshotConfig) -> WalkPlan {
    WalkPlan {
        root: config.root().to_path_buf(),
        prune_dirs: config.rules().dir_names().map(str::to_string).collect(),
    }
}
