// crates/domain/src/config/snapshot_config.rs
use std::path::{Path, PathBuf};

use treesnap_shared_kernel::{DomainError, DomainResult};

use crate::config::ExclusionRules;

/// Resolved configuration for one snapshot run.
#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    root: PathBuf,
    output: PathBuf,
    rules: ExclusionRules,
}

impl SnapshotConfig {
    /// Builds a validated run configuration.
    ///
    /// The output file name is added to `rules`, so a snapshot never captures
    /// its own output document, even a stale copy in a subdirectory.
    pub fn new(root: PathBuf, output: PathBuf, mut rules: ExclusionRules) -> DomainResult<Self> {
        let Some(output_name) = output.file_name().and_then(|name| name.to_str()) else {
            return Err(DomainError::InvalidConfiguration {
                reason: format!("output path '{}' has no file name", output.display()),
            });
        };
        rules.add_file_name(output_name);
        Ok(Self {
            root,
            output,
            rules,
        })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    #[must_use]
    pub fn rules(&self) -> &ExclusionRules {
        &self.rules
    }
}
