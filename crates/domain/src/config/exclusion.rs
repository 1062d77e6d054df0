// crates/domain/src/config/exclusion.rs
use std::collections::HashSet;

use treesnap_shared_kernel::{DomainError, DomainResult, RecordPath};

use crate::config::GlobPattern;

/// Directory names excluded from every snapshot unless defaults are disabled.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[".git", "node_modules"];

/// Pure predicate deciding which root-relative paths stay out of a snapshot.
#[derive(Debug, Clone, Default)]
pub struct ExclusionRules {
    dir_names: HashSet<String>,
    file_names: HashSet<String>,
    path_patterns: Vec<GlobPattern>,
}

impl ExclusionRules {
    /// Rules preloaded with [`DEFAULT_EXCLUDED_DIRS`].
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut rules = Self::default();
        for name in DEFAULT_EXCLUDED_DIRS {
            rules.add_dir_name(*name);
        }
        rules
    }

    /// Excludes every path containing a segment equal to `name`.
    pub fn add_dir_name(&mut self, name: impl Into<String>) {
        self.dir_names.insert(name.into());
    }

    /// Excludes every path whose final segment equals `name`, at any depth.
    pub fn add_file_name(&mut self, name: impl Into<String>) {
        self.file_names.insert(name.into());
    }

    /// Excludes every path matched by the glob `pattern`.
    pub fn add_path_pattern(&mut self, pattern: &str) -> DomainResult<()> {
        let compiled = GlobPattern::new(pattern).map_err(|e| DomainError::InvalidPattern {
            pattern: pattern.to_string(),
            details: e.to_string(),
            source: Some(Box::new(e)),
        })?;
        self.path_patterns.push(compiled);
        Ok(())
    }

    /// Reports whether `path` must stay out of the snapshot.
    ///
    /// Directory names match any segment, so a plain file named like an
    /// excluded directory is skipped as well.
    pub fn is_excluded(&self, path: &RecordPath) -> bool {
        if path.segments().any(|segment| self.dir_names.contains(segment)) {
            return true;
        }
        if self.file_names.contains(path.file_name()) {
            return true;
        }
        self.path_patterns.iter().any(|pattern| pattern.matches(path.as_str()))
    }

    /// Directory names for walkers that prune while traversing;
    /// [`Self::is_excluded`] remains the authoritative check per file.
    pub fn dir_names(&self) -> impl Iterator<Item = &str> {
        self.dir_names.iter().map(String::as_str)
    }
}
