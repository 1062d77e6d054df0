#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod model;

pub use config::{DEFAULT_EXCLUDED_DIRS, ExclusionRules, GlobPattern, SnapshotConfig};
pub use model::{FileRecord, Snapshot};
