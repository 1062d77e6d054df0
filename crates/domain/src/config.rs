pub mod exclusion;
pub mod glob_pattern;
pub mod snapshot_config;

pub use exclusion::{DEFAULT_EXCLUDED_DIRS, ExclusionRules};
pub use glob_pattern::GlobPattern;
pub use snapshot_config::SnapshotConfig;
