// crates/shared-kernel/src/value_objects/status.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Capture outcome recorded for each snapshot entry; reads that fail abort
/// the run, so `Completed` is the only value a finished snapshot contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    #[default]
    Completed,
}

impl RecordStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
