// crates/shared-kernel/src/value_objects/record_path.rs
use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

/// Root-relative path of a captured file, separated by `/` on every platform.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct RecordPath(String);

impl RecordPath {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Builds a record path from a root-relative filesystem path.
    ///
    /// Components are joined with `/` regardless of the platform separator;
    /// non UTF-8 components are lossy converted.
    #[must_use]
    pub fn from_relative(path: &Path) -> Self {
        let joined = path
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join("/");
        Self(joined)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Iterates over the `/` separated segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    /// Returns the final segment, i.e. the file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or_default()
    }
}

impl From<&str> for RecordPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}
impl From<String> for RecordPath {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl AsRef<str> for RecordPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
