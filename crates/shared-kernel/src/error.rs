// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Workspace-wide error type, one variant per layer.
#[derive(Debug, Error)]
pub enum TreesnapError {
    /// Wraps another error with a human readable context line.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<TreesnapError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, TreesnapError>;

/// Errors raised by the snapshot model and its configuration rules.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Invalid pattern '{pattern}': {details}")]
    InvalidPattern {
        pattern: String,
        details: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Duplicate record path '{path}'")]
    DuplicateRecordPath { path: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Errors from the filesystem and serialization adapters.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory walk failed: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Failed to produce {format} output: {details}")]
    Serialization { format: String, details: String },

    #[error("Not a directory: '{path}'")]
    NotADirectory { path: PathBuf },

    #[error("Failed to resolve path '{path}': {source}")]
    PathResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Errors from CLI argument handling.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TreesnapError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<ignore::Error> for TreesnapError {
    fn from(err: ignore::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Adds `.context(...)` and `.with_context(...)` to any result whose error
/// converts into [`TreesnapError`].
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<TreesnapError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| TreesnapError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| TreesnapError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
