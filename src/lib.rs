// Transitive dependencies pin different versions of windows-sys and
// hermit-abi behind clap and env_logger.
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
