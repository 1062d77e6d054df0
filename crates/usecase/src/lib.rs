//! # Use Cases
//!
//! Application-level orchestration.
//!
//! [`BuildSnapshot`] drives one snapshot build: it walks the tree through
//! the filesystem port, filters with the domain exclusion rules, reads and
//! decodes content, and assembles the [`treesnap_domain::Snapshot`].
//!
//! This crate depends on domain and ports only, never on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::SnapshotOutput;
pub use orchestrator::BuildSnapshot;
