//! # Ports
//!
//! Trait boundaries between the application layers and the outside world.
//!
//! - [`filesystem`]: directory tree enumeration
//! - [`content`]: file reading and text decoding
//!
//! Implementations live in `treesnap_infra`; the use case layer only ever
//! sees these traits.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod content;
pub mod filesystem;
