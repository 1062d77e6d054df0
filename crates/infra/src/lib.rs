// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod content;
pub mod filesystem;
pub mod persistence;
pub mod sink;
