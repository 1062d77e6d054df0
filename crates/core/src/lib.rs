// crates/core/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod bootstrap;

pub use bootstrap::{RunReport, run};
