// tests/common/mod.rs
//! Shared test utilities.

pub mod temp;

#[allow(unused_imports)]
pub use temp::TempDir;
