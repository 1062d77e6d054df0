// crates/shared-kernel/src/value_objects/mod.rs
pub mod record_path;
pub mod status;

pub use record_path::RecordPath;
pub use status::RecordStatus;
