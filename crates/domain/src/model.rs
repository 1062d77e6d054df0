pub mod record;
pub mod snapshot;

pub use record::FileRecord;
pub use snapshot::Snapshot;
