//! Run log: one JSON record per generated run, appended to a file.

pub mod file;
pub mod record;

pub use file::{RecordSink, RunLog};
pub use record::RunRecord;
