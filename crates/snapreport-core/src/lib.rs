//! Scheduler state snapshots for snapreport.
//!
//! This crate handles the typed model of a captured status dump and
//! loading it from disk.

pub mod load;
pub mod types;

pub use load::{SnapshotError, load_snapshots, parse_snapshots};
pub use types::{CompletedJob, Job, Snapshot, Task, Worker};
