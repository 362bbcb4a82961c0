//! CSV reports over scheduler snapshot dumps.
//!
//! Each report is a single pass over the loaded snapshots:
//! - slot timeline (required vs. available slots)
//! - scaling timeline (adds the task demand of in-progress jobs)
//! - per-worker load averages
//! - makespans of completed jobs

pub mod balancing;
pub mod config;
pub mod makespan;
pub mod report;
pub mod sink;
pub mod timeline;

pub use balancing::{LoadAccumulator, WorkerLoad, worker_load};
pub use config::{MAKESPAN_OFFSET_MINUTES, ReportConfig, SAMPLE_INTERVAL_SECS};
pub use makespan::{makespan_minutes, makespans};
pub use report::{Report, generate};
pub use sink::CsvSink;
pub use timeline::{ScalingSample, SlotSample, scaling_timeline, slot_timeline};

use camino::Utf8PathBuf;
use snapreport_core::SnapshotError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error("Failed to write {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Input contains no snapshots")]
    Empty,
    #[error("Snapshot {index} is missing `{field}`")]
    MissingField { index: usize, field: &'static str },
}
