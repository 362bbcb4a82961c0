//! Makespans of completed jobs.

use crate::ReportError;
use crate::config::ReportConfig;
use chrono::TimeDelta;
use snapreport_core::{CompletedJob, Snapshot};

fn as_minutes(delta: TimeDelta) -> f64 {
    delta.num_seconds() as f64 / 60.0 + f64::from(delta.subsec_nanos()) / 60e9
}

/// Calibrated makespan of one completed job, in minutes.
///
/// `index` is the position of the snapshot the job came from, used for
/// error reporting only.
pub fn makespan_minutes(
    job: &CompletedJob,
    index: usize,
    config: &ReportConfig,
) -> Result<f64, ReportError> {
    let start = job.start_time.ok_or(ReportError::MissingField {
        index,
        field: "startTime",
    })?;
    let finish = job.finish_time.ok_or(ReportError::MissingField {
        index,
        field: "finishTime",
    })?;

    Ok(as_minutes(finish - start) - config.makespan_offset_minutes)
}

/// Makespans of all jobs completed by the end of the dump, longest first.
///
/// Only the last snapshot is consulted: its completed job list is
/// cumulative.
pub fn makespans(snapshots: &[Snapshot], config: &ReportConfig) -> Result<Vec<f64>, ReportError> {
    let index = snapshots.len().checked_sub(1).ok_or(ReportError::Empty)?;
    let completed = snapshots[index]
        .completed_jobs
        .as_ref()
        .ok_or(ReportError::MissingField {
            index,
            field: "completedJobs",
        })?;

    let mut makespans = completed
        .iter()
        .map(|job| makespan_minutes(job, index, config))
        .collect::<Result<Vec<_>, _>>()?;
    makespans.sort_by(|a, b| b.total_cmp(a));

    tracing::debug!("Computed {} makespans", makespans.len());
    Ok(makespans)
}
