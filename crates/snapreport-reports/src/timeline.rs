//! Slot demand over time.

use crate::config::ReportConfig;
use serde::Serialize;
use snapreport_core::Snapshot;

/// Required vs. available slots at one sampling point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotSample {
    /// Seconds since the first snapshot
    pub time: u64,
    pub required: Option<i64>,
    pub available: Option<i64>,
}

/// A [`SlotSample`] plus the tasks actually outstanding in jobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScalingSample {
    pub time: u64,
    pub required: Option<i64>,
    pub available: Option<i64>,
    /// Tasks across all in-progress jobs
    pub actual_required: usize,
}

/// Project each snapshot onto its slot counts.
pub fn slot_timeline(snapshots: &[Snapshot], config: &ReportConfig) -> Vec<SlotSample> {
    snapshots
        .iter()
        .enumerate()
        .map(|(i, s)| SlotSample {
            time: config.elapsed_secs(i),
            required: s.required_slots,
            available: s.available_slots,
        })
        .collect()
}

/// Like [`slot_timeline`], with the task demand of in-progress jobs.
pub fn scaling_timeline(snapshots: &[Snapshot], config: &ReportConfig) -> Vec<ScalingSample> {
    snapshots
        .iter()
        .enumerate()
        .map(|(i, s)| ScalingSample {
            time: config.elapsed_secs(i),
            required: s.required_slots,
            available: s.available_slots,
            actual_required: s.job_task_count(),
        })
        .collect()
}
