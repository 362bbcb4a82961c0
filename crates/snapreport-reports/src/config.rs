//! Calibration constants for the reports.

/// Seconds between two consecutive snapshots in a dump.
///
/// The metrics collector polls the master on a fixed interval, so time is
/// implied by position rather than recorded per snapshot.
pub const SAMPLE_INTERVAL_SECS: u64 = 10;

/// Minutes of known measurement overhead subtracted from every makespan.
pub const MAKESPAN_OFFSET_MINUTES: f64 = 2.5;

/// Constants applied when building reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportConfig {
    /// Elapsed seconds between snapshot `i` and `i + 1`.
    pub sample_interval_secs: u64,
    /// Minutes subtracted from each measured makespan.
    pub makespan_offset_minutes: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            sample_interval_secs: SAMPLE_INTERVAL_SECS,
            makespan_offset_minutes: MAKESPAN_OFFSET_MINUTES,
        }
    }
}

impl ReportConfig {
    /// Elapsed seconds at the snapshot with the given index.
    pub fn elapsed_secs(&self, index: usize) -> u64 {
        index as u64 * self.sample_interval_secs
    }
}
