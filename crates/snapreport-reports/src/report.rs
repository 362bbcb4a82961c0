//! Report selection and the load/aggregate/write pipeline.

use crate::ReportError;
use crate::balancing::worker_load;
use crate::config::ReportConfig;
use crate::makespan::makespans;
use crate::sink::CsvSink;
use crate::timeline::{scaling_timeline, slot_timeline};
use camino::Utf8Path;
use snapreport_core::{Snapshot, load_snapshots};
use std::io::Write;

/// The available reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    /// Required and available slots over time
    Timeline,
    /// Timeline plus outstanding job tasks
    Scaling,
    /// Average running tasks per worker
    Balancing,
    /// Completed job makespans in minutes
    Makespan,
}

impl Report {
    pub const ALL: [Report; 4] = [
        Report::Timeline,
        Report::Scaling,
        Report::Balancing,
        Report::Makespan,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Timeline => "timeline",
            Self::Scaling => "scaling",
            Self::Balancing => "balancing",
            Self::Makespan => "makespan",
        }
    }

    /// Column names of the header row.
    pub fn header(&self) -> &'static [&'static str] {
        match self {
            Self::Timeline => &["Time", "Required", "Available"],
            Self::Scaling => &["Time", "Required", "Available", "Actual required"],
            Self::Balancing => &["Average tasks running"],
            Self::Makespan => &["Makespan"],
        }
    }

    /// Aggregate `snapshots` and write the data rows to `sink`.
    pub fn write<W: Write>(
        &self,
        snapshots: &[Snapshot],
        config: &ReportConfig,
        sink: &mut CsvSink<W>,
    ) -> Result<(), ReportError> {
        match self {
            Self::Timeline => {
                for sample in slot_timeline(snapshots, config) {
                    sink.row(sample)?;
                }
            }
            Self::Scaling => {
                for sample in scaling_timeline(snapshots, config) {
                    sink.row(sample)?;
                }
            }
            Self::Balancing => {
                for average in worker_load(snapshots).averages() {
                    sink.row((average,))?;
                }
            }
            Self::Makespan => {
                for makespan in makespans(snapshots, config)? {
                    sink.row((makespan,))?;
                }
            }
        }
        Ok(())
    }
}

/// Load the dump at `input`, build `report`, and write it to `output`.
///
/// Returns the number of data rows written. The output file is only
/// created once the input has been parsed.
pub fn generate(
    report: Report,
    input: &Utf8Path,
    output: &Utf8Path,
    config: &ReportConfig,
) -> Result<usize, ReportError> {
    let snapshots = load_snapshots(input)?;

    let mut sink = CsvSink::create(output, report.header())?;
    report.write(&snapshots, config, &mut sink)?;
    let rows = sink.rows();
    sink.finish()?;

    tracing::info!("Wrote {} report ({} rows) to {}", report.name(), rows, output);
    Ok(rows)
}
