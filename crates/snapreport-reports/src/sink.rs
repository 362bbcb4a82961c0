//! CSV output for reports.

use crate::ReportError;
use camino::Utf8Path;
use serde::Serialize;
use std::fs::File;
use std::io::Write;

/// A CSV writer that always starts with a header row.
///
/// Records are serialized without serde-derived headers so that a report
/// with zero records still produces the header.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl CsvSink<File> {
    /// Create (or truncate) the file at `path` and write the header.
    pub fn create(path: &Utf8Path, header: &[&str]) -> Result<Self, ReportError> {
        let file = File::create(path).map_err(|source| ReportError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::new(file, header)
    }
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W, header: &[&str]) -> Result<Self, ReportError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        writer.write_record(header)?;
        Ok(Self { writer, rows: 0 })
    }

    /// Append one data row.
    pub fn row<S: Serialize>(&mut self, record: S) -> Result<(), ReportError> {
        self.writer.serialize(record)?;
        self.rows += 1;
        Ok(())
    }

    /// Number of data rows written so far (header excluded).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush buffered rows and return the underlying writer.
    pub fn finish(self) -> Result<W, ReportError> {
        self.writer
            .into_inner()
            .map_err(|e| ReportError::Csv(e.into_error().into()))
    }
}
