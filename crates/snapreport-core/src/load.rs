//! Loading snapshot dumps from disk.

use crate::types::Snapshot;
use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        source: std::io::Error,
    },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a snapshot dump: a JSON array of snapshot objects.
pub fn parse_snapshots(content: &str) -> Result<Vec<Snapshot>, SnapshotError> {
    Ok(serde_json::from_str(content)?)
}

/// Read and parse a snapshot dump.
///
/// The whole file is loaded into memory.
pub fn load_snapshots(path: &Utf8Path) -> Result<Vec<Snapshot>, SnapshotError> {
    let content = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_owned(),
        source,
    })?;
    let snapshots = parse_snapshots(&content)?;

    tracing::debug!("Loaded {} snapshots from {}", snapshots.len(), path);
    Ok(snapshots)
}
