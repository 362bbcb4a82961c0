//! Snapshot types as emitted by the master's status endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Deserialize a string field that may be null, defaulting to empty string.
fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// One point-in-time observation of the scheduler.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Slots the scheduler wanted at sampling time
    pub required_slots: Option<i64>,

    /// Slots provided by running workers
    pub available_slots: Option<i64>,

    /// Jobs still in progress
    pub jobs: Option<Vec<Job>>,

    /// Workers known to the master
    pub slaves: Option<Vec<Worker>>,

    /// Jobs finished so far
    pub completed_jobs: Option<Vec<CompletedJob>>,
}

impl Snapshot {
    /// Total number of tasks across all in-progress jobs.
    ///
    /// Zero when the job list is absent.
    pub fn job_task_count(&self) -> usize {
        self.jobs
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(Job::task_count)
            .sum()
    }
}

/// A job that is still being worked on.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Option<i64>,

    /// Tasks split off this job that have not completed
    pub tasks: Option<Vec<Task>>,
}

impl Job {
    pub fn task_count(&self) -> usize {
        self.tasks.as_ref().map_or(0, Vec::len)
    }
}

/// A worker machine, keyed by IP.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub ip: String,

    pub max_slots: Option<i64>,

    /// Tasks running on this worker
    pub tasks: Option<Vec<Task>>,
}

impl Worker {
    pub fn task_count(&self) -> usize {
        self.tasks.as_ref().map_or(0, Vec::len)
    }
}

/// A unit of work assigned to a worker.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Option<i64>,
    pub job_id: Option<i64>,
    pub task_len: Option<i64>,
}

/// A job that has finished.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedJob {
    pub id: Option<i64>,
    pub start_time: Option<DateTime<Utc>>,
    pub finish_time: Option<DateTime<Utc>>,
}
