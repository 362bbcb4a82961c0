//! Per-worker load averages.
//!
//! Every (snapshot, worker) pair is one observation of how many tasks that
//! worker was running. Observations are folded into a running total and a
//! sample count per worker IP; the report keeps only the averages.

use snapreport_core::{Snapshot, Worker};
use std::collections::BTreeMap;

/// Running task total and sample count for one worker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadAccumulator {
    pub total_tasks: usize,
    pub samples: usize,
}

impl LoadAccumulator {
    pub fn observe(&mut self, tasks: usize) {
        self.total_tasks += tasks;
        self.samples += 1;
    }

    pub fn merge(&mut self, other: LoadAccumulator) {
        self.total_tasks += other.total_tasks;
        self.samples += other.samples;
    }

    /// Mean tasks per sample.
    pub fn average(&self) -> f64 {
        self.total_tasks as f64 / self.samples as f64
    }
}

/// Load observations grouped by worker IP.
#[derive(Debug, Clone, Default)]
pub struct WorkerLoad {
    by_worker: BTreeMap<String, LoadAccumulator>,
}

impl WorkerLoad {
    /// Record one observation of a worker.
    pub fn observe(&mut self, worker: &Worker) {
        self.by_worker
            .entry(worker.ip.clone())
            .or_default()
            .observe(worker.task_count());
    }

    /// Fold another set of observations into this one.
    pub fn merge(&mut self, other: WorkerLoad) {
        for (ip, acc) in other.by_worker {
            self.by_worker.entry(ip).or_default().merge(acc);
        }
    }

    pub fn get(&self, ip: &str) -> Option<&LoadAccumulator> {
        self.by_worker.get(ip)
    }

    /// Number of distinct workers seen.
    pub fn workers(&self) -> usize {
        self.by_worker.len()
    }

    /// Total observations across all workers.
    pub fn total_samples(&self) -> usize {
        self.by_worker.values().map(|acc| acc.samples).sum()
    }

    /// Average tasks per worker, highest first. Worker identities are dropped.
    pub fn averages(&self) -> Vec<f64> {
        let mut averages: Vec<f64> = self
            .by_worker
            .values()
            .map(LoadAccumulator::average)
            .collect();
        averages.sort_by(|a, b| b.total_cmp(a));
        averages
    }
}

/// Group the task counts of every worker in every snapshot by IP.
///
/// Snapshots without a worker list contribute nothing.
pub fn worker_load(snapshots: &[Snapshot]) -> WorkerLoad {
    let mut load = WorkerLoad::default();
    let mut skipped = 0;

    for snapshot in snapshots {
        match &snapshot.slaves {
            Some(slaves) => slaves.iter().for_each(|w| load.observe(w)),
            None => skipped += 1,
        }
    }

    tracing::debug!(
        "Observed {} workers over {} samples ({} snapshots without workers)",
        load.workers(),
        load.total_samples(),
        skipped
    );
    load
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapreport_core::parse_snapshots;

    fn worker(ip: &str, tasks: usize) -> Worker {
        Worker {
            ip: ip.to_string(),
            max_slots: None,
            tasks: Some(vec![Default::default(); tasks]),
        }
    }

    #[test]
    fn test_worker_load_averages() {
        let snapshots = parse_snapshots(
            r#"[
                {"slaves": null},
                {"slaves": [
                    {"ip": "10.0.0.1", "tasks": [{}, {}, {}, {}]},
                    {"ip": "10.0.0.2", "tasks": null}
                ]},
                {"slaves": [
                    {"ip": "10.0.0.1", "tasks": [{}, {}]},
                    {"ip": "10.0.0.2", "tasks": [{}]},
                    {"ip": "10.0.0.3", "tasks": [{}, {}, {}]}
                ]}
            ]"#,
        )
        .unwrap();

        let load = worker_load(&snapshots);
        assert_eq!(load.workers(), 3);
        assert_eq!(load.total_samples(), 5);
        assert_eq!(
            load.get("10.0.0.2"),
            Some(&LoadAccumulator {
                total_tasks: 1,
                samples: 2
            })
        );
        assert_eq!(load.averages(), vec![3.0, 3.0, 0.5]);
    }

    #[test]
    fn test_single_observation_worker() {
        let snapshots = parse_snapshots(r#"[{"slaves": [{"ip": "a", "tasks": [{}]}]}]"#).unwrap();
        assert_eq!(worker_load(&snapshots).averages(), vec![1.0]);
    }

    #[test]
    fn test_no_workers() {
        let snapshots = parse_snapshots(r#"[{}, {"slaves": null}, {"slaves": []}]"#).unwrap();
        let load = worker_load(&snapshots);
        assert_eq!(load.total_samples(), 0);
        assert!(load.averages().is_empty());
    }

    #[test]
    fn test_ip_labels_do_not_affect_output() {
        let mut a = WorkerLoad::default();
        a.observe(&worker("z", 1));
        a.observe(&worker("a", 6));
        a.observe(&worker("m", 3));

        let mut b = WorkerLoad::default();
        b.observe(&worker("1", 3));
        b.observe(&worker("2", 1));
        b.observe(&worker("3", 6));

        assert_eq!(a.averages(), b.averages());
        assert_eq!(a.averages(), vec![6.0, 3.0, 1.0]);
    }

    #[test]
    fn test_merge_is_order_independent() {
        let observations = [("a", 2), ("b", 5), ("a", 1), ("c", 0), ("b", 2)];

        let mut sequential = WorkerLoad::default();
        for (ip, tasks) in observations {
            sequential.observe(&worker(ip, tasks));
        }

        let mut left = WorkerLoad::default();
        let mut right = WorkerLoad::default();
        for (i, (ip, tasks)) in observations.iter().enumerate() {
            let side = if i % 2 == 0 { &mut left } else { &mut right };
            side.observe(&worker(ip, *tasks));
        }
        right.merge(left);

        assert_eq!(sequential.averages(), right.averages());
        assert_eq!(sequential.total_samples(), right.total_samples());
        assert_eq!(sequential.get("a"), right.get("a"));
    }
}
