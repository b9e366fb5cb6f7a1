//! Multi-run timeline alignment.
//!
//! Each run's series is anchored at its own first record. Alignment puts
//! all runs on one relative time axis: one row per distinct relative
//! time across all runs, one slot per run. A run without an observation
//! at a row's time keeps the value from the previous row.

use super::cumulative::RunTimeline;
use log::debug;
use serde::{Deserialize, Serialize};

/// Which cumulative count is aligned across runs
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum CoverageMetric {
    #[default]
    Edges,
    Blocks,
}

/// One aligned row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedRow {
    /// Relative time (seconds)
    pub timestamp: f64,

    /// Forward-filled cumulative count, one slot per run
    pub counts: Vec<usize>,
}

/// All runs on one relative time axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignedTable {
    pub run_count: usize,
    pub metric: CoverageMetric,

    /// Rows in ascending timestamp order
    pub rows: Vec<AlignedRow>,
}

impl AlignedTable {
    /// Values of one run's column, top to bottom, or None past the last run
    pub fn column(&self, run: usize) -> Option<impl Iterator<Item = usize> + '_> {
        (run < self.run_count).then(|| self.rows.iter().map(move |row| row.counts[run]))
    }

    pub fn timestamps(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|row| row.timestamp)
    }
}

/// An observed count for one run at one relative time
#[derive(Debug, Clone, Copy)]
struct Update {
    key: f64,
    run: usize,
    count: usize,
}

/// Align run timelines onto one relative time axis
///
/// **Public** - main entry point for cross-run comparison
///
/// # Arguments
/// * `runs` - One timeline per configured run; slot order follows this slice
/// * `metric` - Count to align (edges by default)
///
/// # Algorithm
/// 1. Collect every series point as an update (key, run, count)
/// 2. Sort updates by key and group equal keys
/// 3. Fold over the groups, deriving each row from the previous one
///    (all zeros before the first row): updated slots take
///    `max(update, previous)`, other slots carry the previous value
pub fn align_runs(runs: &[RunTimeline], metric: CoverageMetric) -> AlignedTable {
    let run_count = runs.len();

    let mut updates: Vec<Update> = runs
        .iter()
        .enumerate()
        .flat_map(|(run, timeline)| {
            timeline.series.iter().map(move |point| Update {
                key: point.relative_time,
                run,
                count: point.count(metric),
            })
        })
        .collect();

    // Stable, so equal keys keep run order
    updates.sort_by(|a, b| a.key.total_cmp(&b.key));

    let rows = updates
        .chunk_by(|a, b| a.key.total_cmp(&b.key).is_eq())
        .fold(Vec::<AlignedRow>::new(), |mut rows, group| {
            let previous = rows
                .last()
                .map_or_else(|| vec![0; run_count], |row| row.counts.clone());
            rows.push(AlignedRow {
                timestamp: group[0].key,
                counts: apply_updates(previous, group),
            });
            rows
        });

    debug!(
        "Aligned {} runs into {} rows ({:?})",
        run_count,
        rows.len(),
        metric
    );

    AlignedTable {
        run_count,
        metric,
        rows,
    }
}

/// Derive a row from the previous one and the updates sharing its key
fn apply_updates(previous: Vec<usize>, group: &[Update]) -> Vec<usize> {
    let mut row = previous;
    for update in group {
        // Cumulative counts never shrink; clamp against the previous row
        row[update.run] = row[update.run].max(update.count);
    }
    row
}
