//! Cumulative coverage reduction.
//!
//! Folds a run's chronologically ordered trace records into a growth
//! curve: after each record, the number of unique blocks and edges seen
//! so far in that run. Set union is monotonic, so both counts never
//! decrease.

use crate::parser::TraceRecord;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::timeline::CoverageMetric;

/// Cumulative coverage after one record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoveragePoint {
    /// Seconds since the run's first record
    pub relative_time: f64,

    /// Unique blocks seen up to and including this record
    pub unique_blocks: usize,

    /// Unique edges seen up to and including this record
    pub unique_edges: usize,
}

impl CoveragePoint {
    /// Count for the given metric
    pub fn count(&self, metric: CoverageMetric) -> usize {
        match metric {
            CoverageMetric::Blocks => self.unique_blocks,
            CoverageMetric::Edges => self.unique_edges,
        }
    }
}

/// Growth curve of one run
///
/// An empty run (no trace files) has no start timestamp and no points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunTimeline {
    /// Ordering key of the run's first record
    pub start_timestamp: Option<f64>,

    /// One point per record, in record order
    pub series: Vec<CoveragePoint>,
}

impl RunTimeline {
    /// The explicit result for a run without records
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Number of records folded into this timeline
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Final (unique_blocks, unique_edges) of the run
    pub fn totals(&self) -> (usize, usize) {
        self.series
            .last()
            .map_or((0, 0), |p| (p.unique_blocks, p.unique_edges))
    }
}

/// Reduce ordered trace records into a run timeline
///
/// **Public** - main entry point for per-run aggregation
///
/// # Arguments
/// * `records` - Records sorted by ordering key (as returned by the corpus loader)
///
/// # Returns
/// The run's growth curve, or `RunTimeline::empty()` for no records
pub fn reduce_run(records: &[TraceRecord]) -> RunTimeline {
    let Some(first) = records.first() else {
        debug!("No records to reduce, run is empty");
        return RunTimeline::empty();
    };
    let start = first.ordering_key;

    let mut seen_blocks: HashSet<u64> = HashSet::new();
    let mut seen_edges: HashSet<u64> = HashSet::new();

    let series: Vec<CoveragePoint> = records
        .iter()
        .map(|record| {
            seen_blocks.extend(&record.blocks);
            seen_edges.extend(&record.edges);
            CoveragePoint {
                relative_time: record.ordering_key - start,
                unique_blocks: seen_blocks.len(),
                unique_edges: seen_edges.len(),
            }
        })
        .collect();

    debug!(
        "Reduced {} records: {} unique blocks, {} unique edges",
        series.len(),
        seen_blocks.len(),
        seen_edges.len()
    );

    RunTimeline {
        start_timestamp: Some(start),
        series,
    }
}
