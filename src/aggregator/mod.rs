//! Aggregation of trace records into coverage growth curves.
//!
//! This module transforms loaded trace records into:
//! - Per-run cumulative coverage timelines
//! - A multi-run table aligned on relative time

pub mod cumulative;
pub mod timeline;

// Re-export main types and functions
pub use cumulative::{reduce_run, CoveragePoint, RunTimeline};
pub use timeline::{align_runs, AlignedRow, AlignedTable, CoverageMetric};
