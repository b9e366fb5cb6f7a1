//! JSON report writer.
//!
//! The JSON report keeps what the delimited table cannot: per-run status
//! and errors, totals, and each run's full growth curve.

use crate::aggregator::{AlignedRow, AlignedTable, CoverageMetric, CoveragePoint};
use crate::corpus::RunOutcome;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use chrono::Utc;
use log::debug;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::PathBuf;

/// Top-level report structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    /// Count aligned in `rows`
    pub metric: CoverageMetric,

    /// One entry per configured run, in column order
    pub runs: Vec<RunReport>,

    /// Aligned table rows
    pub rows: Vec<AlignedRow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Ok,
    Failed,
}

/// Per-run section of the report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub label: String,
    pub directory: PathBuf,
    pub status: RunStatus,

    /// Load error, for failed runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    pub trace_count: usize,
    pub unique_blocks: usize,
    pub unique_edges: usize,

    /// Absolute ordering key of the first trace
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_timestamp: Option<f64>,

    pub series: Vec<CoveragePoint>,
}

impl From<&RunOutcome> for RunReport {
    fn from(outcome: &RunOutcome) -> Self {
        let timeline = outcome.timeline_or_empty();
        let (unique_blocks, unique_edges) = timeline.totals();

        RunReport {
            label: outcome.spec.label.clone(),
            directory: outcome.spec.directory.clone(),
            status: if outcome.is_ok() {
                RunStatus::Ok
            } else {
                RunStatus::Failed
            },
            error: outcome.error().map(|e| e.to_string()),
            trace_count: timeline.len(),
            unique_blocks,
            unique_edges,
            start_timestamp: timeline.start_timestamp,
            series: timeline.series,
        }
    }
}

/// Assemble the report from run outcomes and their aligned table
pub fn build_report(outcomes: &[RunOutcome], table: &AlignedTable) -> CoverageReport {
    CoverageReport {
        version: SCHEMA_VERSION.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        metric: table.metric,
        runs: outcomes.iter().map(RunReport::from).collect(),
        rows: table.rows.clone(),
    }
}

/// Write the report as pretty-printed JSON
pub fn write_report<W: Write>(report: &CoverageReport, mut writer: W) -> Result<(), OutputError> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    writer.flush()?;

    debug!("Report written: {} runs, {} rows", report.runs.len(), report.rows.len());
    Ok(())
}
