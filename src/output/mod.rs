//! Report writers.
//!
//! This module handles writing results in various formats:
//! - Delimited aligned tables and single-run series
//! - JSON reports with per-run status

pub mod json;
pub mod table;
pub mod writer;

// Re-export main functions
pub use json::{build_report, write_report, CoverageReport, RunReport, RunStatus};
pub use table::{format_decimal, table_to_string, write_series, write_table};
pub use writer::open_output;
