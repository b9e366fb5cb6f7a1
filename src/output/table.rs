//! Delimited table output.
//!
//! Pure formatting: rows are written exactly as computed, comma-separated,
//! with keys and counts in plain decimal.

use crate::aggregator::{AlignedTable, RunTimeline};
use crate::utils::config::{SERIES_HEADER, TIMESTAMP_COLUMN_LABEL};
use crate::utils::error::{ConfigError, OutputError};
use std::io::Write;
use std::iter;

/// Write the aligned table with a header of run labels
///
/// **Public** - main entry point for tabular output
///
/// # Arguments
/// * `table` - Aligned multi-run table
/// * `labels` - One label per run, in slot order
/// * `writer` - Destination
///
/// # Errors
/// * `OutputError::Config` - Label count differs from the table's run count
/// * `OutputError::Csv` / `OutputError::WriteFailed` - Write failure
pub fn write_table<W: Write>(
    table: &AlignedTable,
    labels: &[String],
    writer: W,
) -> Result<(), OutputError> {
    if labels.len() != table.run_count {
        return Err(ConfigError::LabelCountMismatch {
            labels: labels.len(),
            runs: table.run_count,
        }
        .into());
    }

    let mut csv = csv_writer(writer);
    csv.write_record(iter::once(TIMESTAMP_COLUMN_LABEL).chain(labels.iter().map(String::as_str)))?;

    for row in &table.rows {
        csv.write_record(
            iter::once(format_decimal(row.timestamp))
                .chain(row.counts.iter().map(|count| count.to_string())),
        )?;
    }

    csv.flush()?;
    Ok(())
}

/// Write one run's growth curve (time, unique blocks, unique edges)
pub fn write_series<W: Write>(timeline: &RunTimeline, writer: W) -> Result<(), OutputError> {
    let mut csv = csv_writer(writer);
    csv.write_record(SERIES_HEADER)?;

    for point in &timeline.series {
        csv.write_record([
            format_decimal(point.relative_time),
            point.unique_blocks.to_string(),
            point.unique_edges.to_string(),
        ])?;
    }

    csv.flush()?;
    Ok(())
}

/// Render the aligned table to a string
pub fn table_to_string(table: &AlignedTable, labels: &[String]) -> Result<String, OutputError> {
    let mut buffer = Vec::new();
    write_table(table, labels, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Plain decimal: integral values print without a fractional part
pub fn format_decimal(value: f64) -> String {
    value.to_string()
}

fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer)
}
