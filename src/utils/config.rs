//! Configuration and constants for the CLI.

/// Current JSON report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Suffix identifying trace files; stripping it yields the companion artifact path
pub const DEFAULT_TRACE_SUFFIX: &str = ".trace";

/// Header label of the key column in the aligned table
pub const TIMESTAMP_COLUMN_LABEL: &str = "Timestamp (s)";

// Header of the single-run growth series
pub const SERIES_HEADER: &[&str] = &["Trace time (s)", "Unique Blocks", "Unique Edges"];
