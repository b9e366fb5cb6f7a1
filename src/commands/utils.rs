use crate::utils::config::{DEFAULT_TRACE_SUFFIX, SCHEMA_VERSION};

/// Display version information
pub fn display_version() {
    println!("coverage-growth v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!("Default trace suffix: {}", DEFAULT_TRACE_SUFFIX);
    println!();
    println!("Cumulative coverage timelines for fuzzing trace corpora.");
}
