use crate::parser::{parse_trace_file, OrderingSource};
use crate::utils::manifest::validate_suffix;
use anyhow::{Context, Result};
use std::path::Path;

/// Parse a single trace file and print what it contains
pub fn inspect_trace_file(file_path: &Path, suffix: &str, ordering: OrderingSource) -> Result<()> {
    validate_suffix(suffix)?;
    println!("Inspecting trace: {}", file_path.display());

    let resolver = ordering.resolver(suffix);
    let record = parse_trace_file(file_path, resolver.as_ref())
        .with_context(|| format!("Invalid trace file {}", file_path.display()))?;

    println!("✓ Valid trace file");
    println!("  Unique blocks: {}", record.blocks.len());
    println!("  Unique edges:  {}", record.edges.len());
    println!("  Ordering key:  {} ({})", record.ordering_key, resolver.name());

    Ok(())
}
