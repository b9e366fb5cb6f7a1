//! Compare command implementation.
//!
//! The compare command:
//! 1. Loads every configured run directory
//! 2. Reduces each run to a cumulative timeline
//! 3. Aligns the runs on one relative time axis
//! 4. Writes the aligned table (CSV) or a full report (JSON)

use super::models::{CompareArgs, ReportFormat};
use crate::aggregator::{align_runs, RunTimeline};
use crate::corpus::{load_runs, RunOutcome};
use crate::output::{build_report, open_output, write_report, write_table};
use crate::utils::manifest::validate_suffix;
use anyhow::{Context, Result};
use log::{info, warn};
use std::collections::HashSet;
use std::time::Instant;

/// Execute the compare command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Any run failed to load and `keep_going` is not set
/// * Output cannot be written
pub fn execute_compare(args: CompareArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Comparing {} runs", args.runs.len());

    // Step 1: Load and reduce runs
    info!("Step 1/3: Loading runs...");
    let resolver = args.ordering.resolver(&args.suffix);
    let outcomes = load_runs(&args.runs, &args.corpus_options(), resolver.as_ref());

    check_outcomes(&outcomes, args.keep_going)?;

    // Step 2: Align
    info!("Step 2/3: Aligning timelines on {:?}...", args.metric);
    let timelines: Vec<RunTimeline> = outcomes.iter().map(RunOutcome::timeline_or_empty).collect();
    let table = align_runs(&timelines, args.metric);

    // Step 3: Write
    info!("Step 3/3: Writing {} rows...", table.rows.len());
    let writer = open_output(args.output.as_deref()).context("Failed to open output")?;
    match args.format {
        ReportFormat::Csv => write_table(&table, &args.labels(), writer)
            .context("Failed to write aligned table")?,
        ReportFormat::Json => write_report(&build_report(&outcomes, &table), writer)
            .context("Failed to write JSON report")?,
    }

    info!("Compare completed in {:.2}s", start_time.elapsed().as_secs_f64());
    Ok(())
}

/// Abort on failed runs unless told to continue
///
/// **Private** - internal helper for execute_compare
fn check_outcomes(outcomes: &[RunOutcome], keep_going: bool) -> Result<()> {
    let failures: Vec<String> = outcomes
        .iter()
        .filter_map(|o| o.error().map(|e| format!("run '{}': {}", o.spec.label, e)))
        .collect();

    if failures.is_empty() {
        return Ok(());
    }

    if !keep_going {
        anyhow::bail!(
            "{} of {} runs failed to load (use --keep-going to report them as empty columns):\n  {}",
            failures.len(),
            outcomes.len(),
            failures.join("\n  ")
        );
    }

    warn!(
        "{} runs failed to load and are reported as empty columns",
        failures.len()
    );
    Ok(())
}

/// Validate compare arguments
///
/// **Public** - can be called before execute_compare for early validation
pub fn validate_args(args: &CompareArgs) -> Result<()> {
    if args.runs.is_empty() {
        anyhow::bail!("At least one run directory is required");
    }

    validate_suffix(&args.suffix)?;

    let mut seen = HashSet::new();
    for run in &args.runs {
        if run.label.trim().is_empty() {
            anyhow::bail!("Run label cannot be empty ({})", run.directory.display());
        }
        if !seen.insert(run.label.as_str()) {
            anyhow::bail!("Duplicate run label: {}", run.label);
        }
    }

    if args.jobs > 1024 {
        anyhow::bail!("jobs is too large (max 1024)");
    }

    Ok(())
}
