//! Series command: one run's cumulative growth curve.

use super::models::SeriesArgs;
use crate::aggregator::reduce_run;
use crate::corpus::{load_corpus, CorpusOptions};
use crate::output::{open_output, write_series};
use crate::utils::manifest::validate_suffix;
use anyhow::{Context, Result};
use log::info;

/// Execute the series command
pub fn execute_series(args: SeriesArgs) -> Result<()> {
    validate_suffix(&args.suffix)?;

    let resolver = args.ordering.resolver(&args.suffix);
    let options = CorpusOptions {
        suffix: args.suffix.clone(),
        jobs: args.jobs,
    };

    let records = load_corpus(&args.directory, &options, resolver.as_ref())
        .with_context(|| format!("Failed to load run {}", args.directory.display()))?;
    let timeline = reduce_run(&records);

    if timeline.is_empty() {
        info!("No trace files in {}", args.directory.display());
    }

    let writer = open_output(args.output.as_deref()).context("Failed to open output")?;
    write_series(&timeline, writer).context("Failed to write series")?;

    if args.print_summary {
        let (blocks, edges) = timeline.totals();
        eprintln!("Traces: {}", timeline.len());
        eprintln!("Unique blocks: {} Unique edges: {}", blocks, edges);
    }

    Ok(())
}
