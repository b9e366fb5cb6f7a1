//! Coverage Growth CLI
//!
//! Builds cumulative coverage timelines from trace corpora and compares
//! fuzzing runs on a shared relative time axis.

use anyhow::{Context, Result};
use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use coverage_growth::aggregator::CoverageMetric;
use coverage_growth::commands::{
    display_version, execute_compare, execute_series, inspect_trace_file, validate_args,
    CompareArgs, ReportFormat, SeriesArgs,
};
use coverage_growth::parser::OrderingSource;
use coverage_growth::utils::config::DEFAULT_TRACE_SUFFIX;
use coverage_growth::utils::manifest::{build_run_specs, load_manifest};

/// Coverage Growth - cumulative coverage timelines for fuzzing campaigns
#[derive(Parser, Debug)]
#[command(name = "covgrowth")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Align several runs' coverage growth on one relative time axis
    Compare {
        /// Run directories, in column order
        #[arg(required_unless_present = "manifest", conflicts_with = "manifest")]
        directories: Vec<PathBuf>,

        /// Column label per run (repeat once per directory; defaults to directory names)
        #[arg(short, long = "label", conflicts_with = "manifest")]
        labels: Vec<String>,

        /// TOML manifest listing runs and labels
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Trace file suffix (overrides the manifest)
        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        suffix: Option<String>,

        /// Source of each trace's ordering key
        #[arg(long, value_enum, default_value_t = OrderingSource::Companion)]
        ordering: OrderingSource,

        /// Cumulative count to align
        #[arg(long, value_enum, default_value_t = CoverageMetric::Edges)]
        metric: CoverageMetric,

        /// Parser threads per run (0 = one per CPU)
        #[arg(short, long, default_value = "0")]
        jobs: usize,

        /// Report runs that fail to load as empty columns instead of aborting
        #[arg(long)]
        keep_going: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = ReportFormat::Csv)]
        format: ReportFormat,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print one run's cumulative growth series
    Series {
        /// Run directory
        directory: PathBuf,

        /// Trace file suffix
        #[arg(
            long,
            default_value = DEFAULT_TRACE_SUFFIX,
            value_parser = NonEmptyStringValueParser::new()
        )]
        suffix: String,

        /// Source of each trace's ordering key
        #[arg(long, value_enum, default_value_t = OrderingSource::Companion)]
        ordering: OrderingSource,

        /// Parser threads (0 = one per CPU)
        #[arg(short, long, default_value = "0")]
        jobs: usize,

        /// Print unique block/edge totals to stderr
        #[arg(long)]
        summary: bool,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse a single trace file and show its contents
    Inspect {
        /// Path to trace file
        #[arg(short, long)]
        file: PathBuf,

        /// Trace file suffix
        #[arg(
            long,
            default_value = DEFAULT_TRACE_SUFFIX,
            value_parser = NonEmptyStringValueParser::new()
        )]
        suffix: String,

        /// Source of the trace's ordering key
        #[arg(long, value_enum, default_value_t = OrderingSource::Companion)]
        ordering: OrderingSource,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Compare {
            directories,
            labels,
            manifest,
            suffix,
            ordering,
            metric,
            jobs,
            keep_going,
            format,
            output,
        } => {
            // Runs come from the manifest or from the positional lists
            let (runs, manifest_suffix) = match manifest {
                Some(path) => {
                    let manifest = load_manifest(&path)
                        .with_context(|| format!("Invalid manifest {}", path.display()))?;
                    (manifest.runs, Some(manifest.suffix))
                }
                None => (build_run_specs(&directories, &labels)?, None),
            };

            let args = CompareArgs {
                runs,
                suffix: suffix
                    .or(manifest_suffix)
                    .unwrap_or_else(|| DEFAULT_TRACE_SUFFIX.to_string()),
                ordering,
                metric,
                jobs,
                keep_going,
                format,
                output,
            };

            // Validate args first
            validate_args(&args)?;

            execute_compare(args)?;
        }

        Commands::Series {
            directory,
            suffix,
            ordering,
            jobs,
            summary,
            output,
        } => {
            execute_series(SeriesArgs {
                directory,
                suffix,
                ordering,
                jobs,
                print_summary: summary,
                output,
            })?;
        }

        Commands::Inspect {
            file,
            suffix,
            ordering,
        } => {
            inspect_trace_file(&file, &suffix, ordering)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
