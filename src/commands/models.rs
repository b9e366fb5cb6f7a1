use std::path::PathBuf;

use crate::aggregator::CoverageMetric;
use crate::corpus::CorpusOptions;
use crate::parser::OrderingSource;
use crate::utils::config::DEFAULT_TRACE_SUFFIX;
use crate::utils::manifest::RunSpec;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    /// Comma-separated table
    #[default]
    Csv,
    /// JSON report with per-run status and series
    Json,
}

/// Arguments for the compare command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct CompareArgs {
    /// Runs in column order
    pub runs: Vec<RunSpec>,

    /// Trace file suffix
    pub suffix: String,

    /// Source of each record's ordering key
    pub ordering: OrderingSource,

    /// Count aligned across runs
    pub metric: CoverageMetric,

    /// Parser threads per run (0 = default)
    pub jobs: usize,

    /// Report failed runs as empty columns instead of aborting
    pub keep_going: bool,

    pub format: ReportFormat,

    /// Output path (stdout if None)
    pub output: Option<PathBuf>,
}

impl Default for CompareArgs {
    fn default() -> Self {
        Self {
            runs: Vec::new(),
            suffix: DEFAULT_TRACE_SUFFIX.to_string(),
            ordering: OrderingSource::default(),
            metric: CoverageMetric::default(),
            jobs: 0,
            keep_going: false,
            format: ReportFormat::default(),
            output: None,
        }
    }
}

impl CompareArgs {
    pub fn corpus_options(&self) -> CorpusOptions {
        CorpusOptions {
            suffix: self.suffix.clone(),
            jobs: self.jobs,
        }
    }

    pub fn labels(&self) -> Vec<String> {
        self.runs.iter().map(|run| run.label.clone()).collect()
    }
}

/// Arguments for the series command
#[derive(Debug, Clone)]
pub struct SeriesArgs {
    /// Run directory
    pub directory: PathBuf,

    pub suffix: String,
    pub ordering: OrderingSource,
    pub jobs: usize,

    /// Print unique block/edge totals to stderr
    pub print_summary: bool,

    /// Output path (stdout if None)
    pub output: Option<PathBuf>,
}

impl Default for SeriesArgs {
    fn default() -> Self {
        Self {
            directory: PathBuf::new(),
            suffix: DEFAULT_TRACE_SUFFIX.to_string(),
            ordering: OrderingSource::default(),
            jobs: 0,
            print_summary: false,
            output: None,
        }
    }
}
