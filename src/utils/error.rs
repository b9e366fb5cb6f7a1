//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a single trace file or a run directory
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing companion artifact {} for trace {}: {reason}", .companion.display(), .trace.display())]
    MissingCompanionArtifact {
        trace: PathBuf,
        companion: PathBuf,
        reason: String,
    },

    #[error("Cannot resolve ordering key for {}: {reason}", .path.display())]
    OrderingKeyUnavailable { path: PathBuf, reason: String },

    #[error("Malformed trace file {} at line {line}: expected an integer, found {content:?}", .path.display())]
    MalformedTraceFile {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("Truncated trace file {}: {section} section declares {declared} entries but only {found} are present", .path.display())]
    TruncatedTraceFile {
        path: PathBuf,
        section: TraceSection,
        declared: usize,
        found: usize,
    },
}

impl TraceError {
    /// Path of the file the error was raised for
    pub fn path(&self) -> &std::path::Path {
        match self {
            TraceError::Io { path, .. }
            | TraceError::OrderingKeyUnavailable { path, .. }
            | TraceError::MalformedTraceFile { path, .. }
            | TraceError::TruncatedTraceFile { path, .. } => path,
            TraceError::MissingCompanionArtifact { trace, .. } => trace,
        }
    }
}

/// Section of a trace file, used in truncation diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceSection {
    Header,
    Blocks,
    Edges,
}

impl std::fmt::Display for TraceSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TraceSection::Header => "header",
            TraceSection::Blocks => "block",
            TraceSection::Edges => "edge",
        };
        f.write_str(name)
    }
}

/// Errors in the run configuration (CLI lists or manifest)
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Label count ({labels}) does not match run count ({runs})")]
    LabelCountMismatch { labels: usize, runs: usize },

    #[error("No runs configured")]
    EmptyRunList,

    #[error("Trace suffix cannot be empty")]
    EmptySuffix,

    #[error("Invalid run configuration: {0}")]
    InvalidRun(String),

    #[error("Failed to read manifest: {0}")]
    ManifestRead(#[from] std::io::Error),

    #[error("Manifest TOML parse error: {0}")]
    ManifestParse(#[from] toml::de::Error),
}

/// Errors that can occur during report output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to write delimited row: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
