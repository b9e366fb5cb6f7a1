//! Ordering key resolution.
//!
//! A trace's own timestamp is unreliable (trace files get rewritten or
//! regenerated), so the key that sequences records within a run comes
//! from a pluggable source. The default reads the modification time of
//! the companion artifact: the trace path with its suffix stripped.

use crate::utils::error::TraceError;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of a trace record's ordering key
pub trait OrderingKeyResolver: Send + Sync {
    /// Resolve the ordering key (seconds) for the trace at `trace_path`
    fn resolve(&self, trace_path: &Path) -> Result<f64, TraceError>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// Ordering sources selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OrderingSource {
    /// Modification time of the companion artifact (trace path minus suffix)
    #[default]
    Companion,
    /// Modification time of the trace file itself
    TraceMtime,
    /// First run of digits in the trace file name
    FileName,
}

impl OrderingSource {
    /// Build the resolver for this source
    pub fn resolver(self, suffix: &str) -> Box<dyn OrderingKeyResolver> {
        match self {
            OrderingSource::Companion => Box::new(CompanionMtimeResolver::new(suffix)),
            OrderingSource::TraceMtime => Box::new(TraceMtimeResolver),
            OrderingSource::FileName => Box::new(FileNameSequenceResolver::new(suffix)),
        }
    }
}

/// Uses the companion artifact's modification time
#[derive(Debug, Clone)]
pub struct CompanionMtimeResolver {
    suffix: String,
}

impl CompanionMtimeResolver {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    /// Companion artifact path for a trace, or None if the name lacks the suffix
    ///
    /// An empty suffix never yields a companion: the trace would be its own.
    pub fn companion_path(&self, trace_path: &Path) -> Option<PathBuf> {
        if self.suffix.is_empty() {
            return None;
        }
        let name = trace_path.file_name()?.to_str()?;
        let stem = name.strip_suffix(self.suffix.as_str())?;
        if stem.is_empty() {
            return None;
        }
        Some(trace_path.with_file_name(stem))
    }
}

impl OrderingKeyResolver for CompanionMtimeResolver {
    fn resolve(&self, trace_path: &Path) -> Result<f64, TraceError> {
        let Some(companion) = self.companion_path(trace_path) else {
            return Err(TraceError::MissingCompanionArtifact {
                trace: trace_path.to_path_buf(),
                companion: trace_path.to_path_buf(),
                reason: if self.suffix.is_empty() {
                    "trace suffix is empty".to_string()
                } else {
                    format!("file name does not end with {:?}", self.suffix)
                },
            });
        };

        modified_seconds(&companion).map_err(|e| TraceError::MissingCompanionArtifact {
            trace: trace_path.to_path_buf(),
            companion,
            reason: e.to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "companion-mtime"
    }
}

/// Uses the trace file's own modification time
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceMtimeResolver;

impl OrderingKeyResolver for TraceMtimeResolver {
    fn resolve(&self, trace_path: &Path) -> Result<f64, TraceError> {
        modified_seconds(trace_path).map_err(|source| TraceError::Io {
            path: trace_path.to_path_buf(),
            source,
        })
    }

    fn name(&self) -> &'static str {
        "trace-mtime"
    }
}

/// Largest sequence number an f64 key holds exactly
const MAX_EXACT_SEQUENCE: u64 = 1 << 53;

/// Uses a sequence number embedded in the file name (e.g. `id:000042,...`)
#[derive(Debug, Clone)]
pub struct FileNameSequenceResolver {
    suffix: String,
}

impl FileNameSequenceResolver {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }
}

impl OrderingKeyResolver for FileNameSequenceResolver {
    fn resolve(&self, trace_path: &Path) -> Result<f64, TraceError> {
        let unavailable = |reason: &str| TraceError::OrderingKeyUnavailable {
            path: trace_path.to_path_buf(),
            reason: reason.to_string(),
        };

        let name = trace_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| unavailable("file name is not valid UTF-8"))?;
        let name = name.strip_suffix(self.suffix.as_str()).unwrap_or(name);

        let digits: String = name
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if digits.is_empty() {
            return Err(unavailable("file name contains no sequence number"));
        }

        match digits.parse::<u64>() {
            Ok(n) if n <= MAX_EXACT_SEQUENCE => Ok(n as f64),
            _ => Err(unavailable("sequence number out of range")),
        }
    }

    fn name(&self) -> &'static str {
        "file-name"
    }
}

/// Modification time of `path` in seconds relative to the Unix epoch
fn modified_seconds(path: &Path) -> std::io::Result<f64> {
    let modified = fs::metadata(path)?.modified()?;
    Ok(system_time_seconds(modified))
}

fn system_time_seconds(time: SystemTime) -> f64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs_f64(),
        Err(e) => -e.duration().as_secs_f64(),
    }
}
