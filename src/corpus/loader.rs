//! Trace corpus discovery and loading.
//!
//! Loading is fail-fast: one unparsable file fails the whole directory.
//! Files are parsed on a rayon pool, but results are gathered in
//! enumeration order, so both the returned order and the reported error
//! are deterministic.

use crate::parser::{parse_trace_file, OrderingKeyResolver, TraceRecord};
use crate::utils::config::DEFAULT_TRACE_SUFFIX;
use crate::utils::error::TraceError;
use log::{debug, info, warn};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::fs;
use std::path::{Path, PathBuf};

/// Options for loading a run directory
#[derive(Debug, Clone)]
pub struct CorpusOptions {
    /// Trace file suffix
    pub suffix: String,

    /// Parser threads (0 = rayon default)
    pub jobs: usize,
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_TRACE_SUFFIX.to_string(),
            jobs: 0,
        }
    }
}

/// List trace files in a directory
///
/// Returns regular files whose name ends with `suffix`, sorted by file
/// name so that ordering-key ties break the same way on every filesystem.
pub fn discover_trace_files(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>, TraceError> {
    let io_error = |source: std::io::Error| TraceError::Io {
        path: dir.to_path_buf(),
        source,
    };

    if suffix.is_empty() {
        return Err(io_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "trace suffix cannot be empty",
        )));
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        let matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(suffix));
        if matches && path.is_file() {
            paths.push(path);
        }
    }

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Load every trace file in `dir`, sorted by ordering key
///
/// **Public** - main entry point for corpus loading
///
/// # Returns
/// Records in ascending ordering-key order (stable: ties keep file-name
/// order). An empty directory yields an empty vector.
///
/// # Errors
/// The first failing file in enumeration order; no partial results.
pub fn load_corpus(
    dir: &Path,
    options: &CorpusOptions,
    resolver: &dyn OrderingKeyResolver,
) -> Result<Vec<TraceRecord>, TraceError> {
    let paths = discover_trace_files(dir, &options.suffix)?;
    info!(
        "Found {} trace files in {} (ordering: {})",
        paths.len(),
        dir.display(),
        resolver.name()
    );

    let parse_all = || -> Vec<Result<TraceRecord, TraceError>> {
        paths
            .par_iter()
            .map(|path| parse_trace_file(path, resolver))
            .collect()
    };

    let results = match thread_pool(options.jobs) {
        Some(pool) => pool.install(parse_all),
        None => parse_all(),
    };

    let mut records = results.into_iter().collect::<Result<Vec<_>, _>>()?;
    records.sort_by(|a, b| a.ordering_key.total_cmp(&b.ordering_key));

    debug!("Loaded {} records from {}", records.len(), dir.display());
    Ok(records)
}

fn thread_pool(jobs: usize) -> Option<ThreadPool> {
    if jobs == 0 {
        return None;
    }
    match ThreadPoolBuilder::new().num_threads(jobs).build() {
        Ok(pool) => Some(pool),
        Err(e) => {
            warn!("Failed to build a {}-thread parser pool, using the global pool: {}", jobs, e);
            None
        }
    }
}
