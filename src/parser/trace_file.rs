//! Trace file decoder.
//!
//! A trace file is plain text:
//!
//! ```text
//! <block count B>
//! <edge count E>
//! <block id>      (B lines)
//! <edge id>       (E lines)
//! ```
//!
//! Duplicate identifiers collapse into the set.

use super::ordering::OrderingKeyResolver;
use super::schema::TraceRecord;
use crate::utils::error::{TraceError, TraceSection};
use log::debug;
use std::collections::HashSet;
use std::fs;
use std::iter::Enumerate;
use std::path::Path;
use std::str::{FromStr, Lines};

// Upper bound on pre-allocation; declared counts are untrusted
const MAX_PREALLOCATED_IDS: usize = 1 << 16;

/// Parse a trace file into a record
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `path` - Trace file path
/// * `resolver` - Source of the record's ordering key
///
/// # Errors
/// * `TraceError::Io` - File unreadable
/// * `TraceError::MissingCompanionArtifact` - Ordering key cannot be resolved
/// * `TraceError::MalformedTraceFile` - Non-integer where an integer is expected
/// * `TraceError::TruncatedTraceFile` - Declared count exceeds the content
pub fn parse_trace_file(
    path: &Path,
    resolver: &dyn OrderingKeyResolver,
) -> Result<TraceRecord, TraceError> {
    let ordering_key = resolver.resolve(path)?;

    let text = fs::read_to_string(path).map_err(|source| TraceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let (blocks, edges) = parse_trace_text(path, &text)?;

    debug!(
        "Parsed {}: {} blocks, {} edges, key {}",
        path.display(),
        blocks.len(),
        edges.len(),
        ordering_key
    );

    Ok(TraceRecord {
        path: path.to_path_buf(),
        blocks,
        edges,
        ordering_key,
    })
}

/// Decode trace text into (blocks, edges)
///
/// `path` is only used for diagnostics.
pub fn parse_trace_text(
    path: &Path,
    text: &str,
) -> Result<(HashSet<u64>, HashSet<u64>), TraceError> {
    let mut lines = TraceLines::new(path, text);

    let block_count = lines.read_header(0)?;
    let edge_count = lines.read_header(1)?;

    let blocks = lines.read_section(TraceSection::Blocks, block_count)?;
    let edges = lines.read_section(TraceSection::Edges, edge_count)?;

    let trailing = lines.remaining();
    if trailing > 0 {
        debug!(
            "Ignoring {} trailing lines in {}",
            trailing,
            path.display()
        );
    }

    Ok((blocks, edges))
}

/// Line cursor that tracks 1-based line numbers for diagnostics
struct TraceLines<'a> {
    path: &'a Path,
    lines: Enumerate<Lines<'a>>,
}

impl<'a> TraceLines<'a> {
    fn new(path: &'a Path, text: &'a str) -> Self {
        Self {
            path,
            lines: text.lines().enumerate(),
        }
    }

    /// Next line parsed as `T`, or None at end of input
    fn next_value<T: FromStr>(&mut self) -> Option<Result<T, TraceError>> {
        let (index, raw) = self.lines.next()?;
        let value = raw.trim();
        Some(value.parse::<T>().map_err(|_| TraceError::MalformedTraceFile {
            path: self.path.to_path_buf(),
            line: index + 1,
            content: value.to_string(),
        }))
    }

    fn read_header(&mut self, found: usize) -> Result<usize, TraceError> {
        self.next_value::<usize>().unwrap_or_else(|| {
            Err(TraceError::TruncatedTraceFile {
                path: self.path.to_path_buf(),
                section: TraceSection::Header,
                declared: 2,
                found,
            })
        })
    }

    fn read_section(
        &mut self,
        section: TraceSection,
        declared: usize,
    ) -> Result<HashSet<u64>, TraceError> {
        let mut ids = HashSet::with_capacity(declared.min(MAX_PREALLOCATED_IDS));

        for found in 0..declared {
            match self.next_value::<u64>() {
                Some(id) => {
                    ids.insert(id?);
                }
                None => {
                    return Err(TraceError::TruncatedTraceFile {
                        path: self.path.to_path_buf(),
                        section,
                        declared,
                        found,
                    })
                }
            }
        }

        Ok(ids)
    }

    fn remaining(self) -> usize {
        self.lines.filter(|(_, l)| !l.trim().is_empty()).count()
    }
}
