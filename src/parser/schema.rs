//! Parsed trace record definitions.

use std::collections::HashSet;
use std::path::PathBuf;

/// One decoded trace file
///
/// Identifier sets are run-local: identifiers from different runs are
/// never compared or merged.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceRecord {
    /// Trace file this record was decoded from
    pub path: PathBuf,

    /// Unique basic block identifiers observed in this trace
    pub blocks: HashSet<u64>,

    /// Unique edge identifiers observed in this trace
    pub edges: HashSet<u64>,

    /// Timestamp (seconds) used to sequence records within a run
    pub ordering_key: f64,
}

impl TraceRecord {
    pub fn new(
        path: impl Into<PathBuf>,
        blocks: impl IntoIterator<Item = u64>,
        edges: impl IntoIterator<Item = u64>,
        ordering_key: f64,
    ) -> Self {
        Self {
            path: path.into(),
            blocks: blocks.into_iter().collect(),
            edges: edges.into_iter().collect(),
            ordering_key,
        }
    }
}

impl std::fmt::Display for TraceRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<Trace: blocks={}, edges={}, timestamp={}>",
            self.blocks.len(),
            self.edges.len(),
            self.ordering_key
        )
    }
}
