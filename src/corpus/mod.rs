//! Run directory loading.
//!
//! Discovers trace files in a run directory, parses them and orders
//! them chronologically. Also exposes per-run outcomes so that callers
//! can tell failed runs apart from empty ones.

pub mod loader;
pub mod run;

pub use loader::{discover_trace_files, load_corpus, CorpusOptions};
pub use run::{load_run, load_runs, RunOutcome};
