//! Coverage Growth
//!
//! Reconstructs cumulative coverage timelines from directories of
//! per-input trace files (one directory per fuzzing run), and aligns
//! several runs on a shared relative time axis for comparison.
//!
//! Pipeline: run directory → [`corpus`] → ordered
//! [`parser::TraceRecord`]s → [`aggregator::reduce_run`] →
//! [`aggregator::align_runs`] → [`output`].
//!
//! ## Getting Started
//!
//! ```bash
//! covgrowth compare runs/honeybee runs/inst --label "Honeybee" --label "Clang SW"
//! ```

pub mod aggregator;
pub mod commands;
pub mod corpus;
pub mod output;
pub mod parser;
pub mod utils;
