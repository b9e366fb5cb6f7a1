//! Trace parsing and record definitions.
//!
//! This module handles:
//! - Decoding the plain-text trace format
//! - Resolving each record's ordering key
//! - Defining the parsed record type

pub mod ordering;
pub mod schema;
pub mod trace_file;

// Re-export main types
pub use ordering::{
    CompanionMtimeResolver, FileNameSequenceResolver, OrderingKeyResolver, OrderingSource,
    TraceMtimeResolver,
};
pub use schema::TraceRecord;
pub use trace_file::{parse_trace_file, parse_trace_text};
