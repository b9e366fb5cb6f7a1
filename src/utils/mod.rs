//! Utility modules for configuration and error handling.

pub mod config;
pub mod error;
pub mod manifest;

// Re-export commonly used error types for convenience
pub use error::{ConfigError, OutputError, TraceError, TraceSection};
