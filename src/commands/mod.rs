//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod compare;
pub mod inspect;
pub mod models;
pub mod series;
pub mod utils;

// Re-export main command functions
pub use compare::{execute_compare, validate_args};
pub use inspect::inspect_trace_file;
pub use models::{CompareArgs, ReportFormat, SeriesArgs};
pub use series::execute_series;
pub use utils::display_version;
