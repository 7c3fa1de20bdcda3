//! Test runner results
//!
//! Reads the JSON document produced by the end-to-end test runner. The
//! document is the only input of the report.

mod loader;
mod types;

pub use loader::{load_results, parse_results, LoadedResults};
pub use types::*;
