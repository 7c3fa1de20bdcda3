//! quote-report - email summary for shipping-quote end-to-end test runs
//!
//! The scenarios print marker lines (`MODE:`, `SHIPMENT_FROM:`,
//! `SHIPMENT_TO:`, `--- METHOD n: name ---` and per-field status lines)
//! while they run. This library reads the test runner's JSON results,
//! parses those markers out of each scenario's captured stdout and renders
//! the summary.

pub mod cli;
pub mod commands;
pub mod common;
pub mod report;
pub mod results;

pub use common::{Error, Result};
