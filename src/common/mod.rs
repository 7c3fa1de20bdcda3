//! Common utilities shared by the CLI and the report pipeline

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;

pub use error::{Error, Result};
