//! Error types for the report generator
//!
//! Only genuine failures live here. Missing markers, missing cost fields and
//! empty result documents are recovered where they occur and never become
//! an `Error`.

use std::io;
use std::path::Path;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the report generator
#[derive(Error, Debug)]
pub enum Error {
    // === Input Errors ===
    #[error("Test results '{path}' could not be parsed: {message}")]
    InputMalformed { path: String, message: String },

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    #[error("Failed to write file '{path}': {error}")]
    FileWrite { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a malformed input error for a results file
    pub fn input_malformed(path: &Path, message: impl ToString) -> Self {
        Self::InputMalformed {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a file read error
    pub fn file_read(path: &Path, error: &io::Error) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }

    /// Create a file write error
    pub fn file_write(path: &Path, error: &io::Error) -> Self {
        Self::FileWrite {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }
}
