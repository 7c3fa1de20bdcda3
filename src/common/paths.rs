//! Well-known file locations
//!
//! The results document and the rendered report live next to each other in
//! the working directory of the CI job. The configuration file lives in the
//! platform config directory.

use std::path::PathBuf;

/// Name used for the configuration directory
const APP_NAME: &str = "quote-report";

/// File written by the test runner's JSON reporter
pub const RESULTS_FILE: &str = "test-results.json";

/// File picked up by the CI job as the email body
pub const REPORT_FILE: &str = "email-body.txt";

/// Default path of the results document, relative to the working directory
pub fn default_results_path() -> PathBuf {
    PathBuf::from(RESULTS_FILE)
}

/// Default path of the rendered report, relative to the working directory
pub fn default_report_path() -> PathBuf {
    PathBuf::from(REPORT_FILE)
}

/// Get the configuration directory path
///
/// Uses the directories crate for platform-appropriate locations:
/// - Linux: `~/.config/quote-report/`
/// - macOS: `~/Library/Application Support/quote-report/`
/// - Windows: `%APPDATA%\quote-report\`
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
