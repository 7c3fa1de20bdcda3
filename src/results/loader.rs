//! Loading the results document from disk

use std::io;
use std::path::Path;

use serde_json::Value;

use crate::common::{Error, Result};

use super::types::TestResultDocument;

/// Outcome of looking for the results document
#[derive(Debug)]
pub enum LoadedResults {
    /// No document at the given path; nothing to report
    Missing,
    /// The file exists but is not a results document
    Malformed(Error),
    /// A parsed document
    Document(TestResultDocument),
}

/// Load the results document at `path`
///
/// A missing file and an unparseable file are both expected outcomes and
/// are returned as variants. Only I/O failures on an existing file are
/// errors.
pub fn load_results(path: &Path) -> Result<LoadedResults> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "results document not found");
            return Ok(LoadedResults::Missing);
        }
        Err(e) => return Err(Error::file_read(path, &e)),
    };

    Ok(parse_results(path, &content))
}

/// Parse results document text, attributing errors to `path`
///
/// A JSON root other than an object or `null` has no `suites` and reads as
/// an empty document.
pub fn parse_results(path: &Path, content: &str) -> LoadedResults {
    match serde_json::from_str::<Value>(content) {
        Err(e) => return LoadedResults::Malformed(Error::input_malformed(path, e)),
        Ok(Value::Null) => {
            return LoadedResults::Malformed(Error::input_malformed(
                path,
                "expected an object at the document root, found null",
            ))
        }
        Ok(Value::Object(_)) => {}
        Ok(_) => {
            tracing::warn!(path = %path.display(), "results document root is not an object");
            return LoadedResults::Document(TestResultDocument::default());
        }
    }

    match serde_json::from_str::<TestResultDocument>(content) {
        Ok(doc) => {
            tracing::debug!(suites = doc.suites.len(), "parsed results document");
            LoadedResults::Document(doc)
        }
        Err(e) => LoadedResults::Malformed(Error::input_malformed(path, e)),
    }
}
