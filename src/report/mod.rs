//! Email summary generation
//!
//! Rebuilds a structured summary from the console text each scenario
//! printed while it ran. Parsing ([`markers`]), per-scenario records
//! ([`scenario`]), the document fold ([`synth`]) and text output
//! ([`render`]) are separate steps so each can be checked on its own.

pub mod markers;
pub mod render;
pub mod scenario;
pub mod synth;

use std::path::Path;

use crate::common::config::Fallbacks;
use crate::common::{Error, Result};
use crate::results::LoadedResults;

pub use markers::{ConsoleMarkers, CostField, FieldReading, FieldStatus, MethodSection};
pub use render::{format_time, render};
pub use scenario::{ScenarioReport, ScenarioStatus, ScenarioVariant, ShippingMethodReport};
pub use synth::{synthesize, Report};

/// What to do with a loaded results document
#[derive(Debug)]
pub enum Synthesis {
    /// No results document, nothing is written
    NothingToReport,
    /// A report built from the document
    Report(Report),
    /// The document could not be parsed; the report explains why
    Degraded { report: Report, error: Error },
}

/// Turn the loader outcome into a report
pub fn synthesize_loaded(loaded: LoadedResults, fallbacks: &Fallbacks) -> Synthesis {
    match loaded {
        LoadedResults::Missing => Synthesis::NothingToReport,
        LoadedResults::Document(doc) => Synthesis::Report(synthesize(&doc, fallbacks)),
        LoadedResults::Malformed(error) => {
            let message = match &error {
                Error::InputMalformed { message, .. } => message.clone(),
                other => other.to_string(),
            };
            Synthesis::Degraded {
                report: Report::Unparseable(message),
                error,
            }
        }
    }
}

/// Write the rendered report, replacing any previous content
pub fn write_report(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::file_write(parent, &e))?;
    }
    std::fs::write(path, text).map_err(|e| Error::file_write(path, &e))?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "wrote report");
    Ok(())
}
