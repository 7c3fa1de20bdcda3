//! Folding a results document into report records

use serde::Serialize;

use crate::common::config::Fallbacks;
use crate::results::TestResultDocument;

use super::scenario::ScenarioReport;

/// Content of the email summary, before rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Report {
    /// One record per spec, in document order
    Scenarios(Vec<ScenarioReport>),
    /// The document contained no specs
    NoTests,
    /// The document could not be parsed; carries the parse error message
    Unparseable(String),
}

impl Report {
    /// Scenario records, empty for the fixed failure reports
    pub fn scenarios(&self) -> &[ScenarioReport] {
        match self {
            Report::Scenarios(scenarios) => scenarios,
            Report::NoTests | Report::Unparseable(_) => &[],
        }
    }
}

/// Build report records for every spec of `doc`
pub fn synthesize(doc: &TestResultDocument, fallbacks: &Fallbacks) -> Report {
    let scenarios: Vec<_> = doc
        .specs()
        .into_iter()
        .map(|(suite_title, spec)| ScenarioReport::from_spec(suite_title, spec, fallbacks))
        .collect();

    if scenarios.is_empty() {
        tracing::warn!("results document contains no specs");
        return Report::NoTests;
    }

    tracing::info!(scenarios = scenarios.len(), "synthesized scenario reports");
    Report::Scenarios(scenarios)
}
