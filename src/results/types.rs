//! Test result document types
//!
//! Mirrors the parts of the test runner's JSON reporter output that the
//! report needs. Every collection and title defaults to empty, whether
//! the key is missing or explicitly `null`, so that partially populated
//! documents still deserialize.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Read an explicit `null` as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Root of the results document
#[derive(Deserialize, Debug, Default)]
pub struct TestResultDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    pub suites: Vec<Suite>,
}

/// A file or describe block
#[derive(Deserialize, Debug, Default)]
pub struct Suite {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub specs: Vec<Spec>,
    /// Nested describe blocks
    #[serde(default, deserialize_with = "null_as_default")]
    pub suites: Vec<Suite>,
}

/// One test scenario
#[derive(Deserialize, Debug, Default)]
pub struct Spec {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tests: Vec<Test>,
}

/// One test of a spec (one per configured project)
#[derive(Deserialize, Debug, Default)]
pub struct Test {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<TestResult>,
}

/// One execution attempt, retries included
#[derive(Deserialize, Debug, Default)]
pub struct TestResult {
    #[serde(default)]
    pub status: Option<ResultStatus>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stdout: Vec<OutputChunk>,
}

/// Outcome of a single attempt
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ResultStatus {
    Passed,
    Failed,
    TimedOut,
    Interrupted,
    Skipped,
    #[serde(other)]
    Unknown,
}

impl TestResult {
    /// Whether this attempt passed. A missing status counts as not passed.
    pub fn passed(&self) -> bool {
        self.status == Some(ResultStatus::Passed)
    }
}

/// A captured fragment of console output
///
/// The reporter stores text output under `text` and binary output under
/// `buffer`; only the former is used.
#[derive(Deserialize, Debug, Default)]
pub struct OutputChunk {
    #[serde(default)]
    pub text: Option<Value>,
}

impl OutputChunk {
    /// Text payload, if this chunk carries one
    pub fn text(&self) -> Option<&str> {
        self.text.as_ref().and_then(Value::as_str)
    }
}

impl TestResultDocument {
    /// Visit every spec with the title of the suite that directly contains
    /// it, in document order. A suite's own specs come before its nested
    /// suites.
    pub fn specs(&self) -> Vec<(&str, &Spec)> {
        fn walk<'a>(suite: &'a Suite, out: &mut Vec<(&'a str, &'a Spec)>) {
            for spec in &suite.specs {
                out.push((suite.title.as_str(), spec));
            }
            for child in &suite.suites {
                walk(child, out);
            }
        }

        let mut out = Vec::new();
        for suite in &self.suites {
            walk(suite, &mut out);
        }
        out
    }
}

impl Spec {
    /// Concatenated console text of every attempt, in emission order
    pub fn console_output(&self) -> String {
        self.tests
            .iter()
            .flat_map(|test| &test.results)
            .flat_map(|result| &result.stdout)
            .filter_map(OutputChunk::text)
            .collect()
    }

    /// A spec passes only if every attempt of every test passed
    pub fn passed(&self) -> bool {
        self.tests
            .iter()
            .flat_map(|test| &test.results)
            .all(TestResult::passed)
    }
}
