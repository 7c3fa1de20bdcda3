//! End-to-end tests for the quote-report binary
//!
//! Each test runs the built binary inside its own temporary working
//! directory, the way the CI job runs it next to the test runner output.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Test context with a scratch working directory
struct TestContext {
    dir: TempDir,
    /// Config directory (XDG_CONFIG_HOME), kept empty unless a test writes one
    config_home: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_home = dir.path().join("xdg-config");
        fs::create_dir_all(&config_home).expect("Failed to create config dir");
        Self { dir, config_home }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Copy a fixture into the working directory as `test-results.json`
    fn with_results_fixture(&self, fixture: &str) {
        let source = fixtures_dir().join(fixture);
        fs::copy(&source, self.path("test-results.json")).expect("Failed to copy fixture");
    }

    fn with_results_text(&self, text: &str) {
        fs::write(self.path("test-results.json"), text).expect("Failed to write results");
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_quote-report"))
            .args(args)
            .current_dir(self.dir.path())
            .env("XDG_CONFIG_HOME", &self.config_home)
            .env("HOME", self.dir.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run quote-report")
    }

    fn report(&self) -> String {
        fs::read_to_string(self.path("email-body.txt")).expect("Report was not written")
    }
}

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Drop the `Time:` values so reports can be compared exactly
fn without_times(report: &str) -> String {
    report
        .lines()
        .map(|line| if line.starts_with("Time: ") { "Time: <now>" } else { line })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_generate_both_scenarios() {
    let ctx = TestContext::new();
    ctx.with_results_fixture("test-results.json");

    let output = ctx.run(&[]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout(&output).contains("Email report generated successfully"));

    let expected = "\
GET A QUOTE TEST SUMMARY : Ship to address
========================

Status: ✅ PASSED

Mode: Ship from Nigeria to US Address
Shipment from: Nigeria (sender address from form)
Shipment to: 1600 Amphitheatre Parkway, Mountain View, CA 94043, USA

Returned 2 shipping methods

---

METHOD 1: DHL Express
✅ last_mile_delivery_cost: 15.2
✅ shippo_cost: 30.75
✅ insurance_cost: 2.5
✅ vat: 12.5
✅ total_amount: 120.4
✅ service_shipment_cost: 60
✅ initial_service_shipment_cost: 55

METHOD 2: UPS Saver
❌ last_mile_delivery_cost: 0
❌ shippo_cost: NOT PRESENT
✅ vat: 9.1

---

Time: <now>

========================

GET A QUOTE TEST SUMMARY : Ship to warehouse
========================

Status: ❌ FAILED

Mode: Ship from Nigeria to Warehouse
Shipment from: Nigeria (sender address from form)
Shipment to: Delaware Warehouse

Returned 1 shipping methods

---

METHOD 1: Air Freight
✅ vat: 4.2
✅ total_amount: 88

---

Time: <now>";

    assert_eq!(without_times(&ctx.report()), expected);
}

#[test]
fn test_time_line_is_utc_iso() {
    let ctx = TestContext::new();
    ctx.with_results_fixture("test-results.json");
    assert!(ctx.run(&["generate"]).status.success());

    let report = ctx.report();
    let times: Vec<_> = report
        .lines()
        .filter_map(|line| line.strip_prefix("Time: "))
        .collect();
    assert_eq!(times.len(), 2);
    for time in times {
        assert!(time.ends_with('Z'), "unexpected time {time}");
        assert!(chrono_like(time), "unexpected time {time}");
    }
}

/// `YYYY-MM-DDTHH:MM:SS.mmmZ`
fn chrono_like(time: &str) -> bool {
    let bytes = time.as_bytes();
    bytes.len() == 24 && bytes[4] == b'-' && bytes[10] == b'T' && bytes[19] == b'.'
}

#[test]
fn test_missing_results_write_nothing() {
    let ctx = TestContext::new();

    let output = ctx.run(&["generate"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No test results found"));
    assert!(!ctx.path("email-body.txt").exists());
}

#[test]
fn test_missing_results_keep_previous_report() {
    let ctx = TestContext::new();
    fs::write(ctx.path("email-body.txt"), "previous\n").unwrap();

    assert!(ctx.run(&[]).status.success());
    assert_eq!(ctx.report(), "previous\n");
}

#[test]
fn test_no_specs_fixed_report() {
    let ctx = TestContext::new();
    ctx.with_results_fixture("no-specs.json");

    assert!(ctx.run(&[]).status.success());
    assert_eq!(
        without_times(&ctx.report()),
        "GET A QUOTE TEST SUMMARY\n========================\n\nStatus: ❌ FAILED\n\n\
         No tests found in test-results.json\n\nTime: <now>"
    );
}

#[test]
fn test_malformed_results_degrade() {
    let ctx = TestContext::new();
    ctx.with_results_text("{\"suites\": [");

    let output = ctx.run(&[]);
    assert!(output.status.success());

    let report = ctx.report();
    assert!(report.starts_with("GET A QUOTE TEST SUMMARY\n"));
    assert!(report.contains("Status: ❌ FAILED"));
    assert!(report.contains("Could not parse test-results.json: "));
}

#[test]
fn test_malformed_results_strict_fails_after_writing() {
    let ctx = TestContext::new();
    ctx.with_results_text("not json at all");

    let output = ctx.run(&["generate", "--strict"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("could not be parsed"));
    assert!(ctx.report().contains("Could not parse test-results.json"));
}

#[test]
fn test_explicit_paths() {
    let ctx = TestContext::new();
    let input = fixtures_dir().join("test-results.json");
    let output_path = ctx.path("out/summary.txt");

    let output = ctx.run(&[
        "generate",
        "--input",
        input.to_str().unwrap(),
        "--output",
        output_path.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(fs::read_to_string(&output_path)
        .unwrap()
        .contains("METHOD 1: DHL Express"));
    assert!(!ctx.path("email-body.txt").exists());
}

#[test]
fn test_config_file_fallbacks() {
    let ctx = TestContext::new();
    ctx.with_results_text(
        r#"{"suites": [{"title": "warehouseShipment.spec.js", "specs": [
            {"title": "ship it", "tests": [{"results": [{"status": "passed"}]}]}
        ]}]}"#,
    );
    let config = ctx.path("quote-report.toml");
    fs::write(
        &config,
        "[fallbacks]\nshipment_to_warehouse = \"Lagos Consolidation Hub\"\n",
    )
    .unwrap();

    let output = ctx.run(&["generate", "--config", config.to_str().unwrap()]);
    assert!(output.status.success());

    let report = ctx.report();
    assert!(report.contains("GET A QUOTE TEST SUMMARY : Ship to warehouse"));
    assert!(report.contains("Shipment to: Lagos Consolidation Hub"));
    assert!(report.contains("No shipping methods data available"));
}

#[test]
fn test_invalid_config_is_an_error() {
    let ctx = TestContext::new();
    ctx.with_results_fixture("test-results.json");
    let config = ctx.path("bad.toml");
    fs::write(&config, "[report]\nstrict = \"maybe\"\n").unwrap();

    let output = ctx.run(&["generate", "--config", config.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(!ctx.path("email-body.txt").exists());
}

#[test]
fn test_inspect_prints_json() {
    let ctx = TestContext::new();
    ctx.with_results_fixture("test-results.json");

    let output = ctx.run(&["inspect"]);
    assert!(output.status.success());
    assert!(!ctx.path("email-body.txt").exists());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["kind"], "scenarios");
    let scenarios = json["data"].as_array().unwrap();
    assert_eq!(scenarios.len(), 2);
    assert_eq!(scenarios[0]["variant"], "address");
    assert_eq!(scenarios[1]["status"], "failed");
    assert_eq!(scenarios[0]["methods"][1]["fields"]["shippo_cost"]["value"], "NOT PRESENT");
    assert_eq!(scenarios[0]["methods"][1]["fields"]["shippo_cost"]["status"], "absent");
}
