//! Plain-text rendering of the email summary

use chrono::{DateTime, SecondsFormat, Utc};

use super::markers::CostField;
use super::scenario::{ScenarioReport, ScenarioStatus, ShippingMethodReport};
use super::synth::Report;

const TITLE: &str = "GET A QUOTE TEST SUMMARY";
const RULE: &str = "========================";

/// Render `report` as the email body
///
/// `source` names the results file in the fixed failure reports.
pub fn render(report: &Report, source: &str, generated_at: DateTime<Utc>) -> String {
    let time = format_time(generated_at);
    match report {
        Report::Scenarios(scenarios) => {
            let divider = format!("\n{RULE}\n\n");
            scenarios
                .iter()
                .map(|scenario| render_scenario(scenario, &time))
                .collect::<Vec<_>>()
                .join(divider.as_str())
        }
        Report::NoTests => render_failure(&format!("No tests found in {source}"), &time),
        Report::Unparseable(message) => {
            render_failure(&format!("Could not parse {source}: {message}"), &time)
        }
    }
}

/// Timestamp as printed on the `Time:` line, e.g. `2026-10-18T09:30:00.123Z`
pub fn format_time(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn render_failure(line: &str, time: &str) -> String {
    format!(
        "{TITLE}\n{RULE}\n\nStatus: {}\n\n{line}\n\nTime: {time}\n",
        ScenarioStatus::Failed.label()
    )
}

fn render_scenario(scenario: &ScenarioReport, time: &str) -> String {
    let mut out = format!(
        "{TITLE} : {}\n{RULE}\n\nStatus: {}\n\nMode: {}\nShipment from: {}\nShipment to: {}\n\n",
        scenario.variant.label(),
        scenario.status.label(),
        scenario.mode,
        scenario.shipment_from,
        scenario.shipment_to,
    );

    if scenario.method_count == 0 {
        out.push_str("No shipping methods data available\n\n");
    } else {
        out.push_str(&format!(
            "Returned {} shipping methods\n\n---\n\n",
            scenario.method_count
        ));
        for method in &scenario.methods {
            render_method(&mut out, method);
        }
    }

    out.push_str(&format!("---\n\nTime: {time}\n"));
    out
}

fn render_method(out: &mut String, method: &ShippingMethodReport) {
    out.push_str(&format!("METHOD {}: {}\n", method.index, method.name));
    for field in CostField::ALL {
        if let Some(reading) = method.fields.get(&field) {
            out.push_str(&format!(
                "{} {}: {}\n",
                reading.status.glyph(),
                field,
                reading.value
            ));
        }
    }
    out.push('\n');
}
