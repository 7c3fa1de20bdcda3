//! Per-scenario report records

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::common::config::Fallbacks;
use crate::results::Spec;

use super::markers::{ConsoleMarkers, CostField, FieldReading, MethodSection};

static WAREHOUSE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)warehouse").unwrap());

/// Which of the two quote flows a scenario exercised
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioVariant {
    Address,
    Warehouse,
}

impl ScenarioVariant {
    /// Classify from the spec title, the suite title, then the printed mode
    pub fn classify(spec_title: &str, suite_title: &str, mode: Option<&str>) -> Self {
        let is_warehouse = [Some(spec_title), Some(suite_title), mode]
            .into_iter()
            .flatten()
            .any(|text| WAREHOUSE_RE.is_match(text));

        if is_warehouse {
            ScenarioVariant::Warehouse
        } else {
            ScenarioVariant::Address
        }
    }

    /// Summary header suffix
    pub fn label(self) -> &'static str {
        match self {
            ScenarioVariant::Address => "Ship to address",
            ScenarioVariant::Warehouse => "Ship to warehouse",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioStatus {
    Passed,
    Failed,
}

impl ScenarioStatus {
    pub fn label(self) -> &'static str {
        match self {
            ScenarioStatus::Passed => "✅ PASSED",
            ScenarioStatus::Failed => "❌ FAILED",
        }
    }
}

/// One shipping method as it appears in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShippingMethodReport {
    /// Position of appearance, starting at 1
    pub index: usize,
    pub name: String,
    pub fields: BTreeMap<CostField, FieldReading>,
}

impl ShippingMethodReport {
    fn from_section(index: usize, section: MethodSection) -> Self {
        Self {
            index,
            name: section.name.unwrap_or_else(|| format!("Method {index}")),
            fields: section.fields,
        }
    }
}

/// Everything the report says about one spec
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioReport {
    pub title: String,
    pub variant: ScenarioVariant,
    pub status: ScenarioStatus,
    pub mode: String,
    pub shipment_from: String,
    pub shipment_to: String,
    /// Count shown on the `Returned N shipping methods` line
    pub method_count: usize,
    pub methods: Vec<ShippingMethodReport>,
}

impl ScenarioReport {
    /// Build the record for `spec`, contained in a suite titled `suite_title`
    pub fn from_spec(suite_title: &str, spec: &Spec, fallbacks: &Fallbacks) -> Self {
        let console = spec.console_output();
        let markers = ConsoleMarkers::parse(&console);
        let status = if spec.passed() {
            ScenarioStatus::Passed
        } else {
            ScenarioStatus::Failed
        };
        Self::from_markers(&spec.title, suite_title, status, markers, fallbacks)
    }

    /// Build the record from already parsed markers
    pub fn from_markers(
        spec_title: &str,
        suite_title: &str,
        status: ScenarioStatus,
        markers: ConsoleMarkers,
        fallbacks: &Fallbacks,
    ) -> Self {
        let variant = ScenarioVariant::classify(spec_title, suite_title, markers.mode.as_deref());
        let warehouse = variant == ScenarioVariant::Warehouse;

        let mode = markers.mode.unwrap_or_else(|| {
            tracing::debug!(spec = spec_title, "no MODE marker, using fallback");
            if warehouse {
                fallbacks.mode_warehouse.clone()
            } else {
                fallbacks.mode_address.clone()
            }
        });

        let shipment_from = markers.shipment_from.unwrap_or_else(|| {
            tracing::debug!(spec = spec_title, "no SHIPMENT_FROM marker, using fallback");
            fallbacks.shipment_from.clone()
        });

        let shipment_to = markers.shipment_to.unwrap_or_else(|| {
            tracing::debug!(spec = spec_title, "no SHIPMENT_TO marker, using fallback");
            if warehouse {
                fallbacks.shipment_to_warehouse.clone()
            } else {
                fallbacks.shipment_to_address.clone()
            }
        });

        let method_count = markers.method_count;
        let methods = markers
            .methods
            .into_iter()
            .enumerate()
            .map(|(i, section)| ShippingMethodReport::from_section(i + 1, section))
            .collect();

        Self {
            title: spec_title.to_string(),
            variant,
            status,
            mode,
            shipment_from,
            shipment_to,
            method_count,
            methods,
        }
    }
}
