//! Marker line parser
//!
//! The scenario runner prints fixed-syntax lines to stdout so that the
//! report can be rebuilt from the captured console text:
//!
//! ```text
//! MODE: Ship from Nigeria to US Address
//! SHIPMENT_FROM: Nigeria
//! SHIPMENT_TO: USA
//! --- METHOD 1: DHL Express ---
//! ✅ vat: 12.5
//! ❌ shippo_cost: NOT PRESENT
//! ```
//!
//! [`ConsoleMarkers::parse`] turns such text into a typed representation;
//! rendering happens elsewhere.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static MODE_RE: LazyLock<Regex> = LazyLock::new(|| scalar_marker("MODE"));
static SHIPMENT_FROM_RE: LazyLock<Regex> = LazyLock::new(|| scalar_marker("SHIPMENT_FROM"));
static SHIPMENT_TO_RE: LazyLock<Regex> = LazyLock::new(|| scalar_marker("SHIPMENT_TO"));

/// Full section delimiter; its matches give the reported method count
static METHOD_DELIMITER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--- METHOD [0-9]+: (.+?) ---").unwrap());

/// Delimiter prefix the console text is split on
static METHOD_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--- METHOD [0-9]+:").unwrap());

static METHOD_NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(.+?) ---").unwrap());

static FIELD_RES: LazyLock<Vec<(CostField, Regex)>> = LazyLock::new(|| {
    CostField::ALL
        .iter()
        .map(|&field| {
            let pattern = format!(
                r"(?i)(✅|❌) {}: ([0-9.]+|NOT PRESENT)",
                regex::escape(field.as_str())
            );
            (field, Regex::new(&pattern).unwrap())
        })
        .collect()
});

fn scalar_marker(key: &str) -> Regex {
    Regex::new(&format!(r"{key}:\s*(.+)")).unwrap()
}

/// Cost fields reported for every shipping method, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CostField {
    LastMileDeliveryCost,
    ShippoCost,
    InsuranceCost,
    Vat,
    TotalAmount,
    ServiceShipmentCost,
    InitialServiceShipmentCost,
}

impl CostField {
    pub const ALL: [CostField; 7] = [
        CostField::LastMileDeliveryCost,
        CostField::ShippoCost,
        CostField::InsuranceCost,
        CostField::Vat,
        CostField::TotalAmount,
        CostField::ServiceShipmentCost,
        CostField::InitialServiceShipmentCost,
    ];

    /// Name as printed in marker lines
    pub fn as_str(self) -> &'static str {
        match self {
            CostField::LastMileDeliveryCost => "last_mile_delivery_cost",
            CostField::ShippoCost => "shippo_cost",
            CostField::InsuranceCost => "insurance_cost",
            CostField::Vat => "vat",
            CostField::TotalAmount => "total_amount",
            CostField::ServiceShipmentCost => "service_shipment_cost",
            CostField::InitialServiceShipmentCost => "initial_service_shipment_cost",
        }
    }
}

impl fmt::Display for CostField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Glyph at the start of a field line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldStatus {
    /// ✅
    Present,
    /// ❌
    Absent,
}

impl FieldStatus {
    fn from_glyph(glyph: &str) -> Option<Self> {
        match glyph {
            "✅" => Some(FieldStatus::Present),
            "❌" => Some(FieldStatus::Absent),
            _ => None,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            FieldStatus::Present => "✅",
            FieldStatus::Absent => "❌",
        }
    }
}

/// One matched field line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReading {
    pub status: FieldStatus,
    /// Value text exactly as printed, e.g. `12.5` or `NOT PRESENT`
    pub value: String,
}

/// Text between one method delimiter and the next
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodSection {
    /// Name from the delimiter line, if it could be read
    pub name: Option<String>,
    /// Only the fields that had a matching line
    pub fields: BTreeMap<CostField, FieldReading>,
}

impl MethodSection {
    fn parse(section: &str) -> Self {
        let name = METHOD_NAME_RE
            .captures(section)
            .map(|caps| caps[1].trim().to_string());

        let fields = FIELD_RES
            .iter()
            .filter_map(|(field, re)| {
                let caps = re.captures(section)?;
                let status = FieldStatus::from_glyph(&caps[1])?;
                Some((
                    *field,
                    FieldReading {
                        status,
                        value: caps[2].to_string(),
                    },
                ))
            })
            .collect();

        Self { name, fields }
    }
}

/// Everything extracted from one scenario's console text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleMarkers {
    pub mode: Option<String>,
    pub shipment_from: Option<String>,
    pub shipment_to: Option<String>,
    /// Number of complete `--- METHOD n: name ---` delimiters
    pub method_count: usize,
    /// Method sections in order of appearance
    pub methods: Vec<MethodSection>,
}

impl ConsoleMarkers {
    pub fn parse(console: &str) -> Self {
        Self {
            mode: first_marker(&MODE_RE, console),
            shipment_from: first_marker(&SHIPMENT_FROM_RE, console),
            shipment_to: first_marker(&SHIPMENT_TO_RE, console),
            method_count: METHOD_DELIMITER_RE.find_iter(console).count(),
            methods: parse_methods(console),
        }
    }
}

/// First value printed for a scalar marker, trimmed
///
/// A value that trims to nothing counts as absent so the caller's fallback
/// applies, rather than printing an empty line.
fn first_marker(re: &Regex, console: &str) -> Option<String> {
    let value = re.captures(console)?[1].trim().to_string();
    (!value.is_empty()).then_some(value)
}

fn parse_methods(console: &str) -> Vec<MethodSection> {
    if !METHOD_DELIMITER_RE.is_match(console) {
        return Vec::new();
    }

    // Part 0 is whatever was printed before the first method
    METHOD_SPLIT_RE
        .split(console)
        .skip(1)
        .map(MethodSection::parse)
        .collect()
}
