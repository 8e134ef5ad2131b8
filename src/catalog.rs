//! Static reference data for the nine water-quality parameters.
//!
//! Bounds here are used for input validation only. Scoring uses the
//! threshold table in [`crate::scoring::thresholds`], which describes what
//! is *good* rather than what is *admissible*.

use crate::core::ParameterKey;
use serde::Serialize;

/// Display and validation metadata for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDescriptor {
    pub key: ParameterKey,
    pub name: &'static str,
    /// Unit string, empty for dimensionless readings such as pH
    pub unit: &'static str,
    pub description: &'static str,
    /// Free-text label, never parsed
    pub normal_range: &'static str,
    pub min: f64,
    pub max: f64,
}

impl ParameterDescriptor {
    pub fn contains(&self, value: f64) -> bool {
        !(value < self.min || value > self.max)
    }

    /// Value formatted with two decimals and the unit, e.g. `"7.00"` or `"300.00 ppm"`.
    pub fn format_value(&self, value: f64) -> String {
        if self.unit.is_empty() {
            format!("{:.2}", value)
        } else {
            format!("{:.2} {}", value, self.unit)
        }
    }
}

static CATALOG: [ParameterDescriptor; 9] = [
    ParameterDescriptor {
        key: ParameterKey::Ph,
        name: "pH Level",
        unit: "",
        description: "Measure of acidity/alkalinity of water",
        normal_range: "6.5 - 8.5",
        min: 0.0,
        max: 14.0,
    },
    ParameterDescriptor {
        key: ParameterKey::Hardness,
        name: "Hardness",
        unit: "mg/L",
        description: "Concentration of calcium and magnesium",
        normal_range: "60 - 120 mg/L",
        min: 0.0,
        max: 500.0,
    },
    ParameterDescriptor {
        key: ParameterKey::Solids,
        name: "Total Dissolved Solids",
        unit: "ppm",
        description: "Total amount of dissolved substances",
        normal_range: "< 500 ppm",
        min: 0.0,
        max: 50000.0,
    },
    ParameterDescriptor {
        key: ParameterKey::Chloramines,
        name: "Chloramines",
        unit: "ppm",
        description: "Disinfectant used in water treatment",
        normal_range: "< 4 ppm",
        min: 0.0,
        max: 15.0,
    },
    ParameterDescriptor {
        key: ParameterKey::Sulfate,
        name: "Sulfate",
        unit: "mg/L",
        description: "Naturally occurring mineral",
        normal_range: "< 250 mg/L",
        min: 0.0,
        max: 1000.0,
    },
    ParameterDescriptor {
        key: ParameterKey::Conductivity,
        name: "Conductivity",
        unit: "μS/cm",
        description: "Ability to conduct electrical current",
        normal_range: "50 - 1500 μS/cm",
        min: 0.0,
        max: 10000.0,
    },
    ParameterDescriptor {
        key: ParameterKey::OrganicCarbon,
        name: "Total Organic Carbon",
        unit: "ppm",
        description: "Amount of carbon in organic compounds",
        normal_range: "< 4 ppm",
        min: 0.0,
        max: 50.0,
    },
    ParameterDescriptor {
        key: ParameterKey::Trihalomethanes,
        name: "Trihalomethanes",
        unit: "μg/L",
        description: "Chemical compounds formed during chlorination",
        normal_range: "< 80 μg/L",
        min: 0.0,
        max: 200.0,
    },
    ParameterDescriptor {
        key: ParameterKey::Turbidity,
        name: "Turbidity",
        unit: "NTU",
        description: "Measure of water clarity",
        normal_range: "< 4 NTU",
        min: 0.0,
        max: 10.0,
    },
];

/// All descriptors in catalog order.
pub fn descriptors() -> &'static [ParameterDescriptor] {
    &CATALOG
}

/// Descriptor for a known key. Total over [`ParameterKey`].
pub fn descriptor(key: ParameterKey) -> &'static ParameterDescriptor {
    // CATALOG is laid out in ParameterKey::ALL order
    &CATALOG[key as usize]
}

/// Descriptor by external name; `None` when the name is not in the catalog.
pub fn lookup(name: &str) -> Option<&'static ParameterDescriptor> {
    ParameterKey::from_name(name).map(descriptor)
}
