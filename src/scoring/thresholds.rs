//! The potability threshold table.
//!
//! One rule per parameter states the "good" band and the score delta applied
//! inside and outside it. Both the scorer and the per-parameter status shown
//! in the visualization panel read this table, so a threshold is defined in
//! exactly one place.

use crate::catalog;
use crate::core::ParameterKey;
use serde::Serialize;
use std::fmt;

/// Acceptable band for a reading. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum GoodBand {
    AtMost { max: f64 },
    Between { min: f64, max: f64 },
}

impl GoodBand {
    /// NaN is never inside a band.
    pub fn contains(&self, value: f64) -> bool {
        match *self {
            GoodBand::AtMost { max } => value <= max,
            GoodBand::Between { min, max } => value >= min && value <= max,
        }
    }
}

impl fmt::Display for GoodBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoodBand::AtMost { max } => write!(f, "<= {}", max),
            GoodBand::Between { min, max } => write!(f, "{} - {}", min, max),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdRule {
    pub key: ParameterKey,
    pub band: GoodBand,
    pub good_delta: f64,
    pub bad_delta: f64,
}

impl ThresholdRule {
    pub fn is_good(&self, value: f64) -> bool {
        self.band.contains(value)
    }

    /// Score delta contributed by `value`.
    pub fn delta(&self, value: f64) -> f64 {
        if self.is_good(value) {
            self.good_delta
        } else {
            self.bad_delta
        }
    }
}

static RULES: [ThresholdRule; 9] = [
    ThresholdRule {
        key: ParameterKey::Ph,
        band: GoodBand::Between { min: 6.5, max: 8.5 },
        good_delta: 0.1,
        bad_delta: -0.15,
    },
    ThresholdRule {
        key: ParameterKey::Hardness,
        band: GoodBand::AtMost { max: 300.0 },
        good_delta: 0.05,
        bad_delta: -0.1,
    },
    ThresholdRule {
        key: ParameterKey::Solids,
        band: GoodBand::AtMost { max: 500.0 },
        good_delta: 0.1,
        bad_delta: -0.15,
    },
    ThresholdRule {
        key: ParameterKey::Chloramines,
        band: GoodBand::AtMost { max: 4.0 },
        good_delta: 0.05,
        bad_delta: -0.1,
    },
    ThresholdRule {
        key: ParameterKey::Sulfate,
        band: GoodBand::AtMost { max: 250.0 },
        good_delta: 0.05,
        bad_delta: -0.1,
    },
    ThresholdRule {
        key: ParameterKey::Conductivity,
        band: GoodBand::Between {
            min: 50.0,
            max: 1500.0,
        },
        good_delta: 0.05,
        bad_delta: -0.1,
    },
    ThresholdRule {
        key: ParameterKey::OrganicCarbon,
        band: GoodBand::AtMost { max: 4.0 },
        good_delta: 0.05,
        bad_delta: -0.1,
    },
    ThresholdRule {
        key: ParameterKey::Trihalomethanes,
        band: GoodBand::AtMost { max: 80.0 },
        good_delta: 0.05,
        bad_delta: -0.1,
    },
    ThresholdRule {
        key: ParameterKey::Turbidity,
        band: GoodBand::AtMost { max: 4.0 },
        good_delta: 0.05,
        bad_delta: -0.1,
    },
];

/// All rules in catalog order.
pub fn rules() -> &'static [ThresholdRule] {
    &RULES
}

pub fn rule(key: ParameterKey) -> &'static ThresholdRule {
    &RULES[key as usize]
}

/// Display status of a single reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterStatus {
    /// Within the good band
    Good,
    /// Outside the good band
    Warning,
    /// No descriptor for this name
    Unknown,
}

impl ParameterStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ParameterStatus::Good => "Within normal range",
            ParameterStatus::Warning => "Outside normal range",
            ParameterStatus::Unknown => "Unknown parameter",
        }
    }
}

pub fn status(key: ParameterKey, value: f64) -> ParameterStatus {
    if rule(key).is_good(value) {
        ParameterStatus::Good
    } else {
        ParameterStatus::Warning
    }
}

/// Status for an external name. Names without a descriptor are `Unknown`.
pub fn status_by_name(name: &str, value: f64) -> ParameterStatus {
    match catalog::lookup(name) {
        Some(descriptor) => status(descriptor.key, value),
        None => ParameterStatus::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_index_matches_key() {
        for key in ParameterKey::ALL {
            assert_eq!(rule(key).key, key);
        }
    }

    #[test]
    fn test_between_band_edges() {
        let ph = rule(ParameterKey::Ph);
        assert!(ph.is_good(6.5));
        assert!(ph.is_good(8.5));
        assert!(!ph.is_good(6.49));
        assert!(!ph.is_good(8.51));
    }

    #[test]
    fn test_at_most_band_edges() {
        let sulfate = rule(ParameterKey::Sulfate);
        assert!(sulfate.is_good(250.0));
        assert!(!sulfate.is_good(250.1));
        assert!(sulfate.is_good(0.0));
    }

    #[test]
    fn test_nan_is_never_good() {
        for r in rules() {
            assert!(!r.is_good(f64::NAN));
        }
    }

    #[test]
    fn test_status_by_name() {
        assert_eq!(status_by_name("turbidity", 5.0), ParameterStatus::Warning);
        assert_eq!(status_by_name("conductivity", 400.0), ParameterStatus::Good);
        assert_eq!(status_by_name("arsenic", 0.0), ParameterStatus::Unknown);
    }

    #[test]
    fn test_band_display() {
        assert_eq!(rule(ParameterKey::Ph).band.to_string(), "6.5 - 8.5");
        assert_eq!(rule(ParameterKey::Hardness).band.to_string(), "<= 300");
    }
}
