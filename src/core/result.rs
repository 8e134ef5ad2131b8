use super::parameters::ParameterSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary potability label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PotabilityLabel {
    #[serde(rename = "Potable")]
    Potable,
    #[serde(rename = "Not Potable")]
    NotPotable,
}

impl PotabilityLabel {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Potable => "Potable",
            Self::NotPotable => "Not Potable",
        }
    }

    pub const fn is_potable(&self) -> bool {
        matches!(self, Self::Potable)
    }

    /// Parse the display form. Used when reading model service responses.
    pub fn from_display(s: &str) -> Option<Self> {
        match s {
            "Potable" => Some(Self::Potable),
            "Not Potable" => Some(Self::NotPotable),
            _ => None,
        }
    }
}

impl fmt::Display for PotabilityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one classification.
///
/// Fields are private so a result cannot be altered after it is produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    prediction: PotabilityLabel,
    confidence: f64,
    parameters: ParameterSet,
    timestamp: DateTime<Utc>,
}

impl ClassificationResult {
    pub fn new(
        prediction: PotabilityLabel,
        confidence: f64,
        parameters: ParameterSet,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            prediction,
            confidence,
            parameters,
            timestamp,
        }
    }

    pub fn label(&self) -> PotabilityLabel {
        self.prediction
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Confidence as a percentage with one decimal, e.g. `"99.0%"`.
    pub fn confidence_percent(&self) -> String {
        format!("{:.1}%", self.confidence * 100.0)
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
