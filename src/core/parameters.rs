//! Water-quality parameter keys and the per-sample parameter set.
//!
//! A [`ParameterSet`] always carries all nine readings. Keys are a closed
//! enum so that the catalog, the threshold table and the set itself cannot
//! drift apart; external names (`organicCarbon`, ...) only appear at the
//! serialization and lookup boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the nine measured water-quality parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterKey {
    Ph,
    Hardness,
    Solids,
    Chloramines,
    Sulfate,
    Conductivity,
    OrganicCarbon,
    Trihalomethanes,
    Turbidity,
}

impl ParameterKey {
    /// All keys in catalog order.
    pub const ALL: [ParameterKey; 9] = [
        ParameterKey::Ph,
        ParameterKey::Hardness,
        ParameterKey::Solids,
        ParameterKey::Chloramines,
        ParameterKey::Sulfate,
        ParameterKey::Conductivity,
        ParameterKey::OrganicCarbon,
        ParameterKey::Trihalomethanes,
        ParameterKey::Turbidity,
    ];

    /// External name used in JSON input/output and lookups.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ph => "ph",
            Self::Hardness => "hardness",
            Self::Solids => "solids",
            Self::Chloramines => "chloramines",
            Self::Sulfate => "sulfate",
            Self::Conductivity => "conductivity",
            Self::OrganicCarbon => "organicCarbon",
            Self::Trihalomethanes => "trihalomethanes",
            Self::Turbidity => "turbidity",
        }
    }

    /// Parse an external name. Returns `None` for unknown names.
    ///
    /// Kebab and snake spellings of `organicCarbon` are accepted so the
    /// interactive session can take `organic-carbon` as typed.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ph" => Some(Self::Ph),
            "hardness" => Some(Self::Hardness),
            "solids" => Some(Self::Solids),
            "chloramines" => Some(Self::Chloramines),
            "sulfate" => Some(Self::Sulfate),
            "conductivity" => Some(Self::Conductivity),
            "organicCarbon" | "organic_carbon" | "organic-carbon" => Some(Self::OrganicCarbon),
            "trihalomethanes" => Some(Self::Trihalomethanes),
            "turbidity" => Some(Self::Turbidity),
            _ => None,
        }
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown parameter '{}'", s))
    }
}

/// The nine numeric readings for one water sample.
///
/// `Default` is the seed set the form starts from and returns to on reset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSet {
    pub ph: f64,
    pub hardness: f64,
    pub solids: f64,
    pub chloramines: f64,
    pub sulfate: f64,
    pub conductivity: f64,
    pub organic_carbon: f64,
    pub trihalomethanes: f64,
    pub turbidity: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            ph: 7.0,
            hardness: 200.0,
            solids: 300.0,
            chloramines: 2.0,
            sulfate: 150.0,
            conductivity: 400.0,
            organic_carbon: 3.0,
            trihalomethanes: 50.0,
            turbidity: 2.0,
        }
    }
}

impl ParameterSet {
    /// Build a set with every reading equal to `value`.
    pub fn uniform(value: f64) -> Self {
        Self {
            ph: value,
            hardness: value,
            solids: value,
            chloramines: value,
            sulfate: value,
            conductivity: value,
            organic_carbon: value,
            trihalomethanes: value,
            turbidity: value,
        }
    }

    pub fn get(&self, key: ParameterKey) -> f64 {
        match key {
            ParameterKey::Ph => self.ph,
            ParameterKey::Hardness => self.hardness,
            ParameterKey::Solids => self.solids,
            ParameterKey::Chloramines => self.chloramines,
            ParameterKey::Sulfate => self.sulfate,
            ParameterKey::Conductivity => self.conductivity,
            ParameterKey::OrganicCarbon => self.organic_carbon,
            ParameterKey::Trihalomethanes => self.trihalomethanes,
            ParameterKey::Turbidity => self.turbidity,
        }
    }

    pub fn set(&mut self, key: ParameterKey, value: f64) {
        let slot = match key {
            ParameterKey::Ph => &mut self.ph,
            ParameterKey::Hardness => &mut self.hardness,
            ParameterKey::Solids => &mut self.solids,
            ParameterKey::Chloramines => &mut self.chloramines,
            ParameterKey::Sulfate => &mut self.sulfate,
            ParameterKey::Conductivity => &mut self.conductivity,
            ParameterKey::OrganicCarbon => &mut self.organic_carbon,
            ParameterKey::Trihalomethanes => &mut self.trihalomethanes,
            ParameterKey::Turbidity => &mut self.turbidity,
        };
        *slot = value;
    }

    /// Builder-style variant of [`ParameterSet::set`].
    #[must_use]
    pub fn with(mut self, key: ParameterKey, value: f64) -> Self {
        self.set(key, value);
        self
    }

    /// `(key, value)` pairs in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = (ParameterKey, f64)> + '_ {
        ParameterKey::ALL.iter().map(move |&key| (key, self.get(key)))
    }
}
