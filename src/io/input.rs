//! Parameter input from JSON files and command-line overrides.
//!
//! Input is kept as raw `(name, value)` pairs until it is applied to a
//! [`ParameterSet`]. Names the catalog does not know are carried along so
//! validation can skip them and the caller can mention them, but they never
//! reach the parameter set.

use crate::catalog;
use crate::core::{Error, ParameterKey, ParameterSet};
use crate::validation::{self, ValidationErrors};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterInput {
    entries: Vec<(String, f64)>,
}

impl ParameterInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of name → number.
    pub fn from_json_str(text: &str) -> Result<Self, Error> {
        let value: Value = serde_json::from_str(text)?;
        let Value::Object(map) = value else {
            return Err(Error::invalid_input(
                "parameter input must be a JSON object of name to number",
            ));
        };

        let mut input = Self::new();
        for (name, value) in map {
            let number = value.as_f64().ok_or_else(|| {
                Error::invalid_input(format!("parameter '{}' must be a number, got {}", name, value))
            })?;
            input.push(name, number)?;
        }
        Ok(input)
    }

    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let text = fs::read_to_string(path)
            .map_err(|e| Error::file_system("Failed to read parameter file", path, e))?;
        Self::from_json_str(&text)
    }

    /// Append an entry. Non-finite values are rejected.
    pub fn push(&mut self, name: impl Into<String>, value: f64) -> Result<(), Error> {
        let name = name.into();
        ensure_finite(&name, value)?;
        self.entries.push((name, value));
        Ok(())
    }

    pub fn push_key(&mut self, key: ParameterKey, value: f64) -> Result<(), Error> {
        self.push(key.as_str(), value)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names with no catalog descriptor, in input order.
    pub fn unknown_names(&self) -> Vec<&str> {
        self.entries()
            .filter(|(name, _)| catalog::lookup(name).is_none())
            .map(|(name, _)| name)
            .collect()
    }

    /// Validate the raw entries; unknown names are skipped.
    pub fn validate(&self) -> ValidationErrors {
        validation::validate_entries(self.entries())
    }

    /// Overlay known entries on `base`. Later entries win.
    pub fn apply_to(&self, mut base: ParameterSet) -> ParameterSet {
        for (name, value) in self.entries() {
            match ParameterKey::from_name(name) {
                Some(key) => base.set(key, value),
                None => debug!(parameter = name, "ignoring unknown parameter"),
            }
        }
        base
    }
}

pub fn ensure_finite(name: &str, value: f64) -> Result<f64, Error> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::invalid_input(format!(
            "parameter '{}' must be a finite number, got {}",
            name, value
        )))
    }
}
