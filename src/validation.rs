//! Range validation of parameter readings against the catalog bounds.
//!
//! Validation is pure and accumulates every out-of-range parameter rather
//! than stopping at the first one, so a form can flag all offending fields
//! in a single pass. Whether a non-empty result blocks classification is
//! the caller's decision.
//!
//! # Example
//!
//! ```rust
//! use potability::core::{ParameterKey, ParameterSet};
//! use potability::validation::validate;
//!
//! let params = ParameterSet::default().with(ParameterKey::Ph, 15.0);
//! let errors = validate(&params);
//! assert_eq!(
//!     errors.get(ParameterKey::Ph),
//!     Some("Value must be between 0 and 14")
//! );
//! assert_eq!(errors.len(), 1);
//! ```

use crate::catalog::{self, ParameterDescriptor};
use crate::core::{Error, ParameterKey, ParameterSet};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Per-parameter validation messages, present only for failing keys.
///
/// Ordered by catalog order. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<ParameterKey, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: ParameterKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    pub fn contains(&self, key: ParameterKey) -> bool {
        self.0.contains_key(&key)
    }

    pub fn insert(&mut self, key: ParameterKey, message: impl Into<String>) {
        self.0.insert(key, message.into());
    }

    /// Drop the message for one key, returning it if there was one.
    pub fn clear(&mut self, key: ParameterKey) -> Option<String> {
        self.0.remove(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParameterKey, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", key, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Message recorded for a value outside `descriptor`'s bounds.
pub fn range_message(descriptor: &ParameterDescriptor) -> String {
    format!(
        "Value must be between {} and {}",
        descriptor.min, descriptor.max
    )
}

/// Validate raw `(name, value)` entries.
///
/// Names without a catalog descriptor are skipped: they are neither
/// validated nor reported.
pub fn validate_entries<'a, I>(entries: I) -> ValidationErrors
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut errors = ValidationErrors::new();
    for (name, value) in entries {
        let Some(descriptor) = catalog::lookup(name) else {
            debug!(parameter = name, "skipping parameter with no descriptor");
            continue;
        };
        if !descriptor.contains(value) {
            errors.insert(descriptor.key, range_message(descriptor));
        }
    }
    errors
}

/// Validate a complete parameter set.
pub fn validate(params: &ParameterSet) -> ValidationErrors {
    validate_entries(params.entries().map(|(key, value)| (key.as_str(), value)))
}

/// Fail-fast wrapper returning [`Error::Validation`] when any key is out of range.
pub fn validate_result(params: &ParameterSet) -> Result<(), Error> {
    let errors = validate(params);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate(&ParameterSet::default()).is_empty());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let params = ParameterSet::default()
            .with(ParameterKey::Ph, 14.0)
            .with(ParameterKey::Turbidity, 0.0);
        assert!(validate(&params).is_empty());
    }

    #[test]
    fn test_accumulates_all_failures() {
        let params = ParameterSet::default()
            .with(ParameterKey::Ph, -1.0)
            .with(ParameterKey::Solids, 60000.0)
            .with(ParameterKey::Turbidity, 10.5);
        let errors = validate(&params);
        let keys: Vec<_> = errors.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![ParameterKey::Ph, ParameterKey::Solids, ParameterKey::Turbidity]
        );
        assert_eq!(
            errors.get(ParameterKey::Solids),
            Some("Value must be between 0 and 50000")
        );
    }

    #[test]
    fn test_unknown_names_are_skipped() {
        let errors = validate_entries([("lead", 1e9), ("ph", 20.0)]);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(ParameterKey::Ph));
    }

    #[test]
    fn test_clear_single_key() {
        let mut errors = validate_entries([("ph", 20.0), ("hardness", 900.0)]);
        assert!(errors.clear(ParameterKey::Ph).is_some());
        assert!(!errors.contains(ParameterKey::Ph));
        assert!(errors.contains(ParameterKey::Hardness));
    }

    #[test]
    fn test_validate_result_wraps_errors() {
        let params = ParameterSet::default().with(ParameterKey::Chloramines, 16.0);
        match validate_result(&params) {
            Err(Error::Validation(errors)) => {
                assert_eq!(errors.to_string(), "chloramines: Value must be between 0 and 15")
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_serializes_with_external_names() {
        let errors = validate_entries([("organicCarbon", 51.0)]);
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["organicCarbon"], "Value must be between 0 and 50");
    }
}
