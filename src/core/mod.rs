//! Core data model: parameter keys and sets, classification results and
//! the shared error types.

pub mod errors;
pub mod parameters;
pub mod result;

pub use errors::{ClassifierError, Error, Result};
pub use parameters::{ParameterKey, ParameterSet};
pub use result::{ClassificationResult, PotabilityLabel};
