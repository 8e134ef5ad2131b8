// Export modules for library usage
pub mod catalog;
pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod progress;
pub mod scoring;
pub mod session;
pub mod validation;

// Re-export commonly used types
pub use crate::core::{
    ClassificationResult, ClassifierError, Error, ParameterKey, ParameterSet, PotabilityLabel,
};

pub use crate::catalog::{descriptor, descriptors, lookup, ParameterDescriptor};

pub use crate::classifier::{Classifier, ConfiguredClassifier, HeuristicClassifier, RemoteClassifier};

pub use crate::config::{load_config, PotabilityConfig};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::scoring::{
    classify_now, potability_score, score_breakdown, status, ParameterStatus, ScoreBreakdown,
};

pub use crate::session::{FormSession, ResultView};

pub use crate::validation::{validate, ValidationErrors};
