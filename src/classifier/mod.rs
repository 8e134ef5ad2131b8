//! Classifier capability and its backends.
//!
//! [`Classifier`] is the seam between the form/CLI layer and whatever
//! produces a [`ClassificationResult`]. The built-in
//! [`HeuristicClassifier`] never fails; [`RemoteClassifier`] talks to a
//! model service and can. [`ConfiguredClassifier`] picks one from
//! configuration so callers never hardcode a backend.

mod heuristic;
mod remote;

pub use heuristic::HeuristicClassifier;
pub use remote::{interpret_response, ModelResponse, RemoteClassifier};

use crate::config::{Backend, PotabilityConfig};
use crate::core::{ClassificationResult, ClassifierError, Error, ParameterSet};
use std::future::Future;

/// Produces a classification for a parameter set.
///
/// Implementations do not re-validate bounds; validation is a separate,
/// caller-invoked step. Calls are independent and may run concurrently.
pub trait Classifier {
    /// Short backend name for logs and output.
    fn name(&self) -> &'static str;

    fn classify(
        &self,
        params: &ParameterSet,
    ) -> impl Future<Output = Result<ClassificationResult, ClassifierError>> + Send;
}

/// Backend selected from [`PotabilityConfig`].
#[derive(Debug, Clone)]
pub enum ConfiguredClassifier {
    Heuristic(HeuristicClassifier),
    Remote(RemoteClassifier),
}

impl ConfiguredClassifier {
    pub fn from_config(config: &PotabilityConfig) -> Result<Self, Error> {
        match config.classifier.backend {
            Backend::Heuristic => Ok(Self::Heuristic(HeuristicClassifier::from_config(
                &config.classifier,
            ))),
            Backend::Remote => {
                let remote = config.classifier.remote.as_ref().ok_or_else(|| {
                    Error::configuration(
                        "classifier.remote is required when backend = \"remote\"",
                        None,
                    )
                })?;
                Ok(Self::Remote(RemoteClassifier::new(
                    remote,
                    config.retry.clone(),
                )?))
            }
        }
    }
}

impl Classifier for ConfiguredClassifier {
    fn name(&self) -> &'static str {
        match self {
            Self::Heuristic(inner) => inner.name(),
            Self::Remote(inner) => inner.name(),
        }
    }

    async fn classify(
        &self,
        params: &ParameterSet,
    ) -> Result<ClassificationResult, ClassifierError> {
        match self {
            Self::Heuristic(inner) => inner.classify(params).await,
            Self::Remote(inner) => inner.classify(params).await,
        }
    }
}
