use super::Classifier;
use crate::config::ClassifierConfig;
use crate::core::{ClassificationResult, ClassifierError, ParameterSet};
use crate::scoring;
use std::time::Duration;
use tracing::{debug, info_span, Instrument};

/// Threshold-sum classifier standing in for a real model.
///
/// Waits a fixed simulated latency, then scores. Always succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicClassifier {
    latency: Duration,
}

impl Default for HeuristicClassifier {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

impl HeuristicClassifier {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// No simulated delay.
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::new(config.latency())
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Classifier for HeuristicClassifier {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    async fn classify(
        &self,
        params: &ParameterSet,
    ) -> Result<ClassificationResult, ClassifierError> {
        let params = *params;
        let latency = self.latency;
        async move {
            if !latency.is_zero() {
                debug!(latency_ms = latency.as_millis() as u64, "simulating model latency");
                tokio::time::sleep(latency).await;
            }
            Ok(scoring::classify_now(&params))
        }
        .instrument(info_span!("heuristic_classify"))
        .await
    }
}
