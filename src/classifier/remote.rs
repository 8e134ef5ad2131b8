//! HTTP-backed classifier.
//!
//! The parameter set is POSTed as JSON (external key names) to the
//! configured endpoint. The service answers with
//! `{"prediction": "Potable" | "Not Potable", "confidence": <0.0-1.0>}`.
//! Transient failures are retried according to [`RetryConfig`].

use super::Classifier;
use crate::config::{RemoteConfig, RetryConfig};
use crate::core::{ClassificationResult, ClassifierError, ParameterSet, PotabilityLabel};
use chrono::Utc;
use serde::Deserialize;
use std::time::{Duration, Instant};
use tracing::{debug, info_span, warn, Instrument};

/// Upper bound on how much of an error body is echoed into messages.
const MAX_ERROR_BODY: usize = 200;

/// Response body expected from the model service.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelResponse {
    pub prediction: String,
    pub confidence: f64,
}

#[derive(Debug, Clone)]
pub struct RemoteClassifier {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
    retry: RetryConfig,
}

impl RemoteClassifier {
    pub fn new(config: &RemoteConfig, retry: RetryConfig) -> Result<Self, ClassifierError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ClassifierError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: config.endpoint.trim().to_string(),
            timeout: config.timeout(),
            retry,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request_once(
        &self,
        params: &ParameterSet,
    ) -> Result<ClassificationResult, ClassifierError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(params)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifierError::Status {
                status: status.as_u16(),
                message: truncate(body.trim(), MAX_ERROR_BODY),
            });
        }

        let body: ModelResponse = response
            .json()
            .await
            .map_err(|e| ClassifierError::InvalidResponse(e.to_string()))?;
        interpret_response(body, params)
    }

    fn map_transport_error(&self, error: reqwest::Error) -> ClassifierError {
        if error.is_timeout() {
            ClassifierError::Timeout(self.timeout)
        } else {
            ClassifierError::Transport(error.to_string())
        }
    }
}

impl Classifier for RemoteClassifier {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn classify(
        &self,
        params: &ParameterSet,
    ) -> Result<ClassificationResult, ClassifierError> {
        let span = info_span!("remote_classify", endpoint = %self.endpoint);
        async {
            let started = Instant::now();
            let mut retries = 0;
            loop {
                match self.request_once(params).await {
                    Ok(result) => {
                        debug!(retries, "model service answered");
                        return Ok(result);
                    }
                    Err(error) if error.is_retryable() => {
                        let Some(delay) = self.retry.next_delay(retries, started.elapsed())
                        else {
                            return Err(error);
                        };
                        retries += 1;
                        warn!(
                            attempt = retries,
                            delay_ms = delay.as_millis() as u64,
                            "model request failed, retrying: {}",
                            error
                        );
                        tokio::time::sleep(delay).await;
                    }
                    Err(error) => return Err(error),
                }
            }
        }
        .instrument(span)
        .await
    }
}

/// Turn a service response into a result, rejecting unknown labels and
/// confidences outside [0, 1].
pub fn interpret_response(
    response: ModelResponse,
    params: &ParameterSet,
) -> Result<ClassificationResult, ClassifierError> {
    let label = PotabilityLabel::from_display(&response.prediction).ok_or_else(|| {
        ClassifierError::InvalidResponse(format!("unknown prediction '{}'", response.prediction))
    })?;
    if !(0.0..=1.0).contains(&response.confidence) {
        return Err(ClassifierError::InvalidResponse(format!(
            "confidence {} outside [0, 1]",
            response.confidence
        )));
    }
    Ok(ClassificationResult::new(
        label,
        response.confidence,
        *params,
        Utc::now(),
    ))
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(prediction: &str, confidence: f64) -> ModelResponse {
        ModelResponse {
            prediction: prediction.to_string(),
            confidence,
        }
    }

    #[test]
    fn test_interpret_valid_response() {
        let params = ParameterSet::default();
        let result = interpret_response(response("Not Potable", 0.42), &params).unwrap();
        assert_eq!(result.label(), PotabilityLabel::NotPotable);
        assert_eq!(result.confidence(), 0.42);
        assert_eq!(result.parameters(), &params);
    }

    #[test]
    fn test_interpret_rejects_unknown_label() {
        let err = interpret_response(response("Maybe", 0.5), &ParameterSet::default()).unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidResponse(_)));
    }

    #[test]
    fn test_interpret_rejects_out_of_range_confidence() {
        let err =
            interpret_response(response("Potable", 1.5), &ParameterSet::default()).unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidResponse(_)));
        let err =
            interpret_response(response("Potable", f64::NAN), &ParameterSet::default()).unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidResponse(_)));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abc", 5), "abc");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }
}
