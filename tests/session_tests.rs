//! Form session state transitions.

mod common;

use common::with_reading;
use potability::classifier::{Classifier, HeuristicClassifier};
use potability::core::ClassificationResult;
use potability::{ClassifierError, Error, FormSession, ParameterKey, ParameterSet, ResultView};
use pretty_assertions::assert_eq;
use std::time::Duration;

/// Always fails, like an unreachable model service.
struct FailingClassifier;

impl Classifier for FailingClassifier {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn classify(
        &self,
        _params: &ParameterSet,
    ) -> Result<ClassificationResult, ClassifierError> {
        Err(ClassifierError::Transport("connection refused".to_string()))
    }
}

#[tokio::test]
async fn test_classify_stores_result_and_clears_loading() {
    let mut session = FormSession::new();
    let result = session
        .classify(&HeuristicClassifier::instant())
        .await
        .unwrap()
        .clone();

    assert!(result.label().is_potable());
    assert!(!session.is_loading());
    assert_eq!(session.view(), ResultView::Ready(&result));
}

#[tokio::test(start_paused = true)]
async fn test_simulated_latency_elapses_before_result() {
    let mut session = FormSession::new();
    let classifier = HeuristicClassifier::new(Duration::from_millis(1500));

    let started = tokio::time::Instant::now();
    session.classify(&classifier).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(1500));
}

#[tokio::test]
async fn test_invalid_parameters_block_classification() {
    let mut session = FormSession::with_parameters(with_reading(ParameterKey::Ph, 15.0));
    let err = session
        .classify(&HeuristicClassifier::instant())
        .await
        .unwrap_err();

    let Error::Validation(errors) = err else {
        panic!("expected validation error, got {:?}", err);
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(ParameterKey::Ph), Some("Value must be between 0 and 14"));
    assert_eq!(session.errors(), &errors);
    assert_eq!(session.view(), ResultView::Idle);
}

#[tokio::test]
async fn test_failure_keeps_inputs_and_previous_result() {
    let mut session = FormSession::new();
    session.update_parameter(ParameterKey::Hardness, 180.0);
    let first = session
        .classify(&HeuristicClassifier::instant())
        .await
        .unwrap()
        .clone();

    let err = session.classify(&FailingClassifier).await.unwrap_err();
    assert!(matches!(err, Error::Classifier(ClassifierError::Transport(_))));
    assert_eq!(session.parameters().hardness, 180.0);
    assert_eq!(session.result(), Some(&first));
    assert!(!session.is_loading());
}

#[test]
fn test_reset_restores_defaults() {
    let mut session = FormSession::new();
    session.update_parameter(ParameterKey::Solids, 60_000.0);
    session.validate();
    session.begin_classification().unwrap_err();
    session.reset();

    assert_eq!(session.parameters(), &ParameterSet::default());
    assert!(session.errors().is_empty());
    assert_eq!(session.view(), ResultView::Idle);
}

#[test]
fn test_reentry_while_loading_is_busy() {
    let mut session = FormSession::new();
    let snapshot = session.begin_classification().unwrap();
    assert_eq!(session.view(), ResultView::Loading);

    let err = session.begin_classification().unwrap_err();
    assert!(matches!(err, Error::Classifier(ClassifierError::Busy)));

    session
        .complete_classification(Ok(potability::classify_now(&snapshot)))
        .unwrap();
    assert!(!session.is_loading());
}
