//! Interactive form state.
//!
//! A [`FormSession`] owns everything one interactive session mutates: the
//! parameter values, the current validation errors, the latest result and
//! the loading flag. All changes go through its methods.
//!
//! Classification is split into [`FormSession::begin_classification`] and
//! [`FormSession::complete_classification`] so the loading state is
//! observable between the two; [`FormSession::classify`] runs both around a
//! [`Classifier`] call.

use crate::classifier::Classifier;
use crate::core::{ClassificationResult, ClassifierError, Error, ParameterKey, ParameterSet};
use crate::observability::{record_classification, set_phase, ClassificationPhase};
use crate::validation::{self, ValidationErrors};
use tracing::{info, info_span, warn, Instrument};

/// What the results panel should show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultView<'a> {
    /// No classification yet
    Idle,
    /// A classification is in flight
    Loading,
    Ready(&'a ClassificationResult),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSession {
    parameters: ParameterSet,
    errors: ValidationErrors,
    result: Option<ClassificationResult>,
    loading: bool,
}

impl FormSession {
    /// Session seeded with the default parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameters(parameters: ParameterSet) -> Self {
        Self {
            parameters,
            ..Self::default()
        }
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn result(&self) -> Option<&ClassificationResult> {
        self.result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn view(&self) -> ResultView<'_> {
        if self.loading {
            ResultView::Loading
        } else {
            match &self.result {
                Some(result) => ResultView::Ready(result),
                None => ResultView::Idle,
            }
        }
    }

    /// Set one reading. Clears that key's error immediately, without re-validating.
    pub fn update_parameter(&mut self, key: ParameterKey, value: f64) {
        self.parameters.set(key, value);
        self.errors.clear(key);
    }

    /// Recompute all errors from scratch. Returns true when valid.
    pub fn validate(&mut self) -> bool {
        let _phase = set_phase(ClassificationPhase::Validation);
        self.errors = validation::validate(&self.parameters);
        self.errors.is_empty()
    }

    /// Validate and enter the loading state.
    ///
    /// Returns the snapshot to classify. Fails with [`ClassifierError::Busy`]
    /// while another classification is in flight, or with
    /// [`Error::Validation`] when any reading is out of range.
    pub fn begin_classification(&mut self) -> Result<ParameterSet, Error> {
        if self.loading {
            return Err(ClassifierError::Busy.into());
        }
        if !self.validate() {
            return Err(Error::Validation(self.errors.clone()));
        }
        self.loading = true;
        Ok(self.parameters)
    }

    /// Leave the loading state, storing the result on success.
    ///
    /// On failure the parameters and any previous result are kept.
    pub fn complete_classification(
        &mut self,
        outcome: Result<ClassificationResult, ClassifierError>,
    ) -> Result<&ClassificationResult, Error> {
        self.loading = false;
        record_classification(outcome.is_ok());
        match outcome {
            Ok(result) => {
                info!(
                    label = %result.label(),
                    confidence = result.confidence(),
                    "classification complete"
                );
                Ok(self.result.insert(result))
            }
            Err(error) => {
                warn!("classification failed: {}", error);
                Err(error.into())
            }
        }
    }

    /// Validate, classify with `classifier`, and store the result.
    ///
    /// The await is tracked with a span rather than the thread-local phase,
    /// which would not follow the future across worker threads.
    pub async fn classify<C: Classifier>(
        &mut self,
        classifier: &C,
    ) -> Result<&ClassificationResult, Error> {
        let snapshot = self.begin_classification()?;
        let outcome = classifier
            .classify(&snapshot)
            .instrument(info_span!("classification", backend = classifier.name()))
            .await;
        self.complete_classification(outcome)
    }

    /// Restore defaults and clear the result and all errors.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::HeuristicClassifier;
    use crate::core::PotabilityLabel;
    use crate::observability::get_current_context;
    use std::sync::Mutex;

    /// Heuristic backend that remembers the thread-local phase it ran under.
    #[derive(Default)]
    struct PhaseRecorder {
        seen: Mutex<Vec<Option<ClassificationPhase>>>,
    }

    impl Classifier for PhaseRecorder {
        fn name(&self) -> &'static str {
            "phase-recorder"
        }

        async fn classify(
            &self,
            params: &ParameterSet,
        ) -> Result<ClassificationResult, ClassifierError> {
            tokio::task::yield_now().await;
            self.seen
                .lock()
                .unwrap()
                .push(get_current_context().phase);
            HeuristicClassifier::instant().classify(params).await
        }
    }

    #[test]
    fn test_new_session_is_idle_with_defaults() {
        let session = FormSession::new();
        assert_eq!(session.parameters(), &ParameterSet::default());
        assert_eq!(session.view(), ResultView::Idle);
        assert!(session.errors().is_empty());
    }

    #[test]
    fn test_update_clears_only_that_error() {
        let mut session = FormSession::new();
        session.update_parameter(ParameterKey::Ph, 20.0);
        session.update_parameter(ParameterKey::Sulfate, 2000.0);
        assert!(!session.validate());
        assert_eq!(session.errors().len(), 2);

        // Still out of range, but editing clears the displayed error
        session.update_parameter(ParameterKey::Ph, 30.0);
        assert!(!session.errors().contains(ParameterKey::Ph));
        assert!(session.errors().contains(ParameterKey::Sulfate));
    }

    #[test]
    fn test_begin_blocks_on_invalid() {
        let mut session = FormSession::new();
        session.update_parameter(ParameterKey::Turbidity, 11.0);
        let err = session.begin_classification().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(!session.is_loading());
    }

    #[test]
    fn test_begin_rejects_reentry() {
        let mut session = FormSession::new();
        session.begin_classification().unwrap();
        assert_eq!(session.view(), ResultView::Loading);
        let err = session.begin_classification().unwrap_err();
        assert!(matches!(err, Error::Classifier(ClassifierError::Busy)));
    }

    #[test]
    fn test_failure_keeps_parameters_and_previous_result() {
        let mut session = FormSession::new();
        session.begin_classification().unwrap();
        session
            .complete_classification(Ok(crate::scoring::classify_now(session.parameters())))
            .unwrap();
        let previous = session.result().cloned();

        session.update_parameter(ParameterKey::Hardness, 450.0);
        session.begin_classification().unwrap();
        let err = session
            .complete_classification(Err(ClassifierError::Transport("refused".into())))
            .unwrap_err();
        assert!(matches!(err, Error::Classifier(_)));
        assert!(!session.is_loading());
        assert_eq!(session.parameters().hardness, 450.0);
        assert_eq!(session.result().cloned(), previous);
    }

    #[tokio::test]
    async fn test_classify_stores_latest_result() {
        let mut session = FormSession::new();
        let classifier = HeuristicClassifier::instant();
        let label = session.classify(&classifier).await.unwrap().label();
        assert_eq!(label, PotabilityLabel::Potable);

        for key in ParameterKey::ALL {
            session.update_parameter(key, crate::catalog::descriptor(key).max);
        }
        let label = session.classify(&classifier).await.unwrap().label();
        assert_eq!(label, PotabilityLabel::NotPotable);
        assert_eq!(
            session.result().map(|r| r.label()),
            Some(PotabilityLabel::NotPotable)
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_classify_leaves_thread_context_untouched() {
        let recorder = PhaseRecorder::default();
        let mut session = FormSession::new();
        for _ in 0..4 {
            session.classify(&recorder).await.unwrap();
        }

        let seen = recorder.seen.into_inner().unwrap();
        assert_eq!(seen, vec![None; 4]);
        assert_eq!(get_current_context().phase, None);
    }

    #[tokio::test]
    async fn test_reset_restores_defaults() {
        let mut session = FormSession::new();
        session.update_parameter(ParameterKey::Ph, 3.0);
        session.classify(&HeuristicClassifier::instant()).await.unwrap();
        session.update_parameter(ParameterKey::Chloramines, 99.0);
        session.validate();

        session.reset();
        assert_eq!(session, FormSession::new());
        assert_eq!(session.view(), ResultView::Idle);
    }
}
