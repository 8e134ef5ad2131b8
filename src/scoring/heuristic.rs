//! Threshold-sum potability score and the label/confidence derived from it.
//!
//! The score starts neutral at 0.5, each parameter adds its rule's delta,
//! and the sum is clamped to [0, 1]. The label is `Potable` strictly above
//! 0.5. Confidence is `min(|score - 0.5| * 2 + 0.7, 0.99)` with no lower
//! clamp; the [0, 1] score clamp already keeps it at or above 0.7.

use super::thresholds::{rule, ParameterStatus};
use crate::core::{ClassificationResult, ParameterKey, ParameterSet, PotabilityLabel};
use chrono::Utc;
use serde::Serialize;

pub const NEUTRAL_SCORE: f64 = 0.5;
pub const CONFIDENCE_OFFSET: f64 = 0.7;
pub const CONFIDENCE_CAP: f64 = 0.99;

/// One parameter's share of the score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Contribution {
    pub key: ParameterKey,
    pub value: f64,
    pub status: ParameterStatus,
    pub delta: f64,
}

/// Full derivation of a score, for verbose output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub contributions: Vec<Contribution>,
    /// Sum before clamping
    pub raw_score: f64,
    /// Clamped to [0, 1]
    pub score: f64,
    pub label: PotabilityLabel,
    pub confidence: f64,
}

pub fn score_breakdown(params: &ParameterSet) -> ScoreBreakdown {
    let mut raw_score = NEUTRAL_SCORE;
    let contributions: Vec<Contribution> = params
        .entries()
        .map(|(key, value)| {
            let r = rule(key);
            let good = r.is_good(value);
            let delta = if good { r.good_delta } else { r.bad_delta };
            raw_score += delta;
            Contribution {
                key,
                value,
                status: if good {
                    ParameterStatus::Good
                } else {
                    ParameterStatus::Warning
                },
                delta,
            }
        })
        .collect();

    let score = raw_score.clamp(0.0, 1.0);
    ScoreBreakdown {
        contributions,
        raw_score,
        score,
        label: label_for(score),
        confidence: confidence_for(score),
    }
}

/// Clamped potability score in [0, 1].
pub fn potability_score(params: &ParameterSet) -> f64 {
    params
        .entries()
        .fold(NEUTRAL_SCORE, |score, (key, value)| {
            score + rule(key).delta(value)
        })
        .clamp(0.0, 1.0)
}

pub fn label_for(score: f64) -> PotabilityLabel {
    if score > NEUTRAL_SCORE {
        PotabilityLabel::Potable
    } else {
        PotabilityLabel::NotPotable
    }
}

pub fn confidence_for(score: f64) -> f64 {
    ((score - NEUTRAL_SCORE).abs() * 2.0 + CONFIDENCE_OFFSET).min(CONFIDENCE_CAP)
}

/// Score `params` and stamp the result with the current time.
///
/// The input is copied into the result unvalidated.
pub fn classify_now(params: &ParameterSet) -> ClassificationResult {
    let score = potability_score(params);
    ClassificationResult::new(label_for(score), confidence_for(score), *params, Utc::now())
}
