//! Potability scoring: the shared threshold table and the heuristic score.

pub mod heuristic;
pub mod thresholds;

pub use heuristic::{
    classify_now, confidence_for, label_for, potability_score, score_breakdown, Contribution,
    ScoreBreakdown,
};
pub use thresholds::{rule, rules, status, status_by_name, GoodBand, ParameterStatus, ThresholdRule};
