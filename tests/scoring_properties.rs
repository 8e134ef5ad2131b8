//! Property-based tests for the heuristic score.
//!
//! These tests verify invariants that should hold for all in-catalog inputs:
//! - Scoring is deterministic apart from the timestamp
//! - The score stays in [0, 1]
//! - Confidence stays in [0.7, 0.99]
//! - The label agrees with the score
//! - Panel status and score deltas come from the same rule

mod common;

use common::all_zero;
use potability::catalog::descriptors;
use potability::scoring::{
    classify_now, confidence_for, potability_score, rule, score_breakdown, status, ParameterStatus,
};
use potability::{ParameterKey, ParameterSet, PotabilityLabel};
use proptest::prelude::*;

const EPS: f64 = 1e-9;

/// A parameter set with each reading inside its catalog bounds.
fn in_range_parameters() -> impl Strategy<Value = ParameterSet> {
    let ranges: Vec<_> = descriptors().iter().map(|d| d.min..=d.max).collect();
    ranges.prop_map(|values| {
        let mut params = ParameterSet::default();
        for (key, value) in ParameterKey::ALL.into_iter().zip(values) {
            params.set(key, value);
        }
        params
    })
}

proptest! {
    #[test]
    fn prop_scoring_is_deterministic(params in in_range_parameters()) {
        let first = classify_now(&params);
        let second = classify_now(&params);
        prop_assert_eq!(first.label(), second.label());
        prop_assert_eq!(first.confidence(), second.confidence());
        prop_assert_eq!(first.parameters(), second.parameters());
    }

    #[test]
    fn prop_score_and_confidence_are_bounded(params in in_range_parameters()) {
        let score = potability_score(&params);
        prop_assert!((0.0..=1.0).contains(&score));

        let confidence = classify_now(&params).confidence();
        prop_assert!(confidence >= 0.7 - EPS, "confidence {} below 0.7", confidence);
        prop_assert!(confidence <= 0.99 + EPS, "confidence {} above 0.99", confidence);
    }

    #[test]
    fn prop_label_follows_score(params in in_range_parameters()) {
        let breakdown = score_breakdown(&params);
        let expected = if breakdown.score > 0.5 {
            PotabilityLabel::Potable
        } else {
            PotabilityLabel::NotPotable
        };
        prop_assert_eq!(breakdown.label, expected);
        prop_assert!((breakdown.score - potability_score(&params)).abs() < EPS);
    }

    #[test]
    fn prop_status_matches_rule(params in in_range_parameters()) {
        for contribution in score_breakdown(&params).contributions {
            let r = rule(contribution.key);
            let panel = status(contribution.key, contribution.value);
            prop_assert_eq!(panel, contribution.status);
            if panel == ParameterStatus::Good {
                prop_assert_eq!(contribution.delta, r.good_delta);
            } else {
                prop_assert_eq!(contribution.delta, r.bad_delta);
            }
        }
    }
}

#[test]
fn test_defaults_score_potable_with_capped_confidence() {
    let breakdown = score_breakdown(&ParameterSet::default());
    assert!((breakdown.raw_score - 1.05).abs() < EPS);
    assert_eq!(breakdown.score, 1.0);
    assert_eq!(breakdown.label, PotabilityLabel::Potable);
    assert!((breakdown.confidence - 0.99).abs() < EPS);
}

#[test]
fn test_all_zero_penalizes_ph_and_conductivity() {
    let breakdown = score_breakdown(&all_zero());
    let warnings: Vec<_> = breakdown
        .contributions
        .iter()
        .filter(|c| c.status == ParameterStatus::Warning)
        .map(|c| c.key)
        .collect();
    assert_eq!(warnings, vec![ParameterKey::Ph, ParameterKey::Conductivity]);
    assert!((breakdown.score - 0.65).abs() < EPS);
    assert_eq!(breakdown.label, PotabilityLabel::Potable);
}

#[test]
fn test_exactly_neutral_is_not_potable() {
    assert_eq!(
        potability::scoring::label_for(0.5),
        PotabilityLabel::NotPotable
    );
    assert!((confidence_for(0.5) - 0.7).abs() < EPS);
}
