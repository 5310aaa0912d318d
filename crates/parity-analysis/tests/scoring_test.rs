//! Scoring engine tests: weight table, clamping, order independence.

use parity_analysis::deviation::{Deviation, DeviationProperty, Severity};
use parity_analysis::scoring::*;
use parity_core::config::ScoringConfig;
use parity_core::types::PropertyKind;
use proptest::prelude::*;

fn deviation(severity: Severity) -> Deviation {
    Deviation::new(
        DeviationProperty::Style(PropertyKind::Fill),
        "#000000",
        "#ffffff",
        severity,
        100.0,
        0.9,
    )
}

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Critical),
        Just(Severity::Major),
        Just(Severity::Medium),
        Just(Severity::Minor),
    ]
}

#[test]
fn test_default_weights() {
    let weights = SeverityWeights::default();
    assert_eq!(weights.weight(Severity::Critical), 25.0);
    assert_eq!(weights.weight(Severity::Major), 15.0);
    assert_eq!(weights.weight(Severity::Medium), 8.0);
    assert_eq!(weights.weight(Severity::Minor), 3.0);
}

#[test]
fn test_single_critical_scores_75() {
    let summary = ScoringEngine::default().score(&[deviation(Severity::Critical)]);
    assert_eq!(summary.score, 75.0);
    assert_eq!(summary.severity_counts.critical, 1);
    assert_eq!(summary.severity_counts.total(), 1);
}

#[test]
fn test_mixed_severities_deduct_additively() {
    let deviations = [
        deviation(Severity::Major),
        deviation(Severity::Medium),
        deviation(Severity::Minor),
        deviation(Severity::Minor),
    ];
    // 100 - 15 - 8 - 3 - 3
    assert_eq!(ScoringEngine::default().score(&deviations).score, 71.0);
}

#[test]
fn test_weights_from_config() {
    let config = ScoringConfig {
        critical_weight: Some(50.0),
        minor_weight: Some(0.5),
        ..Default::default()
    };
    let engine = ScoringEngine::from_config(&config);
    assert_eq!(engine.weights().major, 15.0);
    let summary = engine.score(&[deviation(Severity::Critical), deviation(Severity::Minor)]);
    assert_eq!(summary.score, 49.5);
}

#[test]
fn test_n_critical_clamps_at_zero() {
    let engine = ScoringEngine::default();
    for n in 0..8usize {
        let deviations: Vec<Deviation> = (0..n).map(|_| deviation(Severity::Critical)).collect();
        let expected = (100.0 - 25.0 * n as f64).max(0.0);
        assert_eq!(engine.score(&deviations).score, expected, "n = {n}");
    }
}

proptest! {
    #[test]
    fn prop_score_is_bounded_and_order_independent(
        severities in prop::collection::vec(arb_severity(), 0..20),
    ) {
        let engine = ScoringEngine::default();
        let deviations: Vec<Deviation> = severities.iter().copied().map(deviation).collect();
        let forward = engine.score(&deviations);
        let reversed: Vec<Deviation> = deviations.iter().rev().cloned().collect();
        let backward = engine.score(&reversed);

        prop_assert!((0.0..=100.0).contains(&forward.score));
        prop_assert_eq!(forward, backward);
        prop_assert_eq!(forward, engine.score(&deviations));
    }

    #[test]
    fn prop_adding_a_deviation_never_raises_the_score(
        severities in prop::collection::vec(arb_severity(), 0..12),
        extra in arb_severity(),
    ) {
        let engine = ScoringEngine::default();
        let mut deviations: Vec<Deviation> = severities.iter().copied().map(deviation).collect();
        let before = engine.score(&deviations).score;
        deviations.push(deviation(extra));
        prop_assert!(engine.score(&deviations).score <= before);
    }
}
