//! Scoring and elicitation behaviour through the public API

use taskload::elicitation::{derive_weights, JudgmentSet};
use taskload::scoring::{round2, DimensionImpact, ScoringError};
use taskload::{
    compute_overall_score, generate_pairwise_questions, rank_dimension_impact, Dimension,
    ScoreSet, WeightSet,
};

fn scores(values: [f64; 6]) -> ScoreSet {
    ScoreSet::from_pairs(Dimension::all().iter().copied().zip(values)).unwrap()
}

fn weights(values: [f64; 6]) -> WeightSet {
    WeightSet::from_pairs(Dimension::all().iter().copied().zip(values)).unwrap()
}

/// A handful of fixed profiles standing in for "all score sets"
fn profiles() -> Vec<ScoreSet> {
    vec![
        scores([0.0; 6]),
        scores([100.0; 6]),
        scores([90.0, 10.0, 50.0, 50.0, 50.0, 10.0]),
        scores([12.5, 99.0, 33.3, 0.0, 71.0, 64.0]),
        scores([55.0, 55.0, 20.0, 80.0, 21.0, 79.0]),
    ]
}

#[test]
fn unweighted_equals_arithmetic_mean() {
    for profile in profiles() {
        let mean: f64 = profile.iter().map(|(_, s)| s).sum::<f64>() / 6.0;
        let overall = compute_overall_score(&profile, None).unwrap();
        assert!((overall - mean).abs() < 1e-9);
    }
}

#[test]
fn weighted_score_is_scale_invariant() {
    let weight_sets = [
        weights([1.0, 2.0, 3.0, 4.0, 5.0, 0.0]),
        weights([0.2, 0.2, 0.2, 0.2, 0.1, 0.1]),
        weights([0.0, 0.0, 0.0, 0.0, 0.0, 7.0]),
    ];
    for profile in profiles() {
        for w in &weight_sets {
            let base = compute_overall_score(&profile, Some(w)).unwrap();
            for k in [0.001, 0.5, 2.0, 3.7, 1e6] {
                let scaled = compute_overall_score(&profile, Some(&w.scaled(k).unwrap())).unwrap();
                assert!((base - scaled).abs() < 1e-6, "k = {}", k);
            }
        }
    }
}

#[test]
fn zero_weights_are_an_error() {
    let result = compute_overall_score(&profiles()[2], Some(&weights([0.0; 6])));
    assert_eq!(result, Err(ScoringError::DivisionByZero));
}

#[test]
fn impact_ranking_is_complete_and_sorted() {
    for profile in profiles() {
        let ranking: Vec<DimensionImpact> =
            rank_dimension_impact(&profile, Some(&weights([1.0, 2.0, 3.0, 4.0, 5.0, 6.0])));
        assert_eq!(ranking.len(), 6);
        for dimension in Dimension::all() {
            assert!(ranking.iter().any(|i| i.dimension == *dimension));
        }
        assert!(ranking
            .windows(2)
            .all(|w| w[0].weighted_score >= w[1].weighted_score));
    }
}

#[test]
fn example_profile_scores_43_33() {
    let overall = compute_overall_score(&profiles()[2], None).unwrap();
    assert_eq!(round2(overall), 43.33);
}

#[test]
fn fifteen_questions_in_nested_loop_order() {
    let pairs = generate_pairwise_questions(Dimension::all()).unwrap();
    assert_eq!(pairs.len(), 15);

    let mut expected = Vec::new();
    let all = Dimension::all();
    for i in 0..all.len() {
        for j in i + 1..all.len() {
            expected.push((all[i], all[j]));
        }
    }
    let actual: Vec<_> = pairs.iter().map(|p| p.members()).collect();
    assert_eq!(actual, expected);
}

#[test]
fn dimension_winning_all_comparisons_gets_five() {
    let mut judgments = JudgmentSet::new(Dimension::all()).unwrap();
    for pair in generate_pairwise_questions(Dimension::all()).unwrap() {
        let (a, b) = pair.members();
        let chosen = if pair.contains(Dimension::Effort) {
            Dimension::Effort
        } else {
            a
        };
        judgments.record(b, a, chosen).unwrap();
    }

    let derived = derive_weights(&judgments);
    assert_eq!(derived.get(Dimension::Effort), 5.0);
    assert_eq!(derived.total(), 15.0);
    // Weights are raw win counts and still score correctly.
    assert!(compute_overall_score(&scores([50.0; 6]), Some(&derived)).is_ok());
}
