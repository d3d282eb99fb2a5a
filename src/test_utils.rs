//! Shared test utilities for creating test fixtures.
//!
//! This module provides helper functions for creating test data
//! used across multiple test modules.

use crate::assessment::AssessmentRecord;
use crate::elicitation::{generate_pairwise_questions, JudgmentSet};
use crate::models::{Dimension, ScoreSet, WeightSet};

/// Create a score set from six ratings in display order
pub fn make_scores(values: [f64; 6]) -> ScoreSet {
    ScoreSet::from_pairs(Dimension::all().iter().copied().zip(values))
        .expect("test scores must be valid")
}

/// Create a weight set from six weights in display order
pub fn make_weights(values: [f64; 6]) -> WeightSet {
    WeightSet::from_pairs(Dimension::all().iter().copied().zip(values))
        .expect("test weights must be valid")
}

/// The lopsided profile used throughout the guidance tests
pub fn sample_scores() -> ScoreSet {
    make_scores([90.0, 10.0, 50.0, 50.0, 50.0, 10.0])
}

/// Create a record with equal weights and a fixed name
pub fn make_record(name: &str, values: [f64; 6]) -> AssessmentRecord {
    AssessmentRecord::new(name, make_scores(values), None).expect("equal weights never sum to zero")
}

/// Judge every pair over all six dimensions, preferring whichever dimension
/// appears earlier in `ranking`
pub fn judge_by_ranking(ranking: &[Dimension]) -> JudgmentSet {
    let position = |d: Dimension| ranking.iter().position(|r| *r == d).unwrap_or(usize::MAX);
    let mut judgments = JudgmentSet::new(Dimension::all()).expect("no duplicates");
    for pair in generate_pairwise_questions(Dimension::all()).expect("no duplicates") {
        let (a, b) = pair.members();
        let chosen = if position(a) <= position(b) { a } else { b };
        judgments.record(a, b, chosen).expect("valid judgment");
    }
    judgments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_scores() {
        let scores = make_scores([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(scores.get(Dimension::MentalDemand), 1.0);
        assert_eq!(scores.get(Dimension::Frustration), 6.0);
    }

    #[test]
    fn test_judge_by_ranking_is_complete() {
        let judgments = judge_by_ranking(&[Dimension::Effort]);
        assert!(judgments.is_complete());
        assert_eq!(judgments.len(), 15);
    }
}
