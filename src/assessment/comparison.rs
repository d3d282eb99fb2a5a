//! Before/after comparison of two assessments.

use serde::{Deserialize, Serialize};

use crate::assessment::AssessmentRecord;
use crate::models::Dimension;

/// Score changes smaller than this (in points) are not reported as movement.
pub const CHANGE_THRESHOLD: f64 = 1.0;

/// Change in one dimension's rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionDelta {
    pub dimension: Dimension,
    pub before: f64,
    pub after: f64,
    pub delta: f64,
}

/// Comparison between two assessments (before/after).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentComparison {
    pub before: AssessmentRecord,
    pub after: AssessmentRecord,
    /// Change in overall score (positive = more workload).
    pub overall_delta: f64,
    /// Per-dimension deltas in display order.
    pub dimension_deltas: Vec<DimensionDelta>,
    /// Dimensions whose rating rose by more than the threshold.
    pub increased: Vec<String>,
    /// Dimensions whose rating fell by more than the threshold.
    pub decreased: Vec<String>,
}

/// Compare two assessments.
pub fn compare_assessments(
    before: AssessmentRecord,
    after: AssessmentRecord,
) -> AssessmentComparison {
    let overall_delta = after.overall_score - before.overall_score;

    let dimension_deltas: Vec<DimensionDelta> = Dimension::all()
        .iter()
        .map(|dimension| {
            let b = before.scores.get(*dimension);
            let a = after.scores.get(*dimension);
            DimensionDelta {
                dimension: *dimension,
                before: b,
                after: a,
                delta: a - b,
            }
        })
        .collect();

    let increased = dimension_deltas
        .iter()
        .filter(|d| d.delta > CHANGE_THRESHOLD)
        .map(|d| format!("{}: +{:.2}", d.dimension.name(), d.delta))
        .collect();

    let decreased = dimension_deltas
        .iter()
        .filter(|d| d.delta < -CHANGE_THRESHOLD)
        .map(|d| format!("{}: {:.2}", d.dimension.name(), d.delta))
        .collect();

    AssessmentComparison {
        before,
        after,
        overall_delta,
        dimension_deltas,
        increased,
        decreased,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::make_record;

    #[test]
    fn compare_shows_increase() {
        let before = make_record("before", [50.0; 6]);
        let after = make_record("after", [80.0, 50.0, 50.0, 50.0, 50.0, 50.0]);

        let comparison = compare_assessments(before, after);

        assert!((comparison.overall_delta - 5.0).abs() < 0.001);
        assert_eq!(comparison.increased, vec!["Mental Demand: +30.00".to_string()]);
        assert!(comparison.decreased.is_empty());
    }

    #[test]
    fn compare_shows_decrease() {
        let before = make_record("before", [50.0; 6]);
        let after = make_record("after", [50.0, 50.0, 50.0, 50.0, 50.0, 20.0]);

        let comparison = compare_assessments(before, after);

        assert!((comparison.overall_delta - (-5.0)).abs() < 0.001);
        assert_eq!(comparison.decreased, vec!["Frustration: -30.00".to_string()]);
    }

    #[test]
    fn small_changes_ignored() {
        let before = make_record("before", [50.0; 6]);
        let after = make_record("after", [50.5, 50.0, 49.5, 50.0, 50.0, 50.0]);

        let comparison = compare_assessments(before, after);

        assert_eq!(comparison.dimension_deltas.len(), 6);
        assert!(comparison.increased.is_empty());
        assert!(comparison.decreased.is_empty());
    }
}
