//! Weighted TLX scoring and per-dimension impact ranking.
//!
//! When no weights are supplied every dimension counts once, so the overall
//! score is the plain mean of the six ratings.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{Dimension, ScoreSet, WeightSet};

/// Errors from score aggregation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("Weights sum to zero; at least one dimension needs a positive weight")]
    DivisionByZero,
}

/// A dimension's contribution to the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionImpact {
    pub dimension: Dimension,
    /// Rating multiplied by the dimension's weight.
    pub weighted_score: f64,
}

fn weight_of(weights: Option<&WeightSet>, dimension: Dimension) -> f64 {
    weights.map(|w| w.get(dimension)).unwrap_or(1.0)
}

/// Compute the overall workload score as a weighted average.
///
/// The caller must supply at least one strictly positive weight; an all-zero
/// weight set yields [`ScoringError::DivisionByZero`].
pub fn compute_overall_score(
    scores: &ScoreSet,
    weights: Option<&WeightSet>,
) -> Result<f64, ScoringError> {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    for dimension in Dimension::all() {
        let weight = weight_of(weights, *dimension);
        weighted_sum += scores.get(*dimension) * weight;
        total_weight += weight;
    }

    if total_weight == 0.0 {
        return Err(ScoringError::DivisionByZero);
    }

    let overall = weighted_sum / total_weight;
    debug!("Overall score {:.2} (total weight {})", overall, total_weight);
    Ok(overall)
}

/// Rank dimensions by weighted score, highest first.
///
/// Ties keep display order.
pub fn rank_dimension_impact(
    scores: &ScoreSet,
    weights: Option<&WeightSet>,
) -> Vec<DimensionImpact> {
    let mut impacts: Vec<DimensionImpact> = Dimension::all()
        .iter()
        .map(|dimension| DimensionImpact {
            dimension: *dimension,
            weighted_score: scores.get(*dimension) * weight_of(weights, *dimension),
        })
        .collect();

    // sort_by is stable
    impacts.sort_by(|a, b| b.weighted_score.total_cmp(&a.weighted_score));
    impacts
}

/// Round to two decimal places, the precision scores are displayed with.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
