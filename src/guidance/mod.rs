//! Rule-based guidance for moving the overall workload up or down.
//!
//! Dimensions are visited in impact order (highest first when increasing,
//! lowest first when decreasing) and each one with room to move gets an
//! advice line tailored to the project context.

pub mod advice;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::context::{analyze_context, ContextFactors};
use crate::models::{Dimension, ScoreSet, WeightSet};
use crate::scoring::rank_dimension_impact;

pub use advice::{advice_for, Advice, DimensionAdvice};

/// Dimensions at or above this score have no room to increase.
pub const INCREASE_CEILING: f64 = 80.0;
/// Dimensions at or below this score have no room to decrease.
pub const DECREASE_FLOOR: f64 = 20.0;
/// Largest accepted magnitude for the desired change.
pub const MAX_CHANGE: i32 = 100;

/// Errors from guidance generation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GuidanceError {
    #[error("Desired change must be within -{max}..={max}, got {0}", max = MAX_CHANGE)]
    DesiredChangeOutOfRange(i32),
}

/// Direction a dimension should move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Increase,
    Decrease,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Increase => write!(f, "Increase"),
            Self::Decrease => write!(f, "Decrease"),
        }
    }
}

/// A single recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceLine {
    pub dimension: Dimension,
    pub direction: Direction,
    pub advice: String,
}

impl std::fmt::Display for AdviceLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "- {} the {} of the task. {}",
            self.direction,
            self.dimension.name().to_lowercase(),
            self.advice
        )
    }
}

/// Generated guidance. `Display` renders the full advice text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guidance {
    pub model_label: String,
    pub desired_change: i32,
    pub factors: ContextFactors,
    pub lines: Vec<AdviceLine>,
}

impl std::fmt::Display for Guidance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.desired_change == 0 {
            return write!(
                f,
                "{} analysis: No change in workload is desired. The current task design seems appropriate.",
                self.model_label
            );
        }

        let verb = if self.desired_change > 0 {
            "increase"
        } else {
            "decrease"
        };
        write!(f, "Using {} for analysis:\n\n", self.model_label)?;
        write!(
            f,
            "To {} the overall workload by approximately {} points, consider the following:\n\n",
            verb,
            self.desired_change.unsigned_abs()
        )?;
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Guidance generator with optional explicit weights for the impact ranking.
#[derive(Debug, Clone, Default)]
pub struct GuidanceGenerator {
    weights: Option<WeightSet>,
}

impl GuidanceGenerator {
    /// Rank dimensions with equal weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rank dimensions by weighted score instead.
    pub fn with_weights(mut self, weights: WeightSet) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Produce advice for moving the overall score by `desired_change` points.
    ///
    /// `model_label` is only displayed and is passed through unchanged.
    pub fn generate(
        &self,
        scores: &ScoreSet,
        desired_change: i32,
        context_text: &str,
        model_label: &str,
    ) -> Result<Guidance, GuidanceError> {
        if !(-MAX_CHANGE..=MAX_CHANGE).contains(&desired_change) {
            return Err(GuidanceError::DesiredChangeOutOfRange(desired_change));
        }

        let factors = analyze_context(context_text);
        let mut lines = Vec::new();

        if desired_change != 0 {
            let ranking = rank_dimension_impact(scores, self.weights.as_ref());
            let direction = if desired_change > 0 {
                Direction::Increase
            } else {
                Direction::Decrease
            };

            let ordered: Vec<Dimension> = match direction {
                Direction::Increase => ranking.iter().map(|i| i.dimension).collect(),
                Direction::Decrease => ranking.iter().rev().map(|i| i.dimension).collect(),
            };

            for dimension in ordered {
                let score = scores.get(dimension);
                let has_room = match direction {
                    Direction::Increase => score < INCREASE_CEILING,
                    Direction::Decrease => score > DECREASE_FLOOR,
                };
                if !has_room {
                    continue;
                }

                let table = advice_for(dimension);
                let advice = match direction {
                    Direction::Increase => table.increase,
                    Direction::Decrease => table.decrease,
                };
                lines.push(AdviceLine {
                    dimension,
                    direction,
                    advice: advice.select(&factors).to_string(),
                });
            }
        }

        debug!(
            "Generated {} advice lines for change {} ({:?})",
            lines.len(),
            desired_change,
            factors
        );

        Ok(Guidance {
            model_label: model_label.to_string(),
            desired_change,
            factors,
            lines,
        })
    }
}

/// Generate guidance using equal weights for the impact ranking.
pub fn generate_guidance(
    scores: &ScoreSet,
    desired_change: i32,
    context_text: &str,
    model_label: &str,
) -> Result<Guidance, GuidanceError> {
    GuidanceGenerator::new().generate(scores, desired_change, context_text, model_label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{make_scores, make_weights, sample_scores};

    #[test]
    fn zero_change_is_fixed_sentence() {
        let guidance = generate_guidance(&sample_scores(), 0, "novice quick", "GPT-4").unwrap();
        assert!(guidance.lines.is_empty());
        assert_eq!(
            guidance.to_string(),
            "GPT-4 analysis: No change in workload is desired. The current task design seems appropriate."
        );
    }

    #[test]
    fn increase_skips_dimensions_without_headroom() {
        let guidance = generate_guidance(&sample_scores(), 20, "", "GPT-3.5").unwrap();
        let dims: Vec<_> = guidance.lines.iter().map(|l| l.dimension).collect();
        assert!(!dims.contains(&Dimension::MentalDemand));
        assert_eq!(
            dims,
            vec![
                Dimension::TemporalDemand,
                Dimension::Performance,
                Dimension::Effort,
                Dimension::PhysicalDemand,
                Dimension::Frustration,
            ]
        );
        assert!(guidance
            .lines
            .iter()
            .all(|l| l.direction == Direction::Increase));
    }

    #[test]
    fn decrease_walks_lowest_impact_first() {
        let scores = make_scores([90.0, 10.0, 60.0, 50.0, 40.0, 25.0]);
        let guidance = generate_guidance(&scores, -30, "", "BERT").unwrap();
        let dims: Vec<_> = guidance.lines.iter().map(|l| l.dimension).collect();
        assert_eq!(
            dims,
            vec![
                Dimension::Frustration,
                Dimension::Effort,
                Dimension::Performance,
                Dimension::TemporalDemand,
                Dimension::MentalDemand,
            ]
        );
    }

    #[test]
    fn boundaries_are_strict() {
        let scores = make_scores([80.0, 20.0, 79.0, 21.0, 50.0, 50.0]);
        let up = generate_guidance(&scores, 10, "", "m").unwrap();
        let up_dims: Vec<_> = up.lines.iter().map(|l| l.dimension).collect();
        assert!(!up_dims.contains(&Dimension::MentalDemand));
        assert!(up_dims.contains(&Dimension::TemporalDemand));

        let down = generate_guidance(&scores, -10, "", "m").unwrap();
        let down_dims: Vec<_> = down.lines.iter().map(|l| l.dimension).collect();
        assert!(!down_dims.contains(&Dimension::PhysicalDemand));
        assert!(down_dims.contains(&Dimension::Performance));
    }

    #[test]
    fn rendered_text_layout() {
        let scores = make_scores([90.0, 90.0, 90.0, 90.0, 90.0, 10.0]);
        let guidance = generate_guidance(&scores, 20, "", "GPT-3.5").unwrap();
        assert_eq!(
            guidance.to_string(),
            "Using GPT-3.5 for analysis:\n\n\
             To increase the overall workload by approximately 20 points, consider the following:\n\n\
             - Increase the frustration of the task. Introduce more challenging obstacles or reduce available resources.\n"
        );
    }

    #[test]
    fn decrease_header_uses_magnitude() {
        let guidance = generate_guidance(&sample_scores(), -35, "", "GPT-4").unwrap();
        assert!(guidance
            .to_string()
            .contains("To decrease the overall workload by approximately 35 points"));
    }

    #[test]
    fn context_selects_advice() {
        let scores = make_scores([50.0; 6]);
        let guidance =
            generate_guidance(&scores, -10, "Advanced operators, long shifts", "GPT-4").unwrap();
        let mental = guidance
            .lines
            .iter()
            .find(|l| l.dimension == Dimension::MentalDemand)
            .unwrap();
        assert_eq!(
            mental.advice,
            "Streamline decision-making processes or provide automated cognitive support for routine aspects."
        );
        let frustration = guidance
            .lines
            .iter()
            .find(|l| l.dimension == Dimension::Frustration)
            .unwrap();
        assert!(frustration.advice.starts_with("Minimize unnecessary obstacles"));
    }

    #[test]
    fn unknown_model_label_passes_through() {
        let guidance = generate_guidance(&sample_scores(), 5, "", "my-local-model v0").unwrap();
        assert!(guidance.to_string().starts_with("Using my-local-model v0 for analysis:"));
    }

    #[test]
    fn change_out_of_range() {
        assert_eq!(
            generate_guidance(&sample_scores(), 101, "", "GPT-4"),
            Err(GuidanceError::DesiredChangeOutOfRange(101))
        );
        assert!(generate_guidance(&sample_scores(), -100, "", "GPT-4").is_ok());
    }

    #[test]
    fn weighted_ranking_changes_order() {
        let scores = make_scores([50.0; 6]);
        let weights = make_weights([1.0, 1.0, 1.0, 1.0, 1.0, 5.0]);
        let guidance = GuidanceGenerator::new()
            .with_weights(weights)
            .generate(&scores, 10, "", "GPT-4")
            .unwrap();
        assert_eq!(guidance.lines[0].dimension, Dimension::Frustration);
    }
}
