pub mod app;
pub mod assessment;
pub mod cli;
pub mod config;
pub mod context;
pub mod elicitation;
pub mod features;
pub mod guidance;
pub mod models;
pub mod prompt;
pub mod report;
pub mod scoring;

pub use context::{analyze_context, ContextFactors};
pub use elicitation::{derive_weights, derive_weights_strict, generate_pairwise_questions};
pub use guidance::{generate_guidance, Guidance, GuidanceGenerator};
pub use models::{Dimension, ScoreSet, WeightSet};
pub use scoring::{compute_overall_score, rank_dimension_impact};

#[cfg(test)]
pub mod test_utils;
