//! Assessment records, comparison and storage.
//!
//! A record is the value a caller persists after scoring: the ratings, the
//! weights they were scored with, and the resulting overall score. The core
//! never assigns identifiers; that is the store's job.

pub mod comparison;
pub mod store;

pub use comparison::{compare_assessments, AssessmentComparison, DimensionDelta};
pub use store::{AssessmentStore, FileAssessmentStore, StoreError, StoredAssessment};

use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::models::{ScoreSet, WeightSet};
use crate::scoring::{compute_overall_score, rank_dimension_impact, DimensionImpact, ScoringError};

/// A scored assessment, ready to be saved.
///
/// `overall_score` is always derived from `scores` and `weights`. A stored
/// value is recomputed on deserialization rather than trusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RecordFile")]
pub struct AssessmentRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub scores: ScoreSet,
    pub weights: WeightSet,
    pub overall_score: f64,
    pub created_at: DateTime<Utc>,
}

/// On-disk shape of a record before its score is checked.
#[derive(Deserialize)]
struct RecordFile {
    name: String,
    #[serde(default)]
    description: Option<String>,
    scores: ScoreSet,
    weights: WeightSet,
    #[serde(default)]
    overall_score: Option<f64>,
    created_at: DateTime<Utc>,
}

impl TryFrom<RecordFile> for AssessmentRecord {
    type Error = ScoringError;

    fn try_from(file: RecordFile) -> Result<Self, Self::Error> {
        let overall_score = compute_overall_score(&file.scores, Some(&file.weights))?;
        if let Some(stored) = file.overall_score {
            if (stored - overall_score).abs() > 1e-9 {
                warn!(
                    "Stored score {:.2} for '{}' does not match its ratings; using {:.2}",
                    stored, file.name, overall_score
                );
            }
        }
        Ok(Self {
            name: file.name,
            description: file.description,
            scores: file.scores,
            weights: file.weights,
            overall_score,
            created_at: file.created_at,
        })
    }
}

impl AssessmentRecord {
    /// Score `scores` and stamp the record with the current time.
    ///
    /// Absent weights mean equal weights.
    pub fn new(
        name: impl Into<String>,
        scores: ScoreSet,
        weights: Option<WeightSet>,
    ) -> Result<Self, ScoringError> {
        let weights = weights.unwrap_or_default();
        let overall_score = compute_overall_score(&scores, Some(&weights))?;
        Ok(Self {
            name: name.into(),
            description: None,
            scores,
            weights,
            overall_score,
            created_at: Utc::now(),
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Impact ranking under the record's own weights.
    pub fn impact(&self) -> Vec<DimensionImpact> {
        rank_dimension_impact(&self.scores, Some(&self.weights))
    }
}
