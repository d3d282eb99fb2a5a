//! Core value types: dimensions, score sets and weight sets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One of the six TLX workload dimensions, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    MentalDemand,
    PhysicalDemand,
    TemporalDemand,
    Performance,
    Effort,
    Frustration,
}

impl Dimension {
    /// All dimensions in display order.
    pub fn all() -> &'static [Dimension] {
        &[
            Dimension::MentalDemand,
            Dimension::PhysicalDemand,
            Dimension::TemporalDemand,
            Dimension::Performance,
            Dimension::Effort,
            Dimension::Frustration,
        ]
    }

    /// Returns the human-readable name of this dimension.
    pub fn name(&self) -> &'static str {
        match self {
            Self::MentalDemand => "Mental Demand",
            Self::PhysicalDemand => "Physical Demand",
            Self::TemporalDemand => "Temporal Demand",
            Self::Performance => "Performance",
            Self::Effort => "Effort",
            Self::Frustration => "Frustration",
        }
    }

    /// The rating-scale question shown to the rater.
    pub fn question(&self) -> &'static str {
        match self {
            Self::MentalDemand => "How much mental and perceptual activity was required?",
            Self::PhysicalDemand => "How much physical activity was required?",
            Self::TemporalDemand => {
                "How much time pressure did you feel due to the pace at which tasks or task elements occurred?"
            }
            Self::Performance => "How successful were you in performing the task?",
            Self::Effort => "How hard did you have to work to accomplish your level of performance?",
            Self::Frustration => {
                "How irritated, stressed, and annoyed versus content, relaxed, and complacent did you feel during the task?"
            }
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MentalDemand => write!(f, "mental_demand"),
            Self::PhysicalDemand => write!(f, "physical_demand"),
            Self::TemporalDemand => write!(f, "temporal_demand"),
            Self::Performance => write!(f, "performance"),
            Self::Effort => write!(f, "effort"),
            Self::Frustration => write!(f, "frustration"),
        }
    }
}

impl std::str::FromStr for Dimension {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c })
            .collect();
        match key.as_str() {
            "mental_demand" | "mental" | "md" => Ok(Self::MentalDemand),
            "physical_demand" | "physical" | "pd" => Ok(Self::PhysicalDemand),
            "temporal_demand" | "temporal" | "td" => Ok(Self::TemporalDemand),
            "performance" | "perf" => Ok(Self::Performance),
            "effort" => Ok(Self::Effort),
            "frustration" | "frustration_level" => Ok(Self::Frustration),
            _ => Err(ModelError::UnknownDimension(s.to_string())),
        }
    }
}

/// Errors raised when building score or weight sets.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("Missing dimension: {0}")]
    MissingDimension(Dimension),
    #[error("Unknown dimension: {0}")]
    UnknownDimension(String),
    #[error("Score for {dimension} must be within 0-100, got {value}")]
    ScoreOutOfRange { dimension: Dimension, value: f64 },
    #[error("Weight for {dimension} must be a non-negative number, got {value}")]
    InvalidWeight { dimension: Dimension, value: f64 },
    #[error("Scale factor must be positive, got {0}")]
    InvalidScale(f64),
}

/// Collect a value for every dimension, failing on the first absent one.
fn collect_complete(
    values: &BTreeMap<Dimension, f64>,
) -> Result<BTreeMap<Dimension, f64>, ModelError> {
    Dimension::all()
        .iter()
        .map(|dim| {
            values
                .get(dim)
                .map(|v| (*dim, *v))
                .ok_or(ModelError::MissingDimension(*dim))
        })
        .collect()
}

/// Ratings (0-100) for every dimension of one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<Dimension, f64>", into = "BTreeMap<Dimension, f64>")]
pub struct ScoreSet {
    values: BTreeMap<Dimension, f64>,
}

impl ScoreSet {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    /// Build a score set, requiring every dimension with a rating in range.
    pub fn new(values: BTreeMap<Dimension, f64>) -> Result<Self, ModelError> {
        let values = collect_complete(&values)?;
        for (dimension, value) in &values {
            if !value.is_finite() || *value < Self::MIN || *value > Self::MAX {
                return Err(ModelError::ScoreOutOfRange {
                    dimension: *dimension,
                    value: *value,
                });
            }
        }
        Ok(Self { values })
    }

    /// Build from `(dimension, score)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (Dimension, f64)>,
    {
        Self::new(pairs.into_iter().collect())
    }

    /// Every dimension rated with the same value.
    pub fn uniform(value: f64) -> Result<Self, ModelError> {
        Self::from_pairs(Dimension::all().iter().map(|d| (*d, value)))
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        self.values.get(&dimension).copied().unwrap_or_default()
    }

    /// Return a new set with one rating replaced.
    pub fn with_score(&self, dimension: Dimension, value: f64) -> Result<Self, ModelError> {
        let mut values = self.values.clone();
        values.insert(dimension, value);
        Self::new(values)
    }

    /// Iterate ratings in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        self.values.iter().map(|(d, v)| (*d, *v))
    }
}

impl TryFrom<BTreeMap<Dimension, f64>> for ScoreSet {
    type Error = ModelError;

    fn try_from(values: BTreeMap<Dimension, f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<ScoreSet> for BTreeMap<Dimension, f64> {
    fn from(set: ScoreSet) -> Self {
        set.values
    }
}

/// Relative importance of each dimension.
///
/// Weights need not sum to 1; the scoring functions divide by the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<Dimension, f64>", into = "BTreeMap<Dimension, f64>")]
pub struct WeightSet {
    values: BTreeMap<Dimension, f64>,
}

impl WeightSet {
    /// Build a weight set, requiring a non-negative finite weight for every dimension.
    pub fn new(values: BTreeMap<Dimension, f64>) -> Result<Self, ModelError> {
        let values = collect_complete(&values)?;
        for (dimension, value) in &values {
            if !value.is_finite() || *value < 0.0 {
                return Err(ModelError::InvalidWeight {
                    dimension: *dimension,
                    value: *value,
                });
            }
        }
        Ok(Self { values })
    }

    /// Build from `(dimension, weight)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (Dimension, f64)>,
    {
        Self::new(pairs.into_iter().collect())
    }

    /// Weights from occurrence counts. Dimensions absent from `counts` get 0.
    pub fn from_counts(counts: &BTreeMap<Dimension, usize>) -> Self {
        Self {
            values: Dimension::all()
                .iter()
                .map(|d| (*d, counts.get(d).copied().unwrap_or(0) as f64))
                .collect(),
        }
    }

    /// Weight 1 for every dimension.
    pub fn equal() -> Self {
        Self {
            values: Dimension::all().iter().map(|d| (*d, 1.0)).collect(),
        }
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        self.values.get(&dimension).copied().unwrap_or_default()
    }

    pub fn total(&self) -> f64 {
        self.values.values().sum()
    }

    /// Multiply every weight by a positive factor.
    pub fn scaled(&self, factor: f64) -> Result<Self, ModelError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ModelError::InvalidScale(factor));
        }
        Ok(Self {
            values: self.values.iter().map(|(d, w)| (*d, w * factor)).collect(),
        })
    }

    /// Rescale so the weights sum to 1. Returns `None` when every weight is zero.
    pub fn normalized(&self) -> Option<Self> {
        let total = self.total();
        if total == 0.0 {
            return None;
        }
        Some(Self {
            values: self.values.iter().map(|(d, w)| (*d, w / total)).collect(),
        })
    }

    /// Iterate weights in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        self.values.iter().map(|(d, v)| (*d, *v))
    }
}

impl Default for WeightSet {
    fn default() -> Self {
        Self::equal()
    }
}

impl TryFrom<BTreeMap<Dimension, f64>> for WeightSet {
    type Error = ModelError;

    fn try_from(values: BTreeMap<Dimension, f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<WeightSet> for BTreeMap<Dimension, f64> {
    fn from(set: WeightSet) -> Self {
        set.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{make_scores, make_weights};

    #[test]
    fn weights_from_counts_fill_missing_dimensions() {
        let counts = BTreeMap::from([(Dimension::Effort, 3), (Dimension::Frustration, 1)]);
        let weights = WeightSet::from_counts(&counts);
        assert_eq!(weights.get(Dimension::Effort), 3.0);
        assert_eq!(weights.get(Dimension::MentalDemand), 0.0);
        assert_eq!(weights.iter().count(), 6);
        assert_eq!(weights.total(), 4.0);
    }

    #[test]
    fn dimension_display() {
        assert_eq!(Dimension::MentalDemand.to_string(), "mental_demand");
        assert_eq!(Dimension::Frustration.to_string(), "frustration");
    }

    #[test]
    fn dimension_parse_aliases() {
        assert_eq!(
            "Mental Demand".parse::<Dimension>().unwrap(),
            Dimension::MentalDemand
        );
        assert_eq!(
            "temporal".parse::<Dimension>().unwrap(),
            Dimension::TemporalDemand
        );
        assert_eq!(
            "physical-demand".parse::<Dimension>().unwrap(),
            Dimension::PhysicalDemand
        );
        assert_eq!(
            "perf".parse::<Dimension>().unwrap(),
            Dimension::Performance
        );
        assert!(matches!(
            "stress".parse::<Dimension>(),
            Err(ModelError::UnknownDimension(_))
        ));
    }

    #[test]
    fn all_dimensions_in_display_order() {
        let names: Vec<_> = Dimension::all().iter().map(|d| d.name()).collect();
        assert_eq!(
            names,
            vec![
                "Mental Demand",
                "Physical Demand",
                "Temporal Demand",
                "Performance",
                "Effort",
                "Frustration"
            ]
        );
    }

    #[test]
    fn score_set_requires_every_dimension() {
        let result = ScoreSet::from_pairs(vec![(Dimension::MentalDemand, 50.0)]);
        assert_eq!(
            result,
            Err(ModelError::MissingDimension(Dimension::PhysicalDemand))
        );
    }

    #[test]
    fn score_set_rejects_out_of_range() {
        let scores = ScoreSet::uniform(50.0).unwrap();
        assert!(matches!(
            scores.with_score(Dimension::Effort, 101.0),
            Err(ModelError::ScoreOutOfRange { dimension: Dimension::Effort, .. })
        ));
        assert!(scores.with_score(Dimension::Effort, f64::NAN).is_err());
        assert!(scores.with_score(Dimension::Effort, 100.0).is_ok());
        assert!(scores.with_score(Dimension::Effort, 0.0).is_ok());
    }

    #[test]
    fn with_score_leaves_original_untouched() {
        let scores = make_scores([90.0, 10.0, 50.0, 50.0, 50.0, 10.0]);
        let edited = scores.with_score(Dimension::MentalDemand, 20.0).unwrap();
        assert_eq!(scores.get(Dimension::MentalDemand), 90.0);
        assert_eq!(edited.get(Dimension::MentalDemand), 20.0);
    }

    #[test]
    fn score_set_json_uses_snake_case_keys() {
        let scores = make_scores([90.0, 10.0, 50.0, 50.0, 50.0, 10.0]);
        let json = serde_json::to_string(&scores).unwrap();
        assert!(json.contains("\"mental_demand\":90.0"));

        let restored: ScoreSet = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, scores);
    }

    #[test]
    fn score_set_json_missing_key_fails() {
        let json = r#"{"mental_demand": 10, "effort": 20}"#;
        assert!(serde_json::from_str::<ScoreSet>(json).is_err());
    }

    #[test]
    fn weight_set_rejects_negative() {
        let mut values: BTreeMap<_, _> = Dimension::all().iter().map(|d| (*d, 1.0)).collect();
        values.insert(Dimension::Effort, -1.0);
        assert!(matches!(
            WeightSet::new(values),
            Err(ModelError::InvalidWeight { dimension: Dimension::Effort, .. })
        ));
    }

    #[test]
    fn weight_set_normalized_sums_to_one() {
        let weights = make_weights([1.0, 2.0, 3.0, 4.0, 5.0, 5.0]);
        let normalized = weights.normalized().unwrap();
        assert!((normalized.total() - 1.0).abs() < 1e-9);
        assert!((normalized.get(Dimension::MentalDemand) - 1.0 / 20.0).abs() < 1e-9);
    }

    #[test]
    fn weight_set_all_zero_cannot_normalize() {
        let zero = WeightSet::from_pairs(Dimension::all().iter().map(|d| (*d, 0.0))).unwrap();
        assert!(zero.normalized().is_none());
    }

    #[test]
    fn weight_set_scale_must_be_positive() {
        assert!(WeightSet::equal().scaled(0.0).is_err());
        assert_eq!(WeightSet::equal().scaled(2.0).unwrap().total(), 12.0);
    }
}
