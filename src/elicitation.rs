//! Pairwise-comparison weight elicitation.
//!
//! Raters are asked, for every pair of dimensions, which one contributed more
//! to the workload. Weights are then the number of times each dimension was
//! chosen. This is a win-count tally rather than an eigenvector-based AHP
//! weighting, and the counts are not normalized.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Dimension, WeightSet};

/// Errors from pairwise elicitation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ElicitationError {
    #[error("{missing} of {total} comparisons have no judgment")]
    IncompleteJudgmentSet { missing: usize, total: usize },
    #[error("Dimension listed more than once: {0}")]
    DuplicateDimension(Dimension),
    #[error("Cannot compare {0} with itself")]
    SameDimension(Dimension),
    #[error("Pair {0} is not part of this elicitation")]
    PairNotElicited(DimensionPair),
    #[error("{chosen} is not a member of pair {pair}")]
    ChoiceNotInPair { pair: DimensionPair, chosen: Dimension },
}

/// An unordered pair of distinct dimensions.
///
/// Members are stored in display order so `(A, B)` and `(B, A)` compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DimensionPair {
    low: Dimension,
    high: Dimension,
}

impl DimensionPair {
    pub fn new(a: Dimension, b: Dimension) -> Result<Self, ElicitationError> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Ok(Self { low: a, high: b }),
            std::cmp::Ordering::Greater => Ok(Self { low: b, high: a }),
            std::cmp::Ordering::Equal => Err(ElicitationError::SameDimension(a)),
        }
    }

    /// Both members, earlier display order first.
    pub fn members(&self) -> (Dimension, Dimension) {
        (self.low, self.high)
    }

    pub fn contains(&self, dimension: Dimension) -> bool {
        self.low == dimension || self.high == dimension
    }
}

impl std::fmt::Display for DimensionPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} vs {}", self.low.name(), self.high.name())
    }
}

/// Generate every pairwise question for `dimensions`.
///
/// Order is the nested-loop enumeration: each dimension is paired with every
/// dimension after it in the input, so six dimensions yield fifteen pairs.
pub fn generate_pairwise_questions(
    dimensions: &[Dimension],
) -> Result<Vec<DimensionPair>, ElicitationError> {
    let mut pairs = Vec::with_capacity(dimensions.len() * dimensions.len().saturating_sub(1) / 2);
    for (i, first) in dimensions.iter().enumerate() {
        for second in &dimensions[i + 1..] {
            pairs.push(DimensionPair::new(*first, *second).map_err(|_| {
                ElicitationError::DuplicateDimension(*first)
            })?);
        }
    }
    Ok(pairs)
}

/// One recorded answer, as read from or written to a judgment file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Judgment {
    pub pair: [Dimension; 2],
    pub chosen: Dimension,
}

/// Answers collected during one elicitation session.
#[derive(Debug, Clone, PartialEq)]
pub struct JudgmentSet {
    dimensions: Vec<Dimension>,
    questions: Vec<DimensionPair>,
    choices: BTreeMap<DimensionPair, Dimension>,
}

impl JudgmentSet {
    /// Start an empty session over `dimensions`.
    pub fn new(dimensions: &[Dimension]) -> Result<Self, ElicitationError> {
        let questions = generate_pairwise_questions(dimensions)?;
        Ok(Self {
            dimensions: dimensions.to_vec(),
            questions,
            choices: BTreeMap::new(),
        })
    }

    /// Build a session over all six dimensions from recorded answers.
    pub fn from_judgments(judgments: &[Judgment]) -> Result<Self, ElicitationError> {
        let mut set = Self::new(Dimension::all())?;
        for judgment in judgments {
            set.record(judgment.pair[0], judgment.pair[1], judgment.chosen)?;
        }
        Ok(set)
    }

    /// Record which member of a pair matters more.
    ///
    /// Returns the previous choice if the pair had already been judged.
    pub fn record(
        &mut self,
        a: Dimension,
        b: Dimension,
        chosen: Dimension,
    ) -> Result<Option<Dimension>, ElicitationError> {
        let pair = DimensionPair::new(a, b)?;
        if !self.questions.contains(&pair) {
            return Err(ElicitationError::PairNotElicited(pair));
        }
        if !pair.contains(chosen) {
            return Err(ElicitationError::ChoiceNotInPair { pair, chosen });
        }
        Ok(self.choices.insert(pair, chosen))
    }

    pub fn choice(&self, pair: &DimensionPair) -> Option<Dimension> {
        self.choices.get(pair).copied()
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// Questions in presentation order.
    pub fn questions(&self) -> &[DimensionPair] {
        &self.questions
    }

    /// Questions still lacking an answer, in presentation order.
    pub fn missing(&self) -> Vec<DimensionPair> {
        self.questions
            .iter()
            .filter(|q| !self.choices.contains_key(q))
            .copied()
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.choices.len() == self.questions.len()
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Answers in presentation order, for writing back to a judgment file.
    pub fn to_judgments(&self) -> Vec<Judgment> {
        self.questions
            .iter()
            .filter_map(|q| {
                self.choices.get(q).map(|chosen| {
                    let (a, b) = q.members();
                    Judgment {
                        pair: [a, b],
                        chosen: *chosen,
                    }
                })
            })
            .collect()
    }
}

/// Tally how often each dimension was chosen.
///
/// Dimensions never chosen, or outside the elicited list, get weight 0. A
/// dimension that wins every one of its comparisons gets `n - 1`. Unanswered
/// pairs are silently skipped; see [`derive_weights_strict`].
pub fn derive_weights(judgments: &JudgmentSet) -> WeightSet {
    let mut counts: BTreeMap<Dimension, usize> = BTreeMap::new();
    for chosen in judgments.choices.values() {
        *counts.entry(*chosen).or_insert(0) += 1;
    }
    WeightSet::from_counts(&counts)
}

/// Like [`derive_weights`], but every generated pair must have been judged.
pub fn derive_weights_strict(judgments: &JudgmentSet) -> Result<WeightSet, ElicitationError> {
    let missing = judgments.missing().len();
    if missing > 0 {
        return Err(ElicitationError::IncompleteJudgmentSet {
            missing,
            total: judgments.questions.len(),
        });
    }
    Ok(derive_weights(judgments))
}
