//! Keyword-based extraction of project context factors.

use serde::{Deserialize, Serialize};

/// Who the task is designed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    Novice,
    Expert,
    #[default]
    General,
}

/// Expected length of the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Duration {
    Short,
    Long,
    #[default]
    Medium,
}

/// How intricate the task is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Low,
    High,
    #[default]
    Moderate,
}

/// Coarse categorical signals derived from a project description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContextFactors {
    pub audience: Audience,
    pub duration: Duration,
    pub complexity: Complexity,
}

impl std::fmt::Display for Audience {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Novice => write!(f, "novice"),
            Self::Expert => write!(f, "expert"),
            Self::General => write!(f, "general"),
        }
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Short => write!(f, "short"),
            Self::Long => write!(f, "long"),
            Self::Medium => write!(f, "medium"),
        }
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::High => write!(f, "high"),
            Self::Moderate => write!(f, "moderate"),
        }
    }
}

const NOVICE_KEYWORDS: &[&str] = &["beginner", "novice"];
const EXPERT_KEYWORDS: &[&str] = &["expert", "advanced"];
const SHORT_KEYWORDS: &[&str] = &["short", "quick"];
const LONG_KEYWORDS: &[&str] = &["long", "extended"];
const LOW_KEYWORDS: &[&str] = &["simple", "easy"];
const HIGH_KEYWORDS: &[&str] = &["complex", "difficult"];

fn mentions(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Derive context factors from free text.
///
/// Plain case-insensitive substring matching: "belong" counts as "long".
/// Within each family the first branch wins, so text mentioning both
/// "beginner" and "expert" is treated as novice.
pub fn analyze_context(text: &str) -> ContextFactors {
    let text = text.to_lowercase();

    let audience = if mentions(&text, NOVICE_KEYWORDS) {
        Audience::Novice
    } else if mentions(&text, EXPERT_KEYWORDS) {
        Audience::Expert
    } else {
        Audience::General
    };

    let duration = if mentions(&text, SHORT_KEYWORDS) {
        Duration::Short
    } else if mentions(&text, LONG_KEYWORDS) {
        Duration::Long
    } else {
        Duration::Medium
    };

    let complexity = if mentions(&text, LOW_KEYWORDS) {
        Complexity::Low
    } else if mentions(&text, HIGH_KEYWORDS) {
        Complexity::High
    } else {
        Complexity::Moderate
    };

    ContextFactors {
        audience,
        duration,
        complexity,
    }
}
