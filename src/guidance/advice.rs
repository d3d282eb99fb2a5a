//! Advice text for each dimension and direction of change.

use crate::context::{Audience, Complexity, ContextFactors, Duration};
use crate::models::Dimension;

/// Advice for one dimension in one direction.
///
/// Factor-keyed variants always carry a `general` string, used whenever the
/// factor has no special case (general audience, medium duration, moderate
/// complexity).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advice {
    Fixed(&'static str),
    ByAudience {
        novice: &'static str,
        expert: &'static str,
        general: &'static str,
    },
    ByDuration {
        short: &'static str,
        long: &'static str,
        general: &'static str,
    },
    ByComplexity {
        low: &'static str,
        high: &'static str,
        general: &'static str,
    },
}

impl Advice {
    /// Pick the text matching the context.
    pub fn select(&self, factors: &ContextFactors) -> &'static str {
        match *self {
            Advice::Fixed(text) => text,
            Advice::ByAudience {
                novice,
                expert,
                general,
            } => match factors.audience {
                Audience::Novice => novice,
                Audience::Expert => expert,
                Audience::General => general,
            },
            Advice::ByDuration {
                short,
                long,
                general,
            } => match factors.duration {
                Duration::Short => short,
                Duration::Long => long,
                Duration::Medium => general,
            },
            Advice::ByComplexity { low, high, general } => match factors.complexity {
                Complexity::Low => low,
                Complexity::High => high,
                Complexity::Moderate => general,
            },
        }
    }
}

/// Increase and decrease advice for a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionAdvice {
    pub increase: Advice,
    pub decrease: Advice,
}

/// Look up the advice table entry for a dimension.
pub fn advice_for(dimension: Dimension) -> DimensionAdvice {
    match dimension {
        Dimension::MentalDemand => DimensionAdvice {
            increase: Advice::ByAudience {
                novice: "Gradually introduce more complex problem-solving elements, providing scaffolding for learning.",
                expert: "Introduce advanced cognitive challenges or multitasking elements to the task.",
                general: "Introduce more complex problem-solving elements or increase the cognitive load of the task.",
            },
            decrease: Advice::ByAudience {
                novice: "Simplify the task, provide step-by-step instructions, or offer more frequent guidance.",
                expert: "Streamline decision-making processes or provide automated cognitive support for routine aspects.",
                general: "Simplify the task, provide clearer instructions, or offer decision-making support.",
            },
        },
        Dimension::PhysicalDemand => DimensionAdvice {
            increase: Advice::Fixed(
                "Add more physical elements to the task or increase the duration of physical activities.",
            ),
            decrease: Advice::Fixed(
                "Reduce physical requirements, provide ergonomic support, or automate physical aspects of the task.",
            ),
        },
        Dimension::TemporalDemand => DimensionAdvice {
            increase: Advice::ByDuration {
                short: "Introduce tighter deadlines within the limited timeframe.",
                long: "Increase the frequency of milestones or deliverables throughout the project duration.",
                general: "Introduce tighter deadlines or increase the pace of task progression.",
            },
            decrease: Advice::ByDuration {
                short: "Extend the timeframe if possible, or prioritize essential subtasks.",
                long: "Introduce more flexible deadlines or longer intervals between milestones.",
                general: "Allow more time for task completion or introduce breaks between sub-tasks.",
            },
        },
        Dimension::Performance => DimensionAdvice {
            increase: Advice::ByComplexity {
                low: "Set gradually increasing performance standards to encourage improvement.",
                high: "Introduce stretch goals or additional performance metrics to track.",
                general: "Set higher performance standards or introduce more challenging success criteria.",
            },
            decrease: Advice::ByComplexity {
                low: "Adjust performance expectations to be more achievable, focusing on key outcomes.",
                high: "Prioritize quality over quantity, allowing for a more focused approach on critical aspects.",
                general: "Adjust performance expectations or provide additional resources to support task completion.",
            },
        },
        Dimension::Effort => DimensionAdvice {
            increase: Advice::Fixed(
                "Introduce additional sub-tasks or increase the complexity of existing elements.",
            ),
            decrease: Advice::Fixed(
                "Streamline processes, provide shortcuts, or offer more efficient tools for task completion.",
            ),
        },
        Dimension::Frustration => DimensionAdvice {
            increase: Advice::Fixed(
                "Introduce more challenging obstacles or reduce available resources.",
            ),
            decrease: Advice::ByAudience {
                novice: "Improve user interface, provide more frequent positive feedback, and offer readily available support.",
                expert: "Minimize unnecessary obstacles, provide advanced troubleshooting tools, and allow for greater autonomy.",
                general: "Improve user interface, provide clearer feedback, or offer more support during task execution.",
            },
        },
    }
}
