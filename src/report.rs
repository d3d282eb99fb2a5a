//! Report formatting for assessment output.

use crate::assessment::{AssessmentComparison, AssessmentRecord, StoredAssessment};
use crate::context::ContextFactors;
use crate::elicitation::DimensionPair;
use crate::models::{Dimension, WeightSet};

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable formatted output.
    Pretty,
    /// JSON output.
    Json,
    /// Markdown report.
    Markdown,
    /// Compact single-line summary.
    Compact,
}

/// Format a scored assessment for output.
///
/// With `normalize_weights` the weight column is rescaled to sum to 1.
pub fn format_assessment(
    record: &AssessmentRecord,
    format: OutputFormat,
    normalize_weights: bool,
) -> String {
    let weights = display_weights(&record.weights, normalize_weights);
    match format {
        OutputFormat::Pretty => format_pretty(record, &weights),
        OutputFormat::Json => to_json(record),
        OutputFormat::Markdown => format_markdown(record, &weights),
        OutputFormat::Compact => format_compact(record),
    }
}

fn display_weights(weights: &WeightSet, normalize: bool) -> WeightSet {
    if normalize {
        weights.normalized().unwrap_or_else(|| weights.clone())
    } else {
        weights.clone()
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("Error: {}", e))
}

fn format_pretty(record: &AssessmentRecord, weights: &WeightSet) -> String {
    let mut output = String::new();

    output.push_str(&format!("Assessment: {}\n", record.name));
    if let Some(description) = &record.description {
        output.push_str(&format!("{}\n", description));
    }
    output.push_str(&format!(
        "Overall Task Load Index Score: {:.2}\n\n",
        record.overall_score
    ));

    output.push_str(&format!(
        "  {:<17} {:>7} {:>8}\n",
        "Dimension", "Score", "Weight"
    ));
    for dimension in Dimension::all() {
        output.push_str(&format!(
            "  {:<17} {:>7.1} {:>8.2}\n",
            dimension.name(),
            record.scores.get(*dimension),
            weights.get(*dimension)
        ));
    }
    output.push('\n');

    output.push_str("Dimension Impact:\n");
    for impact in record.impact() {
        output.push_str(&format!(
            "  {}: {:.2}\n",
            impact.dimension.name(),
            impact.weighted_score
        ));
    }

    output
}

fn format_markdown(record: &AssessmentRecord, weights: &WeightSet) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "# Task Load Assessment: {}\n\n",
        record.name
    ));
    if let Some(description) = &record.description {
        output.push_str(&format!("{}\n\n", description));
    }
    output.push_str(&format!(
        "**Overall Score**: {:.2}\n\n",
        record.overall_score
    ));

    output.push_str("| Dimension | Score | Weight |\n|-----------|-------|--------|\n");
    for dimension in Dimension::all() {
        output.push_str(&format!(
            "| {} | {:.1} | {:.2} |\n",
            dimension.name(),
            record.scores.get(*dimension),
            weights.get(*dimension)
        ));
    }
    output.push('\n');

    output.push_str("## Dimension Impact\n\n");
    for (rank, impact) in record.impact().iter().enumerate() {
        output.push_str(&format!(
            "{}. {} ({:.2})\n",
            rank + 1,
            impact.dimension.name(),
            impact.weighted_score
        ));
    }

    output
}

fn format_compact(record: &AssessmentRecord) -> String {
    let scores: Vec<String> = record
        .scores
        .iter()
        .map(|(dimension, score)| {
            let id = dimension.to_string();
            format!("{}:{:.0}", &id[..3.min(id.len())], score)
        })
        .collect();
    format!(
        "{:.2} [{}] {}",
        record.overall_score,
        scores.join(" "),
        record.name
    )
}

/// Format a comparison for output.
pub fn format_comparison(comparison: &AssessmentComparison, format: OutputFormat) -> String {
    match format {
        OutputFormat::Pretty => format_comparison_pretty(comparison),
        OutputFormat::Json => to_json(comparison),
        OutputFormat::Markdown => format_comparison_markdown(comparison),
        OutputFormat::Compact => format_comparison_compact(comparison),
    }
}

fn signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.2}", value)
    } else {
        format!("{:.2}", value)
    }
}

fn format_comparison_pretty(comparison: &AssessmentComparison) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Assessment Comparison\n\nBefore: {:.2} ({}) -> After: {:.2} ({}) ({})\n\n",
        comparison.before.overall_score,
        comparison.before.name,
        comparison.after.overall_score,
        comparison.after.name,
        signed(comparison.overall_delta)
    ));

    for delta in &comparison.dimension_deltas {
        output.push_str(&format!(
            "  {:<17} {:>6.1} -> {:>6.1} ({})\n",
            delta.dimension.name(),
            delta.before,
            delta.after,
            signed(delta.delta)
        ));
    }
    output.push('\n');

    if !comparison.increased.is_empty() {
        output.push_str("Increased:\n");
        for line in &comparison.increased {
            output.push_str(&format!("  + {}\n", line));
        }
        output.push('\n');
    }

    if !comparison.decreased.is_empty() {
        output.push_str("Decreased:\n");
        for line in &comparison.decreased {
            output.push_str(&format!("  - {}\n", line));
        }
        output.push('\n');
    }

    output
}

fn format_comparison_markdown(comparison: &AssessmentComparison) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "# Assessment Comparison\n\n**Before**: {:.2}\n**After**: {:.2}\n**Change**: {}\n\n",
        comparison.before.overall_score,
        comparison.after.overall_score,
        signed(comparison.overall_delta)
    ));

    output.push_str("| Dimension | Before | After | Change |\n|-----------|--------|-------|--------|\n");
    for delta in &comparison.dimension_deltas {
        output.push_str(&format!(
            "| {} | {:.1} | {:.1} | {} |\n",
            delta.dimension.name(),
            delta.before,
            delta.after,
            signed(delta.delta)
        ));
    }

    output
}

fn format_comparison_compact(comparison: &AssessmentComparison) -> String {
    format!(
        "{:.2} -> {:.2} ({})",
        comparison.before.overall_score,
        comparison.after.overall_score,
        signed(comparison.overall_delta)
    )
}

/// Format derived context factors.
pub fn format_context(factors: &ContextFactors, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(factors),
        OutputFormat::Markdown => format!(
            "| Factor | Value |\n|--------|-------|\n| Audience | {} |\n| Duration | {} |\n| Complexity | {} |\n",
            factors.audience, factors.duration, factors.complexity
        ),
        OutputFormat::Compact => format!(
            "audience={} duration={} complexity={}",
            factors.audience, factors.duration, factors.complexity
        ),
        OutputFormat::Pretty => format!(
            "Audience:   {}\nDuration:   {}\nComplexity: {}\n",
            factors.audience, factors.duration, factors.complexity
        ),
    }
}

/// Format derived weights.
pub fn format_weights(weights: &WeightSet, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(weights),
        OutputFormat::Compact => weights
            .iter()
            .map(|(dimension, weight)| format!("{}={}", dimension, weight))
            .collect::<Vec<_>>()
            .join(","),
        OutputFormat::Markdown => {
            let mut output = String::from("| Dimension | Weight |\n|-----------|--------|\n");
            for (dimension, weight) in weights.iter() {
                output.push_str(&format!("| {} | {} |\n", dimension.name(), weight));
            }
            output
        }
        OutputFormat::Pretty => {
            let mut output = String::from("Weights:\n");
            for (dimension, weight) in weights.iter() {
                output.push_str(&format!("  {:<17} {}\n", dimension.name(), weight));
            }
            output
        }
    }
}

/// Number the pairwise questions in presentation order.
pub fn format_questions(pairs: &[DimensionPair]) -> String {
    let mut output = String::new();
    for (i, pair) in pairs.iter().enumerate() {
        let (a, b) = pair.members();
        output.push_str(&format!("{:>2}. {} or {}\n", i + 1, a.name(), b.name()));
    }
    output
}

/// Format the list of saved assessments.
pub fn format_listing(entries: &[StoredAssessment], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => to_json(&entries),
        _ => {
            if entries.is_empty() {
                return "No saved assessments.\n".to_string();
            }
            let mut output = String::new();
            for entry in entries {
                output.push_str(&format!(
                    "{}  {:>6.2}  {}  {}\n",
                    entry.created_at.format("%Y-%m-%d %H:%M"),
                    entry.overall_score,
                    entry.id,
                    entry.name
                ));
            }
            output
        }
    }
}
