//! Guidance generation end to end

use taskload::context::{Audience, Complexity, Duration};
use taskload::guidance::Direction;
use taskload::{analyze_context, generate_guidance, ContextFactors, Dimension, ScoreSet};

fn sample_scores() -> ScoreSet {
    ScoreSet::from_pairs(
        Dimension::all()
            .iter()
            .copied()
            .zip([90.0, 10.0, 50.0, 50.0, 50.0, 10.0]),
    )
    .unwrap()
}

#[test]
fn increase_excludes_saturated_mental_demand() {
    let guidance = generate_guidance(&sample_scores(), 20, "", "GPT-3.5").unwrap();
    let text = guidance.to_string();

    assert!(!text.contains("mental demand"));
    assert!(text.contains(
        "- Increase the frustration of the task. Introduce more challenging obstacles or reduce available resources.\n"
    ));
    assert!(guidance
        .lines
        .iter()
        .all(|line| line.direction == Direction::Increase));
}

#[test]
fn no_change_sentence_ignores_inputs() {
    let expected =
        "GPT-4 analysis: No change in workload is desired. The current task design seems appropriate.";
    for context in ["", "expert quick complex", "novice extended easy"] {
        let guidance = generate_guidance(&sample_scores(), 0, context, "GPT-4").unwrap();
        assert_eq!(guidance.to_string(), expected);
    }
}

#[test]
fn expert_short_complex_context() {
    assert_eq!(
        analyze_context("This is for expert users, a short but complex task"),
        ContextFactors {
            audience: Audience::Expert,
            duration: Duration::Short,
            complexity: Complexity::High,
        }
    );
}

#[test]
fn decrease_advice_follows_context() {
    let guidance = generate_guidance(
        &sample_scores(),
        -25,
        "A quick, simple exercise for beginner trainees",
        "BERT",
    )
    .unwrap();
    let text = guidance.to_string();

    assert!(text.starts_with("Using BERT for analysis:\n\nTo decrease the overall workload by approximately 25 points"));
    assert!(text.contains(
        "- Decrease the temporal demand of the task. Extend the timeframe if possible, or prioritize essential subtasks."
    ));
    assert!(text.contains(
        "- Decrease the performance of the task. Adjust performance expectations to be more achievable, focusing on key outcomes."
    ));
    assert!(text.contains(
        "- Decrease the mental demand of the task. Simplify the task, provide step-by-step instructions, or offer more frequent guidance."
    ));
    // Physical demand and frustration sit at 10 and have nowhere to go.
    assert!(!text.contains("physical demand"));
    assert!(!text.contains("frustration"));
}

#[test]
fn guidance_serializes_lines() {
    let guidance = generate_guidance(&sample_scores(), 10, "", "GPT-4").unwrap();
    let json = serde_json::to_value(&guidance).unwrap();
    assert_eq!(json["lines"][0]["dimension"], "temporal_demand");
    assert_eq!(json["lines"][0]["direction"], "increase");
    assert_eq!(json["factors"]["audience"], "general");
}
