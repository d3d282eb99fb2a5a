use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::features::Feature;
use crate::models::{Dimension, ScoreSet};

/// Command line interface definition for taskload.
#[derive(Parser, Debug)]
#[command(name = "taskload")]
#[command(about = "Score NASA Task Load Index assessments and get workload guidance")]
#[command(version)]
pub struct Cli {
    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbosity")]
    pub quiet: bool,

    /// Enable feature flags (comma-separated)
    #[arg(long, value_enum, value_delimiter = ',', global = true)]
    pub features: Option<Vec<Feature>>,

    /// Directory for saved assessments
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    /// Model label shown in guidance output (e.g. GPT-3.5, GPT-4, BERT)
    #[arg(long, global = true)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the overall score and dimension impact
    Score(ScoreArgs),
    /// Suggest how to move the overall workload up or down
    Guide(GuideArgs),
    /// Show the context factors derived from a project description
    Context(ContextArgs),
    /// List the pairwise comparison questions in order
    Pairs,
    /// Ask the pairwise questions interactively and derive weights
    Elicit(ElicitArgs),
    /// List saved assessments
    List(FormatArgs),
    /// Show a saved assessment
    Show(ShowArgs),
    /// Compare two saved assessments
    Compare(CompareArgs),
    /// Delete a saved assessment
    Delete(DeleteArgs),
}

/// Ratings for the six dimensions (0-100, default 50).
///
/// Rating flags and `--scores-file` are mutually exclusive.
#[derive(Args, Debug, Clone)]
pub struct RatingArgs {
    /// Mental demand rating
    #[arg(long, default_value_t = 50.0, value_parser = parse_rating, conflicts_with = "scores_file")]
    pub mental: f64,
    /// Physical demand rating
    #[arg(long, default_value_t = 50.0, value_parser = parse_rating, conflicts_with = "scores_file")]
    pub physical: f64,
    /// Temporal demand rating
    #[arg(long, default_value_t = 50.0, value_parser = parse_rating, conflicts_with = "scores_file")]
    pub temporal: f64,
    /// Performance rating
    #[arg(long, default_value_t = 50.0, value_parser = parse_rating, conflicts_with = "scores_file")]
    pub performance: f64,
    /// Effort rating
    #[arg(long, default_value_t = 50.0, value_parser = parse_rating, conflicts_with = "scores_file")]
    pub effort: f64,
    /// Frustration rating
    #[arg(long, default_value_t = 50.0, value_parser = parse_rating, conflicts_with = "scores_file")]
    pub frustration: f64,
    /// Read all ratings from a JSON file instead
    #[arg(long, value_name = "FILE")]
    pub scores_file: Option<PathBuf>,
}

impl RatingArgs {
    /// Pair each rating flag with its dimension, in display order.
    pub fn ratings(&self) -> [(Dimension, f64); 6] {
        [
            (Dimension::MentalDemand, self.mental),
            (Dimension::PhysicalDemand, self.physical),
            (Dimension::TemporalDemand, self.temporal),
            (Dimension::Performance, self.performance),
            (Dimension::Effort, self.effort),
            (Dimension::Frustration, self.frustration),
        ]
    }
}

/// Where weights come from. Without any of these, every dimension weighs 1.
#[derive(Args, Debug, Clone, Default)]
pub struct WeightArgs {
    /// Weight for one dimension, e.g. `--weight mental=3`. Repeat for all six.
    #[arg(long = "weight", value_name = "DIM=WEIGHT", value_parser = parse_weight,
          conflicts_with_all = ["weights_file", "judgments"])]
    pub weights: Vec<(Dimension, f64)>,
    /// Read weights from a JSON file
    #[arg(long, value_name = "FILE", conflicts_with = "judgments")]
    pub weights_file: Option<PathBuf>,
    /// Derive weights from a pairwise judgment file
    #[arg(long, value_name = "FILE")]
    pub judgments: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub ratings: RatingArgs,
    #[command(flatten)]
    pub weights: WeightArgs,
    /// Name for the assessment
    #[arg(long, default_value = "Untitled assessment")]
    pub name: String,
    /// Optional task description stored with the assessment
    #[arg(long)]
    pub description: Option<String>,
    /// Save the assessment to the store
    #[arg(long)]
    pub save: bool,
    #[arg(long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct GuideArgs {
    #[command(flatten)]
    pub ratings: RatingArgs,
    #[command(flatten)]
    pub weights: WeightArgs,
    /// Desired change in the overall score (-100 to 100)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true,
          value_parser = clap::value_parser!(i32).range(-100..=100))]
    pub change: i32,
    /// Project description used to tailor the advice
    #[arg(long, conflicts_with = "context_file")]
    pub context: Option<String>,
    /// Read the project description from a file
    #[arg(long, value_name = "FILE")]
    pub context_file: Option<PathBuf>,
    #[arg(long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct ContextArgs {
    /// Project description
    pub text: String,
    #[arg(long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct ElicitArgs {
    /// Write the derived weights to this JSON file
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Write the raw answers to this JSON file
    #[arg(long, value_name = "FILE")]
    pub save_judgments: Option<PathBuf>,
    #[arg(long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    #[arg(long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Assessment id as shown by `list`
    pub id: String,
    #[arg(long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Id of the earlier assessment
    pub before: String,
    /// Id of the later assessment
    pub after: String,
    #[arg(long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct DeleteArgs {
    pub id: String,
}

/// Output format selectable on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Pretty,
    /// JSON
    Json,
    /// Markdown tables
    Markdown,
    /// One line
    Compact,
}

fn parse_rating(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if !(ScoreSet::MIN..=ScoreSet::MAX).contains(&value) {
        return Err(format!("rating must be within 0-100, got {}", value));
    }
    Ok(value)
}

fn parse_weight(s: &str) -> Result<(Dimension, f64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected DIM=WEIGHT, got '{}'", s))?;
    let dimension: Dimension = name.parse().map_err(|e| format!("{}", e))?;
    let weight: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if !weight.is_finite() || weight < 0.0 {
        return Err(format!("weight must be non-negative, got {}", weight));
    }
    Ok((dimension, weight))
}
