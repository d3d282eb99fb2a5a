use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::assessment::{self, AssessmentRecord, AssessmentStore, StoreError};
use crate::cli::{
    Command, CompareArgs, ContextArgs, ElicitArgs, FormatArgs, GuideArgs, OutputFormat,
    RatingArgs, ScoreArgs, ShowArgs, WeightArgs,
};
use crate::config::Settings;
use crate::context::analyze_context;
use crate::elicitation::{
    derive_weights, derive_weights_strict, generate_pairwise_questions, ElicitationError,
    Judgment, JudgmentSet,
};
use crate::features::Feature;
use crate::guidance::{GuidanceError, GuidanceGenerator};
use crate::models::{Dimension, ModelError, ScoreSet, WeightSet};
use crate::prompt::{run_elicitation, PromptError, Prompter};
use crate::report;
use crate::scoring::ScoringError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Elicitation(#[from] ElicitationError),
    #[error(transparent)]
    Guidance(#[from] GuidanceError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
    #[error("Failed to serialize output: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

pub struct App<S: AssessmentStore, P: Prompter> {
    store: S,
    prompter: P,
    settings: Settings,
}

impl<S: AssessmentStore, P: Prompter> App<S, P> {
    pub fn new(store: S, prompter: P, settings: Settings) -> Self {
        Self {
            store,
            prompter,
            settings,
        }
    }

    pub fn run(&mut self, command: Command) -> Result<(), AppError> {
        let output = self.execute(command)?;
        print!("{}", output);
        if !output.is_empty() && !output.ends_with('\n') {
            println!();
        }
        Ok(())
    }

    /// Run a command and return what it would print.
    pub fn execute(&mut self, command: Command) -> Result<String, AppError> {
        match command {
            Command::Score(args) => self.handle_score(args),
            Command::Guide(args) => self.handle_guide(args),
            Command::Context(args) => Ok(self.handle_context(args)),
            Command::Pairs => self.handle_pairs(),
            Command::Elicit(args) => self.handle_elicit(args),
            Command::List(args) => self.handle_list(args),
            Command::Show(args) => self.handle_show(args),
            Command::Compare(args) => self.handle_compare(args),
            Command::Delete(args) => {
                self.store.delete(&args.id)?;
                Ok(format!("Deleted {}\n", args.id))
            }
        }
    }

    fn handle_score(&mut self, args: ScoreArgs) -> Result<String, AppError> {
        let scores = resolve_scores(&args.ratings)?;
        let weights = self.resolve_weights(&args.weights)?;

        let mut record = AssessmentRecord::new(args.name, scores, weights)?;
        if let Some(description) = args.description {
            record = record.with_description(description);
        }
        debug!("Scored '{}': {:.2}", record.name, record.overall_score);

        let output = report::format_assessment(
            &record,
            convert_format(args.format),
            self.settings.features.is_enabled(Feature::NormalizeWeights),
        );

        if args.save {
            let id = self.store.save(&record)?;
            info!("Saved as {}", id);
        }

        Ok(output)
    }

    fn handle_guide(&mut self, args: GuideArgs) -> Result<String, AppError> {
        let scores = resolve_scores(&args.ratings)?;
        let context = match (&args.context, &args.context_file) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => read_text(path)?,
            (None, None) => String::new(),
        };

        let mut generator = GuidanceGenerator::new();
        if let Some(weights) = self.resolve_weights(&args.weights)? {
            generator = generator.with_weights(weights);
        }

        let guidance = generator.generate(
            &scores,
            args.change,
            &context,
            &self.settings.model_label,
        )?;

        match args.format {
            OutputFormat::Json => to_json_output(&guidance),
            _ => Ok(guidance.to_string()),
        }
    }

    fn handle_context(&self, args: ContextArgs) -> String {
        let factors = analyze_context(&args.text);
        report::format_context(&factors, convert_format(args.format))
    }

    fn handle_pairs(&self) -> Result<String, AppError> {
        let pairs = generate_pairwise_questions(Dimension::all())?;
        Ok(report::format_questions(&pairs))
    }

    fn handle_elicit(&mut self, args: ElicitArgs) -> Result<String, AppError> {
        info!("Answer each question with 1 or 2.");
        let judgments = run_elicitation(&mut self.prompter, Dimension::all())?;
        let weights = derive_weights_strict(&judgments)?;

        if let Some(path) = &args.save_judgments {
            write_json(path, &judgments.to_judgments())?;
            info!("Wrote judgments to {}", path.display());
        }
        if let Some(path) = &args.output {
            write_json(path, &weights)?;
            info!("Wrote weights to {}", path.display());
        }

        Ok(report::format_weights(&weights, convert_format(args.format)))
    }

    fn handle_list(&self, args: FormatArgs) -> Result<String, AppError> {
        let entries = self.store.list()?;
        Ok(report::format_listing(&entries, convert_format(args.format)))
    }

    fn handle_show(&self, args: ShowArgs) -> Result<String, AppError> {
        let record = self.store.load(&args.id)?;
        Ok(report::format_assessment(
            &record,
            convert_format(args.format),
            self.settings.features.is_enabled(Feature::NormalizeWeights),
        ))
    }

    fn handle_compare(&self, args: CompareArgs) -> Result<String, AppError> {
        let before = self.store.load(&args.before)?;
        let after = self.store.load(&args.after)?;

        let comparison = assessment::compare_assessments(before, after);
        Ok(report::format_comparison(
            &comparison,
            convert_format(args.format),
        ))
    }

    /// Weights from a judgment file, a weights file or `--weight` flags; `None` means equal weights.
    fn resolve_weights(&self, args: &WeightArgs) -> Result<Option<WeightSet>, AppError> {
        if let Some(path) = &args.judgments {
            let judgments: Vec<Judgment> = read_json(path)?;
            let set = JudgmentSet::from_judgments(&judgments)?;
            let weights = if self.settings.features.is_enabled(Feature::LenientJudgments) {
                derive_weights(&set)
            } else {
                derive_weights_strict(&set)?
            };
            return Ok(Some(weights));
        }

        if let Some(path) = &args.weights_file {
            return Ok(Some(read_json(path)?));
        }

        if !args.weights.is_empty() {
            return Ok(Some(WeightSet::from_pairs(args.weights.iter().copied())?));
        }

        Ok(None)
    }
}

fn resolve_scores(args: &RatingArgs) -> Result<ScoreSet, AppError> {
    match &args.scores_file {
        Some(path) => read_json(path),
        None => Ok(ScoreSet::from_pairs(args.ratings())?),
    }
}

fn read_text(path: &Path) -> Result<String, AppError> {
    fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.display().to_string(),
        source,
    })
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let text = read_text(path)?;
    serde_json::from_str(&text).map_err(|source| AppError::Json {
        path: path.display().to_string(),
        source,
    })
}

fn to_json_output<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(AppError::Serialize)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value).map_err(|source| AppError::Json {
        path: path.display().to_string(),
        source,
    })?;
    fs::write(path, json).map_err(|source| AppError::Write {
        path: path.display().to_string(),
        source,
    })
}

fn convert_format(format: OutputFormat) -> report::OutputFormat {
    match format {
        OutputFormat::Pretty => report::OutputFormat::Pretty,
        OutputFormat::Json => report::OutputFormat::Json,
        OutputFormat::Markdown => report::OutputFormat::Markdown,
        OutputFormat::Compact => report::OutputFormat::Compact,
    }
}
