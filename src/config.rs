//! Runtime settings.
//!
//! Settings can be configured via:
//! - CLI arguments: `--model`, `--store-dir`, `--features`
//! - Environment variables: `TASKLOAD_MODEL`, `TASKLOAD_STORE_DIR`, `TASKLOAD_FEATURES`
//!
//! CLI arguments take precedence over environment variables.

use std::env;
use std::path::PathBuf;

use log::debug;

use crate::features::{Feature, Features};

pub const MODEL_ENV: &str = "TASKLOAD_MODEL";
pub const STORE_DIR_ENV: &str = "TASKLOAD_STORE_DIR";

/// Model label shown in guidance when none is configured.
pub const DEFAULT_MODEL_LABEL: &str = "GPT-3.5";
/// Labels in common use. Any other label is accepted as-is.
pub const KNOWN_MODEL_LABELS: &[&str] = &["GPT-3.5", "GPT-4", "BERT"];
pub const DEFAULT_STORE_DIR: &str = ".taskload/assessments";

/// Resolved configuration for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Label printed in the guidance header.
    pub model_label: String,
    /// Directory holding saved assessments.
    pub store_dir: PathBuf,
    pub features: Features,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model_label: DEFAULT_MODEL_LABEL.to_string(),
            store_dir: PathBuf::from(DEFAULT_STORE_DIR),
            features: Features::new(),
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create settings from environment variables.
    ///
    /// Reads:
    /// - `TASKLOAD_MODEL` - model label for guidance output
    /// - `TASKLOAD_STORE_DIR` - directory for saved assessments
    /// - `TASKLOAD_FEATURES` - comma-separated feature flags
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let model_label = env::var(MODEL_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.model_label);
        let store_dir = env::var(STORE_DIR_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.store_dir);

        Self {
            model_label,
            store_dir,
            features: Features::from_env(),
        }
    }

    pub fn with_model_label(mut self, label: impl Into<String>) -> Self {
        self.model_label = label.into();
        self
    }

    pub fn with_store_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.store_dir = dir.into();
        self
    }

    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.enable(feature);
        self
    }

    /// Merge with CLI overrides. CLI values take precedence.
    pub fn with_overrides(
        mut self,
        model_label: Option<String>,
        store_dir: Option<PathBuf>,
        features: Option<&[Feature]>,
    ) -> Self {
        if let Some(label) = model_label {
            self.model_label = label;
        }
        if !KNOWN_MODEL_LABELS.contains(&self.model_label.as_str()) {
            debug!("Using custom model label '{}'", self.model_label);
        }
        if let Some(dir) = store_dir {
            self.store_dir = dir;
        }
        self.features = self.features.with_overrides(features);
        self
    }
}
