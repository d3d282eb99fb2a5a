//! Feature flags for controlling optional behaviors.
//!
//! Features can be enabled via:
//! - CLI: `--features lenient-judgments,normalize-weights`
//! - Environment: `TASKLOAD_FEATURES=lenient-judgments,normalize-weights`
//!
//! The enabled set is carried in [`crate::config::Settings`] and passed to
//! whoever needs it.

use std::collections::HashSet;
use std::env;

use clap::ValueEnum;
use log::warn;
use serde::{Deserialize, Serialize};

pub const FEATURES_ENV: &str = "TASKLOAD_FEATURES";

/// Available feature flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Feature {
    /// Derive weights from judgment files even when some pairs were never
    /// answered, instead of rejecting the file.
    LenientJudgments,
    /// Show weights rescaled to sum to 1 in reports.
    NormalizeWeights,
}

/// Collection of enabled features.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Features {
    enabled: HashSet<Feature>,
}

impl Features {
    /// Create an empty feature set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from environment variable.
    pub fn from_env() -> Self {
        match env::var(FEATURES_ENV) {
            Ok(value) => Self::parse_list(&value),
            Err(_) => Self::new(),
        }
    }

    /// Parse a comma-separated list, skipping unknown names with a warning.
    pub fn parse_list(value: &str) -> Self {
        let mut features = Self::new();
        for name in value.split(',').map(|s| s.trim()).filter(|s| !s.is_empty()) {
            if let Ok(feature) = Feature::from_str(name, true) {
                features.enable(feature);
            } else {
                warn!("Unknown feature '{}' in {}", name, FEATURES_ENV);
            }
        }
        features
    }

    /// Enable a feature.
    pub fn enable(&mut self, feature: Feature) {
        self.enabled.insert(feature);
    }

    /// Disable a feature.
    pub fn disable(&mut self, feature: Feature) {
        self.enabled.remove(&feature);
    }

    /// Check if a feature is enabled.
    pub fn is_enabled(&self, feature: Feature) -> bool {
        self.enabled.contains(&feature)
    }

    /// Merge with CLI overrides.
    pub fn with_overrides(mut self, cli_features: Option<&[Feature]>) -> Self {
        if let Some(features) = cli_features {
            for feature in features {
                self.enable(*feature);
            }
        }
        self
    }

    /// List all enabled features.
    pub fn enabled_features(&self) -> impl Iterator<Item = Feature> + '_ {
        self.enabled.iter().copied()
    }
}
