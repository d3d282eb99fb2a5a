//! Assessment persistence.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::assessment::AssessmentRecord;

/// Errors from saving or loading assessments.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid assessment file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No saved assessment with id '{0}'")]
    NotFound(String),
    #[error("Invalid assessment id '{0}'")]
    InvalidId(String),
}

/// Summary of a saved assessment, for listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAssessment {
    pub id: String,
    pub name: String,
    pub overall_score: f64,
    pub created_at: DateTime<Utc>,
}

/// Trait abstracting how assessments are persisted between runs.
pub trait AssessmentStore {
    /// Save a record and return the id it was stored under.
    fn save(&self, record: &AssessmentRecord) -> Result<String, StoreError>;
    fn load(&self, id: &str) -> Result<AssessmentRecord, StoreError>;
    /// All saved assessments, oldest first.
    fn list(&self) -> Result<Vec<StoredAssessment>, StoreError>;
    fn delete(&self, id: &str) -> Result<(), StoreError>;
    fn exists(&self, id: &str) -> bool;
}

/// Filesystem-backed store keeping one JSON file per assessment.
pub struct FileAssessmentStore {
    dir: PathBuf,
}

impl FileAssessmentStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> Result<PathBuf, StoreError> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidId(id.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", id)))
    }

    /// Id prefix derived from the record's name and timestamp.
    fn base_id(record: &AssessmentRecord) -> String {
        format!(
            "{}_{}",
            slugify(&record.name),
            record.created_at.format("%Y%m%d_%H%M%S")
        )
    }
}

impl AssessmentStore for FileAssessmentStore {
    fn save(&self, record: &AssessmentRecord) -> Result<String, StoreError> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(record)?;

        // Write next to the target so the rename stays on one filesystem.
        let mut temp = tempfile::NamedTempFile::new_in(&self.dir)?;
        temp.write_all(json.as_bytes())?;

        let base = Self::base_id(record);
        let mut id = base.clone();
        let mut suffix = 2;
        loop {
            let path = self.path_for(&id)?;
            match temp.persist_noclobber(&path) {
                Ok(_) => {
                    info!("Saved assessment '{}' to {}", record.name, path.display());
                    return Ok(id);
                }
                Err(err) if err.error.kind() == io::ErrorKind::AlreadyExists => {
                    temp = err.file;
                    id = format!("{}_{}", base, suffix);
                    suffix += 1;
                }
                Err(err) => return Err(err.error.into()),
            }
        }
    }

    fn load(&self, id: &str) -> Result<AssessmentRecord, StoreError> {
        let path = self.path_for(id)?;
        if !path.exists() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        let json = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn list(&self) -> Result<Vec<StoredAssessment>, StoreError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().map(|e| e != "json").unwrap_or(true) {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match self.load(id) {
                Ok(record) => entries.push(StoredAssessment {
                    id: id.to_string(),
                    name: record.name,
                    overall_score: record.overall_score,
                    created_at: record.created_at,
                }),
                Err(err) => debug!("Skipping {}: {}", path.display(), err),
            }
        }

        entries.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(entries)
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        let path = self.path_for(id)?;
        if !path.exists() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        fs::remove_file(&path)?;
        info!("Deleted assessment {}", id);
        Ok(())
    }

    fn exists(&self, id: &str) -> bool {
        self.path_for(id).map(|p| p.exists()).unwrap_or(false)
    }
}

/// Lowercase a name into `[a-z0-9-]`, falling back to "assessment".
pub fn slugify(input: &str) -> String {
    let lowered = input.to_ascii_lowercase();
    let cleaned: String = lowered
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    let collapsed = cleaned
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if collapsed.is_empty() {
        "assessment".to_string()
    } else {
        collapsed
    }
}
