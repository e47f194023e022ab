//! JSON content file and a record source that reads it on every fetch

use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vitae_core::{
    Certification, Experience, Project, Record, RecordSource, SourceError, VolunteerEntry,
};

/// Every record of the site in one document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentFile {
    pub projects: Vec<Project>,
    pub experiences: Vec<Experience>,
    pub certifications: Vec<Certification>,
    pub volunteer: Vec<VolunteerEntry>,
}

impl ContentFile {
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Write atomically using temp file + rename
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        let temp_path = path.with_extension("tmp");
        std::fs::write(&temp_path, json)?;
        std::fs::rename(temp_path, path)?;
        Ok(())
    }

    /// Recompute the token field of every record; returns how many changed
    pub fn regenerate_tokens(&mut self) -> usize {
        regenerate(&mut self.projects)
            + regenerate(&mut self.experiences)
            + regenerate(&mut self.certifications)
            + regenerate(&mut self.volunteer)
    }

    pub fn record_count(&self) -> usize {
        self.projects.len() + self.experiences.len() + self.certifications.len() + self.volunteer.len()
    }
}

fn regenerate<R: Record>(records: &mut [R]) -> usize {
    let mut changed = 0;
    for record in records {
        let before = record.tokens().to_vec();
        record.regenerate_tokens();
        if record.tokens() != before.as_slice() {
            changed += 1;
        }
    }
    changed
}

/// Reads the content file afresh on each fetch
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read(&self) -> Result<ContentFile, SourceError> {
        let bytes = tokio::fs::read(&self.path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl RecordSource for FileStore {
    async fn projects(&self) -> Result<Vec<Project>, SourceError> {
        Ok(self.read().await?.projects)
    }

    async fn experiences(&self) -> Result<Vec<Experience>, SourceError> {
        Ok(self.read().await?.experiences)
    }

    async fn certifications(&self) -> Result<Vec<Certification>, SourceError> {
        Ok(self.read().await?.certifications)
    }

    async fn volunteer_entries(&self) -> Result<Vec<VolunteerEntry>, SourceError> {
        Ok(self.read().await?.volunteer)
    }
}
