//! Seams to the record stores and the content-mutation layer

use crate::types::{Certification, Experience, Project, VolunteerEntry};
use std::future::Future;
use thiserror::Error;

/// Failure of a single fetch from a record store
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("source unavailable: {0}")]
    Unavailable(String),

    #[error("source read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("source returned malformed content: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Read access to every record of each content type.
///
/// Each call is a single bounded read; timeouts and cancellation are the
/// implementation's business.
pub trait RecordSource: Send + Sync + 'static {
    fn projects(&self) -> impl Future<Output = Result<Vec<Project>, SourceError>> + Send;

    fn experiences(&self) -> impl Future<Output = Result<Vec<Experience>, SourceError>> + Send;

    fn certifications(
        &self,
    ) -> impl Future<Output = Result<Vec<Certification>, SourceError>> + Send;

    fn volunteer_entries(
        &self,
    ) -> impl Future<Output = Result<Vec<VolunteerEntry>, SourceError>> + Send;
}

/// Notified synchronously whenever any content record changes
pub trait ContentListener: Send + Sync {
    fn on_content_changed(&self);
}
