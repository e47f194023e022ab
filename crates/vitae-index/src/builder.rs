//! Rebuilds the full document index from the four record sources

use crate::fanout::{gather, Fetch};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use vitae_core::{Record, RecordSource, SearchableDocument};

pub struct IndexBuilder<S> {
    source: Arc<S>,
}

impl<S: RecordSource> IndexBuilder<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Fetch every source concurrently and project the records into
    /// searchable documents. A failing source is simply absent.
    pub async fn build(&self) -> Vec<SearchableDocument> {
        let started = Instant::now();

        let projects = Arc::clone(&self.source);
        let experiences = Arc::clone(&self.source);
        let certifications = Arc::clone(&self.source);
        let volunteer = Arc::clone(&self.source);

        let fetches = vec![
            Fetch::new("projects", async move {
                projects.projects().await.map(to_documents)
            }),
            Fetch::new("experiences", async move {
                experiences.experiences().await.map(to_documents)
            }),
            Fetch::new("certifications", async move {
                certifications.certifications().await.map(to_documents)
            }),
            Fetch::new("volunteer", async move {
                volunteer.volunteer_entries().await.map(to_documents)
            }),
        ];

        let documents = gather(fetches).await;
        info!(
            documents = documents.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "search index built"
        );
        documents
    }
}

fn to_documents<R: Record>(records: Vec<R>) -> Vec<SearchableDocument> {
    records.iter().map(Record::to_document).collect()
}
