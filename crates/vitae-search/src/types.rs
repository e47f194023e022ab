//! Result shapes handed to the request layer

use serde::Serialize;
use thiserror::Error;
use vitae_index::Scored;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("query parameter 'q' is required")]
    EmptyQuery,
}

/// One ranked hit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub subtitle: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
    pub url: String,
    pub score: f64,
}

impl RankedResult {
    pub(crate) fn from_scored(scored: &Scored<'_>, description_limit: usize) -> Self {
        let doc = scored.document;
        Self {
            id: doc.id.clone(),
            kind: doc.kind.as_str().to_string(),
            title: doc.title.clone(),
            subtitle: doc.subtitle.clone(),
            description: truncate_description(&doc.description, description_limit),
            skills: doc.skills.clone(),
            url: doc.url.clone(),
            score: round_score(scored.score),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    pub results: Vec<RankedResult>,
    pub query: String,
    /// Number of results returned, after dedup and limit
    pub total_count: usize,
}

impl SearchResponse {
    pub(crate) fn new(query: &str, results: Vec<RankedResult>) -> Self {
        Self {
            total_count: results.len(),
            results,
            query: query.to_string(),
        }
    }

    pub(crate) fn empty(query: &str) -> Self {
        Self::new(query, Vec::new())
    }
}

fn truncate_description(description: &str, limit: usize) -> String {
    match description.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &description[..cut]),
        None => description.to_string(),
    }
}

fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}
