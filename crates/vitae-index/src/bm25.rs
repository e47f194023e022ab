//! Hand-rolled BM25 with title and skill boosts

use std::collections::HashMap;
use vitae_core::{tokenize, SearchableDocument};

const K1: f64 = 1.2;
const B: f64 = 0.75;
const TITLE_BOOST: f64 = 1.5;
const SKILL_BOOST: f64 = 1.3;

/// A document with its relevance score
#[derive(Debug, Clone, Copy)]
pub struct Scored<'a> {
    pub score: f64,
    pub document: &'a SearchableDocument,
}

/// Corpus statistics for one query over one (possibly filtered) corpus
#[derive(Debug, Clone)]
pub struct Bm25<'a> {
    query_tokens: &'a [String],
    doc_count: usize,
    avg_doc_len: f64,
    doc_freq: HashMap<&'a str, usize>,
}

impl<'a> Bm25<'a> {
    pub fn new(documents: &[SearchableDocument], query_tokens: &'a [String]) -> Self {
        let doc_count = documents.len();
        let total_len: usize = documents.iter().map(|doc| doc.tokens.len()).sum();
        let avg_doc_len = if doc_count == 0 {
            0.0
        } else {
            total_len as f64 / doc_count as f64
        };

        // Presence count per distinct query token, not occurrence count
        let mut doc_freq: HashMap<&'a str, usize> = HashMap::with_capacity(query_tokens.len());
        for token in query_tokens {
            if doc_freq.contains_key(token.as_str()) {
                continue;
            }
            let df = documents
                .iter()
                .filter(|doc| doc.tokens.iter().any(|t| t == token))
                .count();
            doc_freq.insert(token.as_str(), df);
        }

        Self {
            query_tokens,
            doc_count,
            avg_doc_len,
            doc_freq,
        }
    }

    pub fn avg_doc_len(&self) -> f64 {
        self.avg_doc_len
    }

    pub fn doc_frequency(&self, token: &str) -> usize {
        self.doc_freq.get(token).copied().unwrap_or(0)
    }

    fn idf(&self, token: &str) -> f64 {
        let df = self.doc_frequency(token).max(1) as f64;
        ((self.doc_count as f64 - df + 0.5) / (df + 0.5) + 1.0).ln()
    }

    /// Base BM25 score with multiplicative boosts applied once per
    /// matching query token.
    pub fn score(&self, doc: &SearchableDocument) -> f64 {
        let doc_len = doc.tokens.len() as f64;

        let mut term_freq: HashMap<&str, usize> = HashMap::with_capacity(doc.tokens.len());
        for token in &doc.tokens {
            *term_freq.entry(token.as_str()).or_insert(0) += 1;
        }

        let mut score = 0.0;
        for token in self.query_tokens {
            let tf = term_freq.get(token.as_str()).copied().unwrap_or(0) as f64;
            if tf == 0.0 {
                continue;
            }
            let norm = tf + K1 * (1.0 - B + B * (doc_len / self.avg_doc_len));
            score += self.idf(token) * (tf * (K1 + 1.0)) / norm;
        }

        let title_tokens = tokenize(&doc.title);
        for token in self.query_tokens {
            if title_tokens.iter().any(|t| t == token) {
                score *= TITLE_BOOST;
            }
        }

        let skills: Vec<String> = doc.skills.iter().map(|s| s.to_lowercase()).collect();
        for token in self.query_tokens {
            if skills.iter().any(|s| s.contains(token.as_str())) {
                score *= SKILL_BOOST;
            }
        }

        score
    }
}

/// Score every document and order by descending score.
///
/// Documents without term overlap are dropped. Ties keep corpus order.
pub fn rank<'a>(documents: &'a [SearchableDocument], query_tokens: &[String]) -> Vec<Scored<'a>> {
    if documents.is_empty() || query_tokens.is_empty() {
        return Vec::new();
    }

    let bm25 = Bm25::new(documents, query_tokens);
    let mut scored: Vec<Scored<'a>> = documents
        .iter()
        .filter_map(|document| {
            let score = bm25.score(document);
            (score > 0.0).then_some(Scored { score, document })
        })
        .collect();

    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored
}
