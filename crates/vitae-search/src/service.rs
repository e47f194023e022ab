//! Search orchestration: tokenize, fetch the cached index, rank, format

use crate::suggest;
use crate::types::{RankedResult, SearchError, SearchResponse};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;
use vitae_core::{tokenize, ContentListener, RecordSource, SearchConfig};
use vitae_index::{rank, CacheStats, IndexCache};

pub struct SearchService<S> {
    source: Arc<S>,
    cache: Arc<IndexCache<S>>,
    config: SearchConfig,
}

impl<S: RecordSource> SearchService<S> {
    pub fn new(source: Arc<S>, config: SearchConfig) -> Self {
        let cache = Arc::new(IndexCache::new(Arc::clone(&source), config.cache_ttl));
        Self {
            source,
            cache,
            config,
        }
    }

    /// The index cache, for wiring it up as a content listener
    pub fn cache(&self) -> &Arc<IndexCache<S>> {
        &self.cache
    }

    /// Ranked full-text search.
    ///
    /// `type_filter` restricts the corpus before any statistics are
    /// computed. `limit` is normalized by [`SearchConfig::normalize_limit`].
    pub async fn search(
        &self,
        query: &str,
        type_filter: Option<&str>,
        limit: Option<i64>,
    ) -> Result<SearchResponse, SearchError> {
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        let limit = self.config.normalize_limit(limit);

        let query_tokens = tokenize(query);
        if query_tokens.is_empty() {
            return Ok(SearchResponse::empty(query));
        }

        let mut documents = self.cache.get().await;
        if let Some(kind) = type_filter.filter(|k| !k.is_empty()) {
            documents.retain(|doc| doc.kind.as_str() == kind);
        }
        if documents.is_empty() {
            return Ok(SearchResponse::empty(query));
        }

        let ranked = rank(&documents, &query_tokens);
        let mut seen = HashSet::with_capacity(limit);
        let results: Vec<RankedResult> = ranked
            .iter()
            .filter(|scored| seen.insert(scored.document.id.as_str()))
            .take(limit)
            .map(|scored| RankedResult::from_scored(scored, self.config.description_limit))
            .collect();

        debug!(
            query,
            corpus = documents.len(),
            matched = ranked.len(),
            returned = results.len(),
            "search complete"
        );
        Ok(SearchResponse::new(query, results))
    }

    /// Up to `max_suggestions` labels or names containing `prefix`
    pub async fn suggest(&self, prefix: &str) -> Vec<String> {
        suggest::suggest(&self.source, prefix, &self.config).await
    }

    pub fn invalidate_cache(&self) {
        self.cache.invalidate();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl<S: RecordSource> ContentListener for SearchService<S> {
    fn on_content_changed(&self) {
        self.invalidate_cache();
    }
}
