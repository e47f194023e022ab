//! Time-bounded cache of the most recently built document index

use crate::builder::IndexBuilder;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;
use vitae_core::{ContentListener, RecordSource, SearchableDocument};

struct CacheEntry {
    documents: Vec<SearchableDocument>,
    built_at: Instant,
    built_at_utc: DateTime<Utc>,
}

/// Snapshot of cache bookkeeping
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub cached: bool,
    pub documents: usize,
    pub built_at: Option<DateTime<Utc>>,
    pub rebuilds: u64,
    pub hits: u64,
}

/// Holds the last built index and serves copies of it while fresh.
///
/// Readers share a read lock. The write lock is only taken to install or
/// clear a snapshot, never while the sources are being fetched.
pub struct IndexCache<S> {
    builder: IndexBuilder<S>,
    ttl: Duration,
    entry: RwLock<Option<CacheEntry>>,
    /// Bumped by every invalidation
    generation: AtomicU64,
    /// Concurrent misses wait here for the in-flight rebuild
    rebuild_gate: tokio::sync::Mutex<()>,
    rebuilds: AtomicU64,
    hits: AtomicU64,
}

impl<S: RecordSource> IndexCache<S> {
    pub fn new(source: Arc<S>, ttl: Duration) -> Self {
        Self {
            builder: IndexBuilder::new(source),
            ttl,
            entry: RwLock::new(None),
            generation: AtomicU64::new(0),
            rebuild_gate: tokio::sync::Mutex::new(()),
            rebuilds: AtomicU64::new(0),
            hits: AtomicU64::new(0),
        }
    }

    /// Current index: the cached snapshot if built within the TTL,
    /// otherwise a fresh rebuild. Always an independent copy.
    pub async fn get(&self) -> Vec<SearchableDocument> {
        if let Some(documents) = self.fresh_snapshot() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(documents = documents.len(), "search index cache hit");
            return documents;
        }

        let _gate = self.rebuild_gate.lock().await;

        // Another caller may have installed a snapshot while we waited
        if let Some(documents) = self.fresh_snapshot() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!("search index rebuilt by concurrent caller");
            return documents;
        }

        debug!("search index cache miss, rebuilding");
        let generation = self.generation.load(Ordering::Acquire);
        let documents = self.builder.build().await;
        self.rebuilds.fetch_add(1, Ordering::Relaxed);

        {
            let mut entry = self.entry.write();
            if self.generation.load(Ordering::Acquire) == generation {
                *entry = Some(CacheEntry {
                    documents: documents.clone(),
                    built_at: Instant::now(),
                    built_at_utc: Utc::now(),
                });
            } else {
                debug!("search index invalidated during rebuild, not caching");
            }
        }

        documents
    }

    fn fresh_snapshot(&self) -> Option<Vec<SearchableDocument>> {
        let entry = self.entry.read();
        entry
            .as_ref()
            .filter(|e| e.built_at.elapsed() < self.ttl)
            .map(|e| e.documents.clone())
    }

    /// Drop the cached snapshot so the next `get` rebuilds. Idempotent.
    pub fn invalidate(&self) {
        let mut entry = self.entry.write();
        self.generation.fetch_add(1, Ordering::AcqRel);
        *entry = None;
        debug!("search index cache invalidated");
    }

    pub fn stats(&self) -> CacheStats {
        let entry = self.entry.read();
        CacheStats {
            cached: entry.is_some(),
            documents: entry.as_ref().map_or(0, |e| e.documents.len()),
            built_at: entry.as_ref().map(|e| e.built_at_utc),
            rebuilds: self.rebuilds.load(Ordering::Relaxed),
            hits: self.hits.load(Ordering::Relaxed),
        }
    }
}

impl<S: RecordSource> ContentListener for IndexCache<S> {
    fn on_content_changed(&self) {
        self.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::atomic::AtomicUsize;
    use vitae_core::{
        Certification, DocumentKind, Experience, Project, Record, SourceError, VolunteerEntry,
    };

    #[derive(Default)]
    struct ScriptedSource {
        projects: Mutex<Vec<Project>>,
        project_fetches: AtomicUsize,
        delay: Duration,
        certifications_down: bool,
    }

    impl ScriptedSource {
        fn with_project(name: &str) -> Self {
            let source = Self::default();
            source.push_project("p1", name);
            source
        }

        fn push_project(&self, id: &str, name: &str) {
            let mut project = Project {
                id: id.to_string(),
                project_name: name.to_string(),
                ..Default::default()
            };
            project.regenerate_tokens();
            self.projects.lock().push(project);
        }

        fn fetches(&self) -> usize {
            self.project_fetches.load(Ordering::SeqCst)
        }
    }

    impl RecordSource for ScriptedSource {
        async fn projects(&self) -> Result<Vec<Project>, SourceError> {
            self.project_fetches.fetch_add(1, Ordering::SeqCst);
            let projects = self.projects.lock().clone();
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            Ok(projects)
        }

        async fn experiences(&self) -> Result<Vec<Experience>, SourceError> {
            Ok(vec![Experience {
                id: "e1".to_string(),
                company_name: "Acme".to_string(),
                ..Default::default()
            }])
        }

        async fn certifications(&self) -> Result<Vec<Certification>, SourceError> {
            if self.certifications_down {
                return Err(SourceError::Unavailable("timeout".to_string()));
            }
            Ok(vec![Certification {
                id: "c1".to_string(),
                title: "Cloud".to_string(),
                ..Default::default()
            }])
        }

        async fn volunteer_entries(&self) -> Result<Vec<VolunteerEntry>, SourceError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_builder_merges_all_sources() {
        let source = Arc::new(ScriptedSource::with_project("Chat"));
        let documents = IndexBuilder::new(source).build().await;
        let mut kinds: Vec<_> = documents.iter().map(|d| d.kind).collect();
        kinds.sort_by_key(|k| k.as_str());
        assert_eq!(
            kinds,
            vec![
                DocumentKind::Certificate,
                DocumentKind::Experience,
                DocumentKind::Project
            ]
        );
    }

    #[tokio::test]
    async fn test_builder_omits_failed_source() {
        let source = Arc::new(ScriptedSource {
            certifications_down: true,
            ..ScriptedSource::with_project("Chat")
        });
        let documents = IndexBuilder::new(source).build().await;
        assert_eq!(documents.len(), 2);
        assert!(documents.iter().all(|d| d.kind != DocumentKind::Certificate));
    }

    #[tokio::test]
    async fn test_cache_serves_within_ttl() {
        let source = Arc::new(ScriptedSource::with_project("Chat"));
        let cache = IndexCache::new(Arc::clone(&source), Duration::from_secs(300));

        let first = cache.get().await;
        source.push_project("p2", "Ignored Until Rebuild");
        let second = cache.get().await;

        assert_eq!(first, second);
        assert_eq!(source.fetches(), 1);
        let stats = cache.stats();
        assert!(stats.cached);
        assert_eq!(stats.rebuilds, 1);
        assert_eq!(stats.hits, 1);
        assert!(stats.built_at.is_some());
    }

    #[tokio::test]
    async fn test_cache_expires_after_ttl() {
        let source = Arc::new(ScriptedSource::with_project("Chat"));
        let cache = IndexCache::new(Arc::clone(&source), Duration::ZERO);

        cache.get().await;
        cache.get().await;
        assert_eq!(source.fetches(), 2);
    }

    #[tokio::test]
    async fn test_invalidate_forces_rebuild() {
        let source = Arc::new(ScriptedSource::with_project("Chat"));
        let cache = IndexCache::new(Arc::clone(&source), Duration::from_secs(300));

        assert_eq!(cache.get().await.len(), 3);
        source.push_project("p2", "Compiler");
        cache.invalidate();
        cache.invalidate();
        assert!(!cache.stats().cached);

        let documents = cache.get().await;
        assert_eq!(documents.len(), 4);
        assert!(documents.iter().any(|d| d.title == "Compiler"));
        assert_eq!(source.fetches(), 2);
    }

    #[tokio::test]
    async fn test_returned_copies_are_independent() {
        let source = Arc::new(ScriptedSource::with_project("Chat"));
        let cache = IndexCache::new(source, Duration::from_secs(300));

        let mut mine = cache.get().await;
        mine.clear();
        assert_eq!(cache.get().await.len(), 3);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_misses_share_one_rebuild() {
        let source = Arc::new(ScriptedSource {
            delay: Duration::from_millis(100),
            ..ScriptedSource::with_project("Chat")
        });
        let cache = Arc::new(IndexCache::new(Arc::clone(&source), Duration::from_secs(300)));

        let (a, b, c, d) = tokio::join!(cache.get(), cache.get(), cache.get(), cache.get());
        assert_eq!(a.len(), 3);
        assert_eq!(a.len() + b.len() + c.len() + d.len(), 12);
        assert_eq!(source.fetches(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_invalidation_during_rebuild_is_not_lost() {
        let source = Arc::new(ScriptedSource {
            delay: Duration::from_millis(150),
            ..ScriptedSource::with_project("Chat")
        });
        let cache = Arc::new(IndexCache::new(Arc::clone(&source), Duration::from_secs(300)));

        let in_flight = {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move { cache.get().await })
        };
        tokio::time::sleep(Duration::from_millis(30)).await;
        source.push_project("p2", "Compiler");
        cache.on_content_changed();

        // the stale rebuild still answers its own caller
        assert_eq!(in_flight.await.unwrap().len(), 3);
        assert!(!cache.stats().cached);
        assert_eq!(cache.get().await.len(), 4);
    }
}
