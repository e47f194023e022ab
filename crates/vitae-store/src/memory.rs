//! In-process record store with mutation notifications

use crate::error::StoreError;
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::{Arc, Weak};
use tracing::debug;
use vitae_core::{
    Certification, ContentListener, DocumentKind, Experience, Project, Record, RecordSource,
    SourceError, VolunteerEntry,
};

/// A record type the memory store keeps a collection of
pub trait StoredRecord: Record + Clone + Send + Sync + 'static {
    #[doc(hidden)]
    fn collection(store: &MemoryStore) -> &RwLock<Vec<Self>>;
}

impl StoredRecord for Project {
    fn collection(store: &MemoryStore) -> &RwLock<Vec<Self>> {
        &store.projects
    }
}

impl StoredRecord for Experience {
    fn collection(store: &MemoryStore) -> &RwLock<Vec<Self>> {
        &store.experiences
    }
}

impl StoredRecord for Certification {
    fn collection(store: &MemoryStore) -> &RwLock<Vec<Self>> {
        &store.certifications
    }
}

impl StoredRecord for VolunteerEntry {
    fn collection(store: &MemoryStore) -> &RwLock<Vec<Self>> {
        &store.volunteer
    }
}

/// Four record collections in insertion order.
///
/// Every successful mutation regenerates tokens where needed and notifies
/// all live listeners before returning.
#[derive(Default)]
pub struct MemoryStore {
    projects: RwLock<Vec<Project>>,
    experiences: RwLock<Vec<Experience>>,
    certifications: RwLock<Vec<Certification>>,
    volunteer: RwLock<Vec<VolunteerEntry>>,
    listeners: RwLock<Vec<Weak<dyn ContentListener>>>,
    failing: RwLock<HashSet<DocumentKind>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Held weakly; dropped listeners are pruned.
    pub fn subscribe<L: ContentListener + 'static>(&self, listener: &Arc<L>) {
        let weak = Arc::downgrade(listener);
        self.listeners.write().push(weak);
    }

    fn notify(&self) {
        let live: Vec<Arc<dyn ContentListener>> = {
            let mut listeners = self.listeners.write();
            listeners.retain(|l| l.strong_count() > 0);
            listeners.iter().filter_map(Weak::upgrade).collect()
        };
        for listener in live {
            listener.on_content_changed();
        }
    }

    /// Insert a record, assigning an id when it has none
    pub fn create<R: StoredRecord>(&self, mut record: R) -> Result<R, StoreError> {
        if record.id().is_empty() {
            record.set_id(uuid::Uuid::new_v4().simple().to_string());
        }
        record.regenerate_tokens();

        {
            let mut records = R::collection(self).write();
            if records.iter().any(|r| r.id() == record.id()) {
                return Err(StoreError::DuplicateId {
                    kind: R::KIND,
                    id: record.id().to_string(),
                });
            }
            records.push(record.clone());
        }

        debug!(kind = R::KIND.as_str(), id = record.id(), "record created");
        self.notify();
        Ok(record)
    }

    /// Replace the record with `id`, keeping its id
    pub fn update<R: StoredRecord>(&self, id: &str, mut record: R) -> Result<R, StoreError> {
        record.set_id(id.to_string());
        record.regenerate_tokens();

        {
            let mut records = R::collection(self).write();
            let slot = records
                .iter_mut()
                .find(|r| r.id() == id)
                .ok_or_else(|| StoreError::NotFound {
                    kind: R::KIND,
                    id: id.to_string(),
                })?;
            *slot = record.clone();
        }

        debug!(kind = R::KIND.as_str(), id, "record updated");
        self.notify();
        Ok(record)
    }

    pub fn delete<R: StoredRecord>(&self, id: &str) -> Result<R, StoreError> {
        let removed = {
            let mut records = R::collection(self).write();
            let position = records
                .iter()
                .position(|r| r.id() == id)
                .ok_or_else(|| StoreError::NotFound {
                    kind: R::KIND,
                    id: id.to_string(),
                })?;
            records.remove(position)
        };

        debug!(kind = R::KIND.as_str(), id, "record deleted");
        self.notify();
        Ok(removed)
    }

    pub fn get<R: StoredRecord>(&self, id: &str) -> Option<R> {
        R::collection(self).read().iter().find(|r| r.id() == id).cloned()
    }

    pub fn count<R: StoredRecord>(&self) -> usize {
        R::collection(self).read().len()
    }

    /// Make fetches of `kind` fail until restored
    pub fn fail_kind(&self, kind: DocumentKind) {
        self.failing.write().insert(kind);
    }

    pub fn restore_kind(&self, kind: DocumentKind) {
        self.failing.write().remove(&kind);
    }

    fn fetch<R: StoredRecord>(&self) -> Result<Vec<R>, SourceError> {
        if self.failing.read().contains(&R::KIND) {
            return Err(SourceError::Unavailable(format!("{} store offline", R::KIND)));
        }
        Ok(R::collection(self).read().clone())
    }
}

impl RecordSource for MemoryStore {
    async fn projects(&self) -> Result<Vec<Project>, SourceError> {
        self.fetch()
    }

    async fn experiences(&self) -> Result<Vec<Experience>, SourceError> {
        self.fetch()
    }

    async fn certifications(&self) -> Result<Vec<Certification>, SourceError> {
        self.fetch()
    }

    async fn volunteer_entries(&self) -> Result<Vec<VolunteerEntry>, SourceError> {
        self.fetch()
    }
}
