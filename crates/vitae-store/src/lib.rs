//! Record stores backing the search subsystem

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::{ContentFile, FileStore};
pub use memory::{MemoryStore, StoredRecord};
