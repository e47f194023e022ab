//! Content records, tokenizer, and configuration for the vitae search backend

mod config;
mod source;
mod tokenizer;
mod types;

pub use config::{ConfigError, SearchConfig};
pub use source::{ContentListener, RecordSource, SourceError};
pub use tokenizer::{generate_tokens, tokenize};
pub use types::{
    Certification, DocumentKind, Experience, Project, Record, SearchableDocument, TimelineEntry,
    VolunteerEntry,
};
