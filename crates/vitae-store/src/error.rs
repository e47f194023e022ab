use thiserror::Error;
use vitae_core::DocumentKind;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} {id} not found")]
    NotFound { kind: DocumentKind, id: String },

    #[error("{kind} {id} already exists")]
    DuplicateId { kind: DocumentKind, id: String },

    #[error("content file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("content file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
