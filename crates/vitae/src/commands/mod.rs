pub mod search;
pub mod stats;
pub mod suggest;
pub mod tokens;
pub mod version;

use anyhow::Context;
use std::path::Path;
use std::sync::Arc;
use vitae_core::SearchConfig;
use vitae_search::SearchService;
use vitae_store::FileStore;

/// Search service over the content file, which must exist
pub(crate) fn open_service(
    data: &Path,
    config: SearchConfig,
) -> anyhow::Result<SearchService<FileStore>> {
    std::fs::metadata(data)
        .with_context(|| format!("content file {} is not readable", data.display()))?;
    Ok(SearchService::new(Arc::new(FileStore::new(data)), config))
}
