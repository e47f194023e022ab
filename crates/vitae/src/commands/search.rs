use std::path::Path;
use vitae_core::{DocumentKind, SearchConfig};
use vitae_search::SearchResponse;

pub async fn execute(
    data: &Path,
    config: SearchConfig,
    query: &str,
    kind: Option<DocumentKind>,
    limit: Option<i64>,
) -> anyhow::Result<SearchResponse> {
    let service = super::open_service(data, config)?;
    let response = service
        .search(query, kind.as_ref().map(DocumentKind::as_str), limit)
        .await?;
    Ok(response)
}

pub async fn run(
    data: &Path,
    config: SearchConfig,
    query: &str,
    kind: Option<DocumentKind>,
    limit: Option<i64>,
) -> anyhow::Result<()> {
    let response = execute(data, config, query, kind, limit).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
