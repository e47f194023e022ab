use std::collections::BTreeMap;
use std::path::Path;
use vitae_core::{DocumentKind, SearchConfig};

pub async fn execute(data: &Path, config: SearchConfig) -> anyhow::Result<serde_json::Value> {
    let service = super::open_service(data, config)?;
    let documents = service.cache().get().await;

    let mut per_kind: BTreeMap<&str, usize> = DocumentKind::ALL
        .iter()
        .map(|kind| (kind.as_str(), 0))
        .collect();
    for doc in &documents {
        *per_kind.entry(doc.kind.as_str()).or_insert(0) += 1;
    }

    let total_tokens: usize = documents.iter().map(|d| d.tokens.len()).sum();
    let avg_tokens = if documents.is_empty() {
        0.0
    } else {
        total_tokens as f64 / documents.len() as f64
    };

    Ok(serde_json::json!({
        "total_documents": documents.len(),
        "per_kind": per_kind,
        "avg_tokens": (avg_tokens * 100.0).round() / 100.0,
        "cache": service.cache_stats(),
    }))
}

pub async fn run(data: &Path, config: SearchConfig) -> anyhow::Result<()> {
    let stats = execute(data, config).await?;
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
