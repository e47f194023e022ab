use std::path::Path;
use vitae_core::SearchConfig;

pub async fn execute(data: &Path, config: SearchConfig, prefix: &str) -> anyhow::Result<Vec<String>> {
    let service = super::open_service(data, config)?;
    Ok(service.suggest(prefix).await)
}

pub async fn run(data: &Path, config: SearchConfig, prefix: &str) -> anyhow::Result<()> {
    let suggestions = execute(data, config, prefix).await?;
    println!("{}", serde_json::json!({ "suggestions": suggestions }));
    Ok(())
}
