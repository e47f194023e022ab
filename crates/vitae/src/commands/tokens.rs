use anyhow::Context;
use std::path::Path;
use vitae_store::ContentFile;

pub struct TokenReport {
    pub records: usize,
    pub updated: usize,
}

pub fn execute(data: &Path) -> anyhow::Result<TokenReport> {
    let mut content = ContentFile::load(data)
        .with_context(|| format!("failed to load content file {}", data.display()))?;
    let updated = content.regenerate_tokens();
    if updated > 0 {
        content
            .save(data)
            .with_context(|| format!("failed to write content file {}", data.display()))?;
    }
    tracing::info!(updated, "token fields regenerated");
    Ok(TokenReport {
        records: content.record_count(),
        updated,
    })
}

pub fn run(data: &Path) -> anyhow::Result<()> {
    let report = execute(data)?;
    println!(
        "{}",
        serde_json::json!({ "records": report.records, "updated": report.updated })
    );
    Ok(())
}
