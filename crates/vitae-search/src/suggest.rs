//! Autocomplete over skill labels and record names

use std::collections::BTreeSet;
use std::sync::Arc;
use vitae_core::{Record, RecordSource, SearchConfig};
use vitae_index::{gather, Fetch};

/// Labels and names containing `prefix`, case-insensitively, from
/// projects, experiences and certifications. Volunteer entries are not
/// consulted.
pub(crate) async fn suggest<S: RecordSource>(
    source: &Arc<S>,
    prefix: &str,
    config: &SearchConfig,
) -> Vec<String> {
    if prefix.chars().count() < config.min_suggestion_len {
        return Vec::new();
    }
    let needle = prefix.to_lowercase();

    let fetches = vec![
        {
            let source = Arc::clone(source);
            let needle = needle.clone();
            Fetch::new("projects", async move {
                source.projects().await.map(|r| matching(&r, &needle))
            })
        },
        {
            let source = Arc::clone(source);
            let needle = needle.clone();
            Fetch::new("experiences", async move {
                source.experiences().await.map(|r| matching(&r, &needle))
            })
        },
        {
            let source = Arc::clone(source);
            Fetch::new("certifications", async move {
                source.certifications().await.map(|r| matching(&r, &needle))
            })
        },
    ];

    // dedup is on the literal label; BTreeSet also gives the sort
    let suggestions: BTreeSet<String> = gather(fetches).await.into_iter().collect();
    suggestions
        .into_iter()
        .take(config.max_suggestions)
        .collect()
}

fn matching<R: Record>(records: &[R], needle: &str) -> Vec<String> {
    let mut found = Vec::new();
    for record in records {
        for label in record.labels() {
            if label.to_lowercase().contains(needle) {
                found.push(label.clone());
            }
        }
        if record.name().to_lowercase().contains(needle) {
            found.push(record.name().to_string());
        }
    }
    found
}
