//! Run independent fallible fetches in parallel and keep whatever succeeds

use std::future::Future;
use std::pin::Pin;
use tokio::task::JoinSet;
use tracing::{debug, warn};
use vitae_core::SourceError;

type FetchFuture<T> = Pin<Box<dyn Future<Output = Result<Vec<T>, SourceError>> + Send + 'static>>;

/// One labelled fetch in a fan-out
pub struct Fetch<T> {
    label: &'static str,
    future: FetchFuture<T>,
}

impl<T> Fetch<T> {
    pub fn new<F>(label: &'static str, future: F) -> Self
    where
        F: Future<Output = Result<Vec<T>, SourceError>> + Send + 'static,
    {
        Self {
            label,
            future: Box::pin(future),
        }
    }
}

/// Spawn every fetch, wait for all of them, and merge the successes.
///
/// A failed or panicked fetch contributes nothing and is logged. Merge
/// order follows completion order.
pub async fn gather<T: Send + 'static>(fetches: Vec<Fetch<T>>) -> Vec<T> {
    let mut tasks = JoinSet::new();
    for fetch in fetches {
        let Fetch { label, future } = fetch;
        tasks.spawn(async move { (label, future.await) });
    }

    let mut merged = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((label, Ok(items))) => {
                debug!(source = label, count = items.len(), "fetch complete");
                merged.extend(items);
            }
            Ok((label, Err(err))) => {
                warn!(source = label, error = %err, "fetch failed, omitting source");
            }
            Err(err) => {
                warn!(error = %err, "fetch task did not complete, omitting source");
            }
        }
    }
    merged
}
