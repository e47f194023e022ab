//! In-memory BM25 index over the content sources, with a TTL cache

mod bm25;
mod builder;
mod cache;
mod fanout;

pub use bm25::{rank, Bm25, Scored};
pub use builder::IndexBuilder;
pub use cache::{CacheStats, IndexCache};
pub use fanout::{gather, Fetch};
