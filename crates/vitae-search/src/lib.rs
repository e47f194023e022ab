//! Search and suggestion entry points for the request layer

mod service;
mod suggest;
mod types;

pub use service::SearchService;
pub use types::{RankedResult, SearchError, SearchResponse};
