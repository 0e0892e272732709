//! LCSC-specific modules for the HTTP client, query parameters, and wire
//! types.

pub mod client;
pub mod error;
pub mod models;
pub mod query;

pub use client::{LcscClient, PartsSearch, BASE_URL};
pub use error::FetchError;
pub use models::{Page, SearchResponse, SearchResult};
pub use query::SearchQuery;
