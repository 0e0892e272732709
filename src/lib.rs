//! lcsc-crawler - Fast, stateless LCSC electronics parts search CLI
//!
//! Paginates through the LCSC search API, filters item records with a
//! JSONPath expression, and prints a formatted summary per match.

pub mod commands;
pub mod config;
pub mod fetcher;
pub mod filter;
pub mod format;
pub mod lcsc;

pub use config::Config;
pub use fetcher::Fetcher;
pub use filter::PathFilter;
pub use lcsc::{FetchError, LcscClient, Page, PartsSearch, SearchQuery};
