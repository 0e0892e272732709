//! Resolved run options.
//!
//! The tool is deliberately stateless: no config file, no environment
//! variables. Everything comes from the command line, so this is a plain
//! in-memory struct the CLI fills in.

use crate::filter::PathFilter;

/// Options for one search run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Value for the `category` query attribute.
    pub category: Option<String>,
    /// Record filter; defaults to the root selector, retaining everything.
    pub filter: PathFilter,
    /// Page to start iterating from.
    pub start_page: u32,
    /// Maximum matching records to print; negative means unlimited.
    pub limit: i64,
    /// Proxy URL (e.g., socks5://host:port).
    pub proxy: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            category: None,
            filter: PathFilter::default(),
            start_page: 1,
            limit: 10,
            proxy: None,
        }
    }
}

impl Config {
    /// Effective record cap: `None` when the limit is negative (unlimited).
    pub fn effective_limit(&self) -> Option<usize> {
        usize::try_from(self.limit).ok()
    }
}
