//! Search command implementation.

use crate::config::Config;
use crate::fetcher::Fetcher;
use crate::format::format_item;
use crate::lcsc::{LcscClient, PartsSearch, SearchQuery};
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Executes a parts search: fetch pages, filter records, format matches.
pub struct SearchCommand {
    config: Config,
}

impl SearchCommand {
    /// Creates a new search command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the search and returns formatted output.
    pub async fn execute(&self) -> Result<String> {
        let client = LcscClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_client(client).await
    }

    /// Executes the search with a provided backend (for testing).
    pub async fn execute_with_client(&self, client: impl PartsSearch) -> Result<String> {
        let query = match &self.config.category {
            Some(category) => SearchQuery::with_category(category),
            None => SearchQuery::new(),
        };

        let mut fetcher =
            Fetcher::new(client, query).await.context("Initial page fetch failed")?;
        info!("Search spans {} page(s)", fetcher.last_page());

        if self.config.start_page != 1 {
            fetcher.seek(self.config.start_page);
        }

        let filter = &self.config.filter;
        debug!("Filtering records with {}", filter);

        let mut blocks: Vec<String> = Vec::new();
        loop {
            if let Some(limit) = self.config.effective_limit() {
                // Stopping here, not after the fetch, keeps an early stop
                // from triggering one more page request.
                if blocks.len() >= limit {
                    break;
                }
            }

            match fetcher.next_record().await? {
                Some(record) if filter.matches(&record) => {
                    blocks.push(format_item(&record)?);
                }
                Some(_) => continue,
                None => break,
            }
        }

        info!("Matched {} record(s)", blocks.len());
        Ok(blocks.join("\n"))
    }
}
