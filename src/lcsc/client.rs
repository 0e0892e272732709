//! HTTP client for the LCSC search endpoint using wreq for TLS fingerprint
//! emulation.

use crate::config::Config;
use crate::lcsc::{FetchError, Page, SearchQuery, SearchResponse};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use wreq::Client;
use wreq_util::Emulation;

/// Production endpoint base; tests substitute a wiremock URI.
pub const BASE_URL: &str = "https://lcsc.com";

const SEARCH_PATH: &str = "/api/products/search";

/// Trait for fetching one page of parts search results - enables mocking
/// for tests.
#[async_trait]
pub trait PartsSearch: Send + Sync {
    /// Fetches and decodes the given page of results for `query`.
    async fn fetch_page(&self, query: &SearchQuery, page: u32) -> Result<Page, FetchError>;
}

/// LCSC HTTP client with browser impersonation.
pub struct LcscClient {
    client: Client,
    base_url: Option<String>,
}

impl LcscClient {
    /// Creates a new client from the given configuration.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        Self::with_base_url(config, None)
    }

    /// Creates a new client with an optional custom base URL (for testing).
    pub fn with_base_url(config: &Config, base_url: Option<String>) -> Result<Self, FetchError> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10));

        if let Some(proxy_url) = &config.proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url)?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build()?;

        Ok(Self { client, base_url })
    }

    /// Returns the base URL (custom for testing, or production).
    fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(BASE_URL)
    }
}

#[async_trait]
impl PartsSearch for LcscClient {
    async fn fetch_page(&self, query: &SearchQuery, page: u32) -> Result<Page, FetchError> {
        let url = format!("{}{}", self.base_url(), SEARCH_PATH);
        let body = query.form_body(page);

        debug!("POST {} (page {})", url, page);

        let response = self
            .client
            .post(&url)
            .emulation(Emulation::Chrome131)
            .header("Accept", "application/json")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        let decoded: SearchResponse = serde_json::from_str(&text)?;
        decoded.into_page()
    }
}
