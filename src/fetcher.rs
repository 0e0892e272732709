//! Lazy paginated fetching of search results.

use crate::lcsc::{FetchError, PartsSearch, SearchQuery};
use serde_json::Value;
use std::collections::VecDeque;
use tracing::debug;

/// Pulls item records page by page from a [`PartsSearch`] backend.
///
/// Construction always fetches page 1 once, to learn the total page count;
/// its records are cached so an iteration starting at page 1 does not fetch
/// that page a second time. Iteration via [`next_record`](Self::next_record)
/// is lazy, forward-only, and single-pass: each page is fetched exactly when
/// the previous one is exhausted, and every fetch refreshes the last-page
/// count, so a server that changes its reported total mid-iteration changes
/// where iteration stops. Errors abort iteration immediately; nothing is
/// retried.
///
/// The sequence is not restartable. To enumerate again (or from elsewhere),
/// [`seek`](Self::seek) to a page and keep pulling; records already buffered
/// are discarded by a seek.
#[derive(Debug)]
pub struct Fetcher<C: PartsSearch> {
    client: C,
    query: SearchQuery,
    /// Next page to fetch.
    page: u32,
    last_page: u32,
    /// Page-1 records from the constructor's warm-up fetch, consumed by the
    /// first page-1 load instead of refetching.
    warmup: Option<Vec<Value>>,
    buffer: VecDeque<Value>,
}

impl<C: PartsSearch> Fetcher<C> {
    /// Creates a fetcher, performing the warm-up fetch of page 1.
    ///
    /// The warm-up happens even if the caller never iterates; it is how the
    /// total page count is learned.
    pub async fn new(client: C, query: SearchQuery) -> Result<Self, FetchError> {
        let first = client.fetch_page(&query, 1).await?;
        debug!("Search spans {} page(s)", first.last_page);

        Ok(Self {
            client,
            query,
            page: 1,
            last_page: first.last_page,
            warmup: Some(first.items),
            buffer: VecDeque::new(),
        })
    }

    /// Moves the cursor to `page`, dropping any buffered records.
    pub fn seek(&mut self, page: u32) {
        self.page = page;
        self.buffer.clear();
    }

    /// Next page the fetcher will request.
    pub fn current_page(&self) -> u32 {
        self.page
    }

    /// Total page count as of the most recent fetch.
    pub fn last_page(&self) -> u32 {
        self.last_page
    }

    /// Pulls the next item record, fetching the next page when the current
    /// one is exhausted. Returns `Ok(None)` once the cursor has moved past
    /// the last known page.
    pub async fn next_record(&mut self) -> Result<Option<Value>, FetchError> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Ok(Some(item));
            }

            if self.page > self.last_page {
                return Ok(None);
            }

            let items = match (self.page, self.warmup.take()) {
                (1, Some(cached)) => {
                    debug!("Reusing warm-up page 1 ({} record(s))", cached.len());
                    cached
                }
                _ => {
                    debug!("Fetching page {} of {}", self.page, self.last_page);
                    let fetched = self.client.fetch_page(&self.query, self.page).await?;
                    // The server's total is authoritative as of this response.
                    self.last_page = fetched.last_page;
                    fetched.items
                }
            };

            self.buffer.extend(items);
            self.page += 1;
        }
    }

    /// Drains the remaining records into a vector. Mostly useful in tests.
    pub async fn collect_remaining(&mut self) -> Result<Vec<Value>, FetchError> {
        let mut out = Vec::new();
        while let Some(record) = self.next_record().await? {
            out.push(record);
        }
        Ok(out)
    }
}
