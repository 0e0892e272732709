//! Error types for the LCSC search transport.

use thiserror::Error;

/// Failures while fetching a page of search results.
///
/// All variants are fatal: the fetcher surfaces them immediately and no
/// retry is attempted anywhere in the pipeline.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with `success: false`; carries its message verbatim.
    #[error("remote query failed: {0}")]
    Remote(String),

    /// Network-level failure (connect, TLS, timeout, body read).
    #[error("transport failure: {0}")]
    Transport(#[from] wreq::Error),

    /// The server answered with a non-2xx HTTP status.
    #[error("request failed with status {0}")]
    Status(u16),

    /// The response body was not the expected JSON shape.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// `success: true` but no `result` payload.
    #[error("response reported success but carried no result payload")]
    MissingResult,
}
