//! Error types for feed retrieval.

use thiserror::Error;

/// Errors that can occur while fetching or decoding a feed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FeedError {
    /// Failed to construct the HTTP client.
    #[error("failed to construct http client: {0}")]
    Client(#[source] reqwest::Error),

    /// Network request failed.
    #[error("request for {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Endpoint answered with a non-success status.
    #[error("endpoint {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// Response body was not the expected JSON shape.
    #[error("response from {url} was not the expected JSON: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, FeedError>;
