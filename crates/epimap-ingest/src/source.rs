//! Feed retrieval.
//!
//! [`FeedSource`] is the interface the session layer loads through; the
//! blocking [`HttpFeedSource`] is the production implementation. Tests stub
//! the trait with canned payloads.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::EndpointConfig;
use crate::error::{FeedError, Result};
use crate::feeds::{CasesFeed, CountryEntry, HistoryFeed, NeighbourEntry};

/// HTTP request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Provider of the four feeds.
pub trait FeedSource {
    fn countries(&self) -> Result<Vec<CountryEntry>>;
    fn cases(&self) -> Result<CasesFeed>;
    fn neighbours(&self) -> Result<Vec<NeighbourEntry>>;
    fn timeseries(&self) -> Result<HistoryFeed>;
}

/// Blocking HTTP implementation of [`FeedSource`].
pub struct HttpFeedSource {
    client: Client,
    config: EndpointConfig,
}

impl HttpFeedSource {
    pub fn new(config: EndpointConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(FeedError::Client)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(url, "fetching feed");
        let response = self
            .client
            .get(url)
            .header(
                USER_AGENT,
                format!("epimap/{}", env!("CARGO_PKG_VERSION")),
            )
            .send()
            .map_err(|source| FeedError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|source| FeedError::Network {
            url: url.to_string(),
            source,
        })?;
        serde_json::from_str(&body).map_err(|source| FeedError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

impl FeedSource for HttpFeedSource {
    fn countries(&self) -> Result<Vec<CountryEntry>> {
        self.fetch(&self.config.countries_url())
    }

    fn cases(&self) -> Result<CasesFeed> {
        self.fetch(&self.config.cases_url())
    }

    fn neighbours(&self) -> Result<Vec<NeighbourEntry>> {
        self.fetch(&self.config.neighbours_url())
    }

    fn timeseries(&self) -> Result<HistoryFeed> {
        self.fetch(&self.config.series_url)
    }
}
