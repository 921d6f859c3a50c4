pub mod config;
pub mod error;
pub mod feeds;
pub mod source;

pub use config::{DEFAULT_BASE_URL, DEFAULT_SERIES_URL, EndpointConfig};
pub use error::{FeedError, Result};
pub use feeds::{
    CaseCounts, CasesFeed, CountryEntry, HistoryFeed, MetricBlock, NeighbourEntry,
    REGION_NAME_KEY, RegionRow,
};
pub use source::{FeedSource, HttpFeedSource};
