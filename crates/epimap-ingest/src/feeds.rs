//! Raw payload shapes for the four feeds.
//!
//! These mirror the wire formats exactly; nothing here is canonical. The
//! reconciliation layer turns them into model types.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use epimap_model::Metric;

/// Field carrying the country name in historical region rows.
pub const REGION_NAME_KEY: &str = "Country/Region";

/// One entry of the countries feed.
///
/// Both fields are optional on the wire; entries missing either are skipped
/// during code-table construction. The live feed names the code field
/// `alpha3Code`.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryEntry {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "alpha3Code")]
    pub code: Option<String>,
}

/// Counts for one region key of the current-snapshot feed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaseCounts {
    #[serde(default)]
    pub confirmed: u64,
    #[serde(default)]
    pub deaths: u64,
    #[serde(default)]
    pub recovered: u64,
}

/// The current-snapshot feed: raw region key (underscore-separated) to counts.
pub type CasesFeed = BTreeMap<String, CaseCounts>;

/// One entry of the adjacency feed, already keyed by code.
#[derive(Debug, Clone, Deserialize)]
pub struct NeighbourEntry {
    #[serde(alias = "alpha3Code")]
    pub code: String,
    #[serde(default)]
    pub borders: Vec<String>,
}

/// The historical feed: one block per metric, indexed by [`Metric::feed_index`].
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct HistoryFeed {
    metrics: Vec<MetricBlock>,
}

impl HistoryFeed {
    pub fn metric_block(&self, metric: Metric) -> Option<&MetricBlock> {
        self.metrics.get(metric.feed_index())
    }
}

/// One metric's block: a single named statistic holding the region rows.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct MetricBlock {
    statistics: BTreeMap<String, Vec<RegionRow>>,
}

impl MetricBlock {
    /// The block's statistic name and rows.
    ///
    /// The feed carries exactly one statistic per block; if an upstream
    /// change ever adds more, the first one in key order is used.
    pub fn primary(&self) -> Option<(&str, &[RegionRow])> {
        self.statistics
            .iter()
            .next()
            .map(|(name, rows)| (name.as_str(), rows.as_slice()))
    }
}

/// One region's row in a historical block: a name field plus one count field
/// per date key.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct RegionRow {
    fields: BTreeMap<String, Value>,
}

impl RegionRow {
    /// Region name, when the row carries one.
    pub fn region_name(&self) -> Option<&str> {
        self.fields.get(REGION_NAME_KEY).and_then(Value::as_str)
    }

    /// Count under a date key. Non-numeric and missing values read as absent.
    pub fn count(&self, date_key: &str) -> Option<u64> {
        let value = self.fields.get(date_key)?;
        value
            .as_u64()
            .or_else(|| value.as_f64().map(|count| count as u64))
    }

    pub fn contains(&self, date_key: &str) -> bool {
        self.fields.contains_key(date_key)
    }

    /// All field keys, date-shaped or not.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}
