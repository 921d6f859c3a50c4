//! Chronological per-country count series for one metric.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Which statistic a snapshot or series carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Confirmed,
    Deaths,
}

impl Metric {
    /// Position of this metric's block in the historical feed payload.
    pub fn feed_index(self) -> usize {
        match self {
            Metric::Confirmed => 0,
            Metric::Deaths => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Confirmed => "confirmed",
            Metric::Deaths => "deaths",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counts for one calendar date, keyed by country display name.
///
/// Accumulation merges split sub-regions reporting under the same country
/// name into a single total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    counts: BTreeMap<String, u64>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` to the running total for `country`.
    pub fn add(&mut self, country: String, count: u64) {
        *self.counts.entry(country).or_insert(0) += count;
    }

    pub fn get(&self, country: &str) -> Option<u64> {
        self.counts.get(country).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Ordered date-key to snapshot mapping for one metric.
///
/// Entries are appended in reconstruction order, which is chronological by
/// construction: the reconstructor walks a real calendar date forward one
/// day at a time.
#[derive(Debug, Clone, Default)]
pub struct Series {
    entries: Vec<(String, Snapshot)>,
}

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, date: String, snapshot: Snapshot) {
        self.entries.push((date, snapshot));
    }

    /// Snapshot for a date key, if the series covers it.
    pub fn get(&self, date: &str) -> Option<&Snapshot> {
        self.entries
            .iter()
            .find(|(key, _)| key == date)
            .map(|(_, snapshot)| snapshot)
    }

    /// Date key and snapshot at a frame position.
    pub fn entry(&self, index: usize) -> Option<(&str, &Snapshot)> {
        self.entries
            .get(index)
            .map(|(date, snapshot)| (date.as_str(), snapshot))
    }

    pub fn first_date(&self) -> Option<&str> {
        self.entries.first().map(|(date, _)| date.as_str())
    }

    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(date, _)| date.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Snapshot)> {
        self.entries
            .iter()
            .map(|(date, snapshot)| (date.as_str(), snapshot))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_accumulates_duplicate_countries() {
        let mut snapshot = Snapshot::new();
        snapshot.add("Denmark".into(), 5);
        snapshot.add("Denmark".into(), 7);
        assert_eq!(snapshot.get("Denmark"), Some(12));
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn series_keeps_insertion_order() {
        let mut series = Series::new();
        series.push("1/22/20".into(), Snapshot::new());
        series.push("1/23/20".into(), Snapshot::new());
        let dates: Vec<&str> = series.dates().collect();
        assert_eq!(dates, ["1/22/20", "1/23/20"]);
        assert_eq!(series.first_date(), Some("1/22/20"));
        assert!(series.get("1/23/20").is_some());
        assert!(series.get("1/24/20").is_none());
    }
}
