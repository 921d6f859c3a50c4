//! Chronological reconstruction of the historical series.
//!
//! The historical feed keys counts by `M/D/YY` date strings scattered over
//! per-region rows. Reconstruction walks a real calendar date forward from
//! the series epoch one day at a time and collects a snapshot for every
//! date the feed covers, so month lengths and year rollover come from the
//! calendar rather than from guessing at missing keys.

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use epimap_ingest::{HistoryFeed, RegionRow};
use epimap_model::{Metric, Series, Snapshot};

use crate::error::{ReconcileError, Result};

/// First date any historical block reports.
fn series_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 22).expect("fixed epoch date")
}

/// Formats a date the way the feed keys it: `M/D/YY`, no zero padding.
pub fn date_key(date: NaiveDate) -> String {
    format!(
        "{}/{}/{}",
        date.month(),
        date.day(),
        date.year().rem_euclid(100)
    )
}

/// True if `key` parses as an `M/D/YY` date.
fn is_date_key(key: &str) -> bool {
    NaiveDate::parse_from_str(key, "%m/%d/%y").is_ok()
}

/// Number of date-shaped keys on a region row.
///
/// This bounds the reconstruction walk. It is computed per metric from that
/// metric's own first row, so blocks covering different date ranges each
/// get their own bound.
fn day_count(row: &RegionRow) -> usize {
    row.keys().filter(|key| is_date_key(key)).count()
}

/// Reconstructs one metric's chronological [`Series`] from the historical
/// feed.
///
/// For every date the feed covers, counts are accumulated per region name
/// (underscores replaced with spaces). Duplicate region rows for one date
/// sum into a single snapshot entry, merging split sub-regions of the same
/// country. Rows without a region name contribute nothing.
///
/// A date key present on the calendar but absent from the feed is skipped
/// with a warning; for well-formed feeds the keys are exactly the calendar
/// days from the epoch onward and every step lands.
pub fn reconstruct(feed: &HistoryFeed, metric: Metric) -> Result<Series> {
    let block = feed
        .metric_block(metric)
        .ok_or(ReconcileError::MissingMetric(metric))?;
    let (statistic, rows) = block
        .primary()
        .ok_or(ReconcileError::EmptyMetric(metric))?;
    let first = rows.first().ok_or(ReconcileError::EmptyMetric(metric))?;

    let days = day_count(first);
    debug!(
        metric = %metric,
        statistic,
        regions = rows.len(),
        days,
        "reconstructing series"
    );

    let mut series = Series::new();
    let mut cursor = series_epoch();
    for _ in 0..days {
        let key = date_key(cursor);
        if first.contains(&key) {
            let mut snapshot = Snapshot::new();
            for row in rows {
                let Some(name) = row.region_name() else {
                    debug!(date = %key, "region row without a name field");
                    continue;
                };
                let Some(count) = row.count(&key) else {
                    continue;
                };
                snapshot.add(name.replace('_', " "), count);
            }
            series.push(key, snapshot);
        } else {
            warn!(date = %key, metric = %metric, "date missing from historical feed");
        }
        let Some(next) = cursor.succ_opt() else {
            break;
        };
        cursor = next;
    }

    Ok(series)
}
