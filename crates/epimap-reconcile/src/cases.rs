//! Re-keying the current-snapshot feed onto canonical codes.

use tracing::{debug, warn};

use epimap_ingest::CasesFeed;
use epimap_model::{CaseMap, CaseRecord, CodeTable};

/// Maps raw case entries onto canonical codes.
///
/// Raw keys are underscore-separated; underscores become spaces before the
/// lookup, and the recovered display name is stored on the record. Keys the
/// table cannot resolve are dropped: a case series without a canonical code
/// cannot be placed on the map.
///
/// Well-formed feeds never resolve two raw keys to the same code. If one
/// does, the entry for the lexicographically last raw key wins; the feed
/// is iterated in key order, so the outcome is deterministic.
pub fn map_cases(feed: &CasesFeed, table: &CodeTable) -> CaseMap {
    let mut cases = CaseMap::new();
    let mut unresolved = 0usize;

    for (raw_key, counts) in feed {
        let country = raw_key.replace('_', " ");
        let Some(code) = table.resolve(&country) else {
            unresolved += 1;
            debug!(key = %raw_key, "case entry does not resolve to a canonical code");
            continue;
        };
        cases.insert(
            code.clone(),
            CaseRecord {
                code: code.clone(),
                country,
                confirmed: counts.confirmed,
                deaths: counts.deaths,
                recovered: counts.recovered,
            },
        );
    }

    if unresolved > 0 {
        warn!(unresolved, "dropped unresolvable case entries");
    }
    debug!(countries = cases.len(), "case map built");
    cases
}
