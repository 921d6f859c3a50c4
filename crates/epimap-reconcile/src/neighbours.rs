//! Adjacency map construction.

use tracing::{debug, warn};

use epimap_ingest::NeighbourEntry;
use epimap_model::{AdjacencyMap, CountryCode};

/// Copies the adjacency feed into an [`AdjacencyMap`], preserving border
/// order.
///
/// Neighbour codes are not checked against any other dataset: the graph may
/// reference countries with no case data, and consumers tolerate that. Only
/// structurally malformed codes are dropped.
pub fn build_adjacency(entries: &[NeighbourEntry]) -> AdjacencyMap {
    let mut map = AdjacencyMap::new();
    let mut skipped = 0usize;

    for entry in entries {
        let Ok(code) = CountryCode::parse(&entry.code) else {
            skipped += 1;
            debug!(code = %entry.code, "adjacency entry has malformed code");
            continue;
        };
        let borders = entry
            .borders
            .iter()
            .filter_map(|raw| match CountryCode::parse(raw) {
                Ok(neighbour) => Some(neighbour),
                Err(_) => {
                    debug!(code = %code, neighbour = %raw, "malformed neighbour code");
                    None
                }
            })
            .collect();
        map.insert(code, borders);
    }

    if skipped > 0 {
        warn!(skipped, "skipped malformed adjacency entries");
    }
    debug!(countries = map.len(), "adjacency map built");
    map
}
