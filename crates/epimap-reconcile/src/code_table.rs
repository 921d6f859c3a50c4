//! Canonical code table construction.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use epimap_ingest::CountryEntry;
use epimap_model::{CodeTable, CountryCode, strip_qualifier};

/// Countries whose feed names have anomalies (special characters, brackets,
/// or multiple variants in circulation) are pinned here. Override entries
/// are inserted before feed-derived names and therefore win any collision.
const DEFAULT_OVERRIDES: &[(&str, &str)] = &[
    ("Brunei", "BRN"),
    ("Mainland China", "CHN"),
    ("US", "USA"),
    ("Iran", "IRN"),
    ("South Korea", "KOR"),
    ("Korea, South", "KOR"),
    ("Korea", "KOR"),
    ("Taiwan*", "TWN"),
    ("UK", "GBR"),
    ("United Kingdom", "GBR"),
    ("Czechia", "CZE"),
    ("Russia", "RUS"),
    ("United Arab Emirates", "UAE"),
    ("Macau", "MAC"),
    ("North Macedonia", "MKD"),
    ("Venezuela", "VEN"),
    ("Vietnam", "VNM"),
    ("Cote d'Ivoire", "CIV"),
    ("West Bank and Gaza", "PSE"),
    ("Kosovo", "KOS"),
    ("Congo (Kinshasa)", "COD"),
    ("Congo (Brazzaville)", "COG"),
    ("Tanzania", "TZA"),
    ("Burma", "MMR"),
    ("Syria", "SYR"),
    ("Laos", "LAO"),
    ("Eswatini", "SWZ"),
];

/// The curated override set shipped with the crate.
pub fn default_overrides() -> BTreeMap<String, CountryCode> {
    DEFAULT_OVERRIDES
        .iter()
        .filter_map(|(name, code)| {
            CountryCode::parse(code)
                .ok()
                .map(|code| ((*name).to_string(), code))
        })
        .collect()
}

/// Builds the display-name lookup from the countries feed plus overrides.
///
/// Override entries are inserted first; feed entries never replace an
/// existing name. Feed names are truncated at the first `" ("` so that
/// qualified forms collapse onto their plain name unless an override pins
/// the qualified form. Entries without a usable name or code are skipped.
pub fn build_code_table(
    entries: &[CountryEntry],
    overrides: &BTreeMap<String, CountryCode>,
) -> CodeTable {
    let mut table: CodeTable = overrides
        .iter()
        .map(|(name, code)| (name.clone(), code.clone()))
        .collect();

    let mut skipped = 0usize;
    for entry in entries {
        let (Some(name), Some(raw_code)) = (entry.name.as_deref(), entry.code.as_deref()) else {
            skipped += 1;
            debug!(name = ?entry.name, code = ?entry.code, "country entry missing name or code");
            continue;
        };
        let Ok(code) = CountryCode::parse(raw_code) else {
            skipped += 1;
            debug!(name, code = raw_code, "country entry has malformed code");
            continue;
        };
        table.insert_if_absent(strip_qualifier(name).to_string(), code);
    }

    if skipped > 0 {
        warn!(skipped, "skipped unusable countries feed entries");
    }
    debug!(names = table.len(), "code table built");
    table
}
