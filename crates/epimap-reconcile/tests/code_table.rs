//! Tests for code table construction: override precedence and feed-name
//! normalization.

use std::collections::BTreeMap;

use epimap_ingest::CountryEntry;
use epimap_model::CountryCode;
use epimap_reconcile::{build_code_table, default_overrides};

fn entry(name: &str, code: &str) -> CountryEntry {
    serde_json::from_value(serde_json::json!({ "name": name, "alpha3Code": code }))
        .expect("country entry")
}

fn overrides(pairs: &[(&str, &str)]) -> BTreeMap<String, CountryCode> {
    pairs
        .iter()
        .map(|(name, code)| ((*name).to_string(), CountryCode::parse(code).unwrap()))
        .collect()
}

#[test]
fn override_wins_over_feed_entry() {
    let table = build_code_table(&[entry("Korea", "PRK")], &overrides(&[("Korea", "KOR")]));
    assert_eq!(table.resolve("Korea").unwrap().as_str(), "KOR");
}

#[test]
fn feed_names_are_truncated_at_qualifier() {
    let table = build_code_table(
        &[entry("Congo (Kinshasa)", "COD")],
        &BTreeMap::new(),
    );
    assert_eq!(table.resolve("Congo").unwrap().as_str(), "COD");
    assert!(table.resolve("Congo (Kinshasa)").is_none());
}

#[test]
fn qualified_override_survives_truncated_feed_name() {
    // The override keeps the qualified spelling; the feed contributes the
    // truncated one. Both resolve.
    let table = build_code_table(
        &[entry("Congo (Brazzaville)", "COG")],
        &overrides(&[("Congo (Kinshasa)", "COD")]),
    );
    assert_eq!(table.resolve("Congo (Kinshasa)").unwrap().as_str(), "COD");
    assert_eq!(table.resolve("Congo").unwrap().as_str(), "COG");
}

#[test]
fn entries_missing_name_or_code_are_skipped() {
    let missing_code: CountryEntry =
        serde_json::from_value(serde_json::json!({ "name": "Atlantis" })).unwrap();
    let missing_name: CountryEntry =
        serde_json::from_value(serde_json::json!({ "alpha3Code": "ATL" })).unwrap();
    let bad_code = entry("Atlantis", "ATLANTIS");

    let table = build_code_table(&[missing_code, missing_name, bad_code], &BTreeMap::new());
    assert!(table.is_empty());
}

#[test]
fn default_overrides_cover_known_variants() {
    let overrides = default_overrides();
    assert_eq!(overrides.get("Taiwan*").unwrap().as_str(), "TWN");
    assert_eq!(overrides.get("US").unwrap().as_str(), "USA");
    assert_eq!(overrides.get("Korea, South").unwrap().as_str(), "KOR");
    assert_eq!(overrides.get("UK").unwrap().as_str(), "GBR");
    assert_eq!(
        overrides.get("UK"),
        overrides.get("United Kingdom"),
        "both UK spellings share a code"
    );
}
