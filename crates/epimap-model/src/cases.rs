//! Per-country case records from the current-snapshot feed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::code::CountryCode;

/// One country's reported counts, re-keyed onto its canonical code.
///
/// Created once by case mapping and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub code: CountryCode,
    /// Display name recovered from the raw feed key (underscores replaced
    /// with spaces).
    pub country: String,
    pub confirmed: u64,
    pub deaths: u64,
    pub recovered: u64,
}

/// Case records keyed by canonical code.
pub type CaseMap = BTreeMap<CountryCode, CaseRecord>;
