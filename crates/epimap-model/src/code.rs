//! Canonical country codes and the name resolution table.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Truncates a display name at the first `" ("`, stripping parenthetical
/// qualifiers: `"Congo (Kinshasa)"` becomes `"Congo"`.
///
/// Applied both when deriving table names from the countries feed and when
/// resolving region names out of historical snapshots, so the two paths
/// agree on what a name looks like.
pub fn strip_qualifier(name: &str) -> &str {
    match name.find(" (") {
        Some(index) => &name[..index],
        None => name,
    }
}

/// The three-letter canonical identifier joining all reconciled datasets.
///
/// Every dataset that survives reconciliation is keyed by `CountryCode`;
/// display names only exist at the edges (feed payloads, table rows).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    /// Parses a raw code, requiring exactly three ASCII letters.
    ///
    /// Feed entries carrying anything else are treated as malformed and
    /// skipped by the callers that build lookup tables.
    pub fn parse(raw: &str) -> Result<Self> {
        if raw.len() == 3 && raw.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(raw.to_ascii_uppercase()))
        } else {
            Err(ModelError::InvalidCode {
                value: raw.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CountryCode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display name to canonical code lookup.
///
/// Built once during session initialization and read-only afterwards.
/// Insertion is first-write-wins: curated override names are inserted
/// before feed-derived names, so an override can never be clobbered by a
/// feed entry for the same name.
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    names: BTreeMap<String, CountryCode>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a name mapping unless the name is already present.
    ///
    /// Returns true if the entry was inserted.
    pub fn insert_if_absent(&mut self, name: String, code: CountryCode) -> bool {
        match self.names.entry(name) {
            std::collections::btree_map::Entry::Vacant(entry) => {
                entry.insert(code);
                true
            }
            std::collections::btree_map::Entry::Occupied(_) => false,
        }
    }

    /// Resolves a display name to its canonical code.
    pub fn resolve(&self, name: &str) -> Option<&CountryCode> {
        self.names.get(name)
    }

    /// Reverse lookup: the first display name mapped to `code`.
    ///
    /// Used for countries that resolve but have no case record, where the
    /// table row needs a printable name.
    pub fn name_of(&self, code: &CountryCode) -> Option<&str> {
        self.names
            .iter()
            .find(|(_, c)| *c == code)
            .map(|(name, _)| name.as_str())
    }

    /// All known display names, in lexicographic order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(String, CountryCode)> for CodeTable {
    fn from_iter<I: IntoIterator<Item = (String, CountryCode)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, code) in iter {
            table.insert_if_absent(name, code);
        }
        table
    }
}
