//! Country adjacency built from the borders feed.

use std::collections::BTreeMap;

use crate::code::CountryCode;

/// Neighbour codes per country, border order preserved.
///
/// The graph may reference codes with no case data; lookups for unknown
/// codes return an empty slice so that consumers never need to special-case
/// a country the adjacency feed does not cover.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyMap {
    borders: BTreeMap<CountryCode, Vec<CountryCode>>,
}

impl AdjacencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, code: CountryCode, neighbours: Vec<CountryCode>) {
        self.borders.insert(code, neighbours);
    }

    /// Neighbours of `code`, empty if the feed never mentioned it.
    pub fn neighbours(&self, code: &CountryCode) -> &[CountryCode] {
        self.borders.get(code).map_or(&[], Vec::as_slice)
    }

    pub fn contains(&self, code: &CountryCode) -> bool {
        self.borders.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.borders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.borders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(raw: &str) -> CountryCode {
        CountryCode::parse(raw).unwrap()
    }

    #[test]
    fn unknown_code_has_no_neighbours() {
        let map = AdjacencyMap::new();
        assert!(map.neighbours(&code("FIN")).is_empty());
    }

    #[test]
    fn border_order_is_preserved() {
        let mut map = AdjacencyMap::new();
        map.insert(code("FIN"), vec![code("SWE"), code("NOR"), code("RUS")]);
        let neighbours: Vec<&str> = map
            .neighbours(&code("FIN"))
            .iter()
            .map(CountryCode::as_str)
            .collect();
        assert_eq!(neighbours, ["SWE", "NOR", "RUS"]);
    }
}
