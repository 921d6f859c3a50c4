pub mod adjacency;
pub mod cases;
pub mod code;
pub mod error;
pub mod series;

pub use adjacency::AdjacencyMap;
pub use cases::{CaseMap, CaseRecord};
pub use code::{CodeTable, CountryCode, strip_qualifier};
pub use error::{ModelError, Result};
pub use series::{Metric, Series, Snapshot};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_record_serializes() {
        let record = CaseRecord {
            code: CountryCode::parse("ALA").unwrap(),
            country: "Aland".to_string(),
            confirmed: 3,
            deaths: 1,
            recovered: 1,
        };
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: CaseRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
        assert_eq!(round.code.as_str(), "ALA");
    }

    #[test]
    fn metric_feed_positions() {
        assert_eq!(Metric::Confirmed.feed_index(), 0);
        assert_eq!(Metric::Deaths.feed_index(), 1);
        assert_eq!(Metric::Deaths.to_string(), "deaths");
    }
}
