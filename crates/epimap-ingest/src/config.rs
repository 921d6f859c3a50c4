//! Endpoint configuration.

/// Base URL the three relative feed paths are appended to.
pub const DEFAULT_BASE_URL: &str = "https://tie-lukioplus.rd.tuni.fi/corona/api/";

/// Absolute URL of the historical series feed. The upstream service does not
/// serve it under the same base path, so it is configured separately.
pub const DEFAULT_SERIES_URL: &str = "https://tie-lukioplus.rd.tuni.fi/corona/api/corona/timeseries";

/// Where the four feeds are fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub base_url: String,
    pub series_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            series_url: DEFAULT_SERIES_URL.to_string(),
        }
    }
}

impl EndpointConfig {
    /// Configuration with a custom base URL and the default series URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn countries_url(&self) -> String {
        format!("{}countries", self.base_url)
    }

    pub fn cases_url(&self) -> String {
        format!("{}corona", self.base_url)
    }

    pub fn neighbours_url(&self) -> String {
        format!("{}neighbours", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_append_to_base() {
        let config = EndpointConfig::with_base_url("http://localhost:8000/api/");
        assert_eq!(config.countries_url(), "http://localhost:8000/api/countries");
        assert_eq!(config.cases_url(), "http://localhost:8000/api/corona");
        assert_eq!(
            config.neighbours_url(),
            "http://localhost:8000/api/neighbours"
        );
        assert_eq!(config.series_url, DEFAULT_SERIES_URL);
    }
}
