use crate::{Config, LocationWeather, provider::openweather::OpenWeatherClient};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// Failure categories of a location search. All of them are rendered through
/// the dashboard's single error banner.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Please enter a city name")]
    EmptyQuery,

    #[error("No results found. Please try a different search term.")]
    NoResults,

    #[error("Failed to fetch search results (status {status}): {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to fetch search results: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to read search results: {0}")]
    Malformed(String),
}

/// Coarse classification used by callers that only care about the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorKind {
    Validation,
    EmptyResult,
    Transport,
}

impl SearchError {
    pub fn kind(&self) -> SearchErrorKind {
        match self {
            SearchError::EmptyQuery => SearchErrorKind::Validation,
            SearchError::NoResults => SearchErrorKind::EmptyResult,
            SearchError::Status { .. } | SearchError::Network(_) | SearchError::Malformed(_) => {
                SearchErrorKind::Transport
            }
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Malformed(err.to_string())
    }
}

/// A city-name lookup against an external weather provider.
///
/// Implementations return the provider's matches in the provider's order,
/// possibly empty. Query validation and the empty-result rule live in
/// [`search_locations`].
#[async_trait]
pub trait LocationSearch: Send + Sync + Debug {
    async fn find(&self, query: &str) -> Result<Vec<LocationWeather>, SearchError>;
}

/// Trim the query and reject it if nothing is left.
pub fn validate_query(raw: &str) -> Result<&str, SearchError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(SearchError::EmptyQuery)
    } else {
        Ok(trimmed)
    }
}

/// Run one lookup: validate, call the provider, and turn an empty match list
/// into [`SearchError::NoResults`].
pub async fn search_locations(
    provider: &dyn LocationSearch,
    raw_query: &str,
) -> Result<Vec<LocationWeather>, SearchError> {
    let query = validate_query(raw_query)?;

    tracing::debug!(query, "searching locations");
    let results = provider.find(query).await?;

    if results.is_empty() {
        tracing::info!(query, "no locations matched");
        return Err(SearchError::NoResults);
    }

    tracing::info!(query, count = results.len(), "locations found");
    Ok(results)
}

/// Construct the OpenWeather client from config.
pub fn provider_from_config(config: &Config) -> anyhow::Result<Box<dyn LocationSearch>> {
    let api_key = config.api_key()?;

    Ok(Box::new(OpenWeatherClient::with_base_url(
        api_key,
        config.base_url().to_owned(),
    )))
}


#[cfg(test)]
mod tests {
    use super::fake::FakeSearch;
    use super::*;
    use crate::model::fixtures::location;

    #[test]
    fn validate_query_trims_whitespace() {
        assert_eq!(validate_query("  Paris \t").unwrap(), "Paris");
    }

    #[test]
    fn validate_query_rejects_blank_input() {
        for raw in ["", "   ", "\n\t"] {
            let err = validate_query(raw).unwrap_err();
            assert_eq!(err.kind(), SearchErrorKind::Validation);
            assert_eq!(err.to_string(), "Please enter a city name");
        }
    }

    #[tokio::test]
    async fn blank_query_never_reaches_provider() {
        let provider = FakeSearch::returning(vec![location(42, "Paris", "FR", 15.0)]);

        let err = search_locations(&provider, "   ").await.unwrap_err();

        assert!(matches!(err, SearchError::EmptyQuery));
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn provider_receives_trimmed_query() {
        let provider = FakeSearch::returning(vec![location(42, "Paris", "FR", 15.0)]);

        search_locations(&provider, "  Paris  ").await.unwrap();

        assert_eq!(provider.queries(), vec!["Paris".to_string()]);
    }

    #[tokio::test]
    async fn empty_match_list_is_an_error() {
        let provider = FakeSearch::returning(Vec::new());

        let err = search_locations(&provider, "Nowhere").await.unwrap_err();

        assert_eq!(err.kind(), SearchErrorKind::EmptyResult);
        assert!(err.to_string().starts_with("No results found"));
    }

    #[tokio::test]
    async fn results_keep_provider_order_and_duplicates() {
        let results = vec![
            location(3, "Springfield", "US", 20.0),
            location(1, "Springfield", "US", 21.0),
            location(3, "Springfield", "US", 20.0),
        ];
        let provider = FakeSearch::returning(results.clone());

        let found = search_locations(&provider, "Springfield").await.unwrap();

        assert_eq!(found, results);
    }

    #[tokio::test]
    async fn transport_errors_pass_through() {
        let provider = FakeSearch::failing(SearchError::Malformed("bad body".into()));

        let err = search_locations(&provider, "Paris").await.unwrap_err();

        assert_eq!(err.kind(), SearchErrorKind::Transport);
    }

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = provider_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("No OpenWeather API key configured"));
    }

    #[test]
    fn provider_from_config_works_when_key_set() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        assert!(provider_from_config(&cfg).is_ok());
    }
}
