//! Places-search client for the Foursquare Places API
//!
//! A thin fail-fast client: one GET per search, no retries, no pagination,
//! no caching. Unlike the extractor, failures here are not absorbed; each
//! is logged once and returned to the caller.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{error, info};

use crate::error::{Result, TripAiError};
use crate::models::Place;

const DEFAULT_BASE_URL: &str = "https://places-api.foursquare.com";
/// Pinned Places API revision, sent with every request
const API_VERSION: &str = "2025-06-17";

/// Sort order for search results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Relevance,
    Rating,
    Distance,
    Popularity,
}

impl SortOrder {
    /// Query-parameter token expected by the API
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "RELEVANCE",
            Self::Rating => "RATING",
            Self::Distance => "DISTANCE",
            Self::Popularity => "POPULARITY",
        }
    }
}

/// Parameters for a single place search
#[derive(Debug, Clone)]
pub struct PlaceQuery {
    /// Search topic, e.g. "food"
    pub query: String,
    /// Place name to search near
    pub near: String,
    /// Maximum number of results
    pub limit: u32,
    /// Result ordering
    pub sort: SortOrder,
}

/// Venue lookup backend
#[async_trait]
pub trait PlaceProvider: Send + Sync {
    /// Run one category search, returning the raw result list
    async fn search(&self, query: &PlaceQuery) -> Result<Vec<Place>>;
}

/// Foursquare Places API client
pub struct FoursquareClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl FoursquareClient {
    /// Create a new client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("TripAI/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the endpoint base URL (for proxies and tests)
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn search_url(&self, query: &PlaceQuery) -> String {
        format!(
            "{}/places/search?query={}&near={}&limit={}&sort={}",
            self.base_url,
            urlencoding::encode(&query.query),
            urlencoding::encode(&query.near),
            query.limit,
            query.sort.as_str()
        )
    }

    async fn search_call(&self, query: &PlaceQuery) -> Result<Vec<Place>> {
        let response = self
            .client
            .get(self.search_url(query))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("X-Places-Api-Version", API_VERSION)
            .send()
            .await
            .map_err(|e| TripAiError::Network(format!("Place search request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();

            return match status.as_u16() {
                401 => Err(TripAiError::Authentication(
                    "Invalid or missing places API key".to_string(),
                )),
                429 => Err(TripAiError::RateLimit(
                    "Places API rate limit exceeded".to_string(),
                )),
                _ => Err(TripAiError::Api(format!(
                    "Places API error {status}: {error_text}"
                ))),
            };
        }

        let search_response: SearchResponse = response.json().await.map_err(|e| {
            TripAiError::Parse(format!("Failed to parse place search response: {e}"))
        })?;

        Ok(search_response.results)
    }
}

#[async_trait]
impl PlaceProvider for FoursquareClient {
    async fn search(&self, query: &PlaceQuery) -> Result<Vec<Place>> {
        info!("Searching places: \"{}\" near {}", query.query, query.near);

        match self.search_call(query).await {
            Ok(places) => {
                info!("Found {} places for \"{}\"", places.len(), query.query);
                Ok(places)
            }
            Err(e) => {
                error!("Place search for \"{}\" failed: {e}", query.query);
                Err(e)
            }
        }
    }
}

/// Search response envelope
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Place>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(q: &str, near: &str) -> PlaceQuery {
        PlaceQuery {
            query: q.to_string(),
            near: near.to_string(),
            limit: 5,
            sort: SortOrder::Rating,
        }
    }

    #[test]
    fn test_sort_order_tokens() {
        assert_eq!(SortOrder::Rating.as_str(), "RATING");
        assert_eq!(SortOrder::Relevance.as_str(), "RELEVANCE");
        assert_eq!(SortOrder::Distance.as_str(), "DISTANCE");
        assert_eq!(SortOrder::Popularity.as_str(), "POPULARITY");
    }

    #[test]
    fn test_search_url_encodes_parameters() {
        let client = FoursquareClient::new("fsq_test");
        let url = client.search_url(&query("street food", "Mexico City"));
        assert_eq!(
            url,
            "https://places-api.foursquare.com/places/search?query=street%20food&near=Mexico%20City&limit=5&sort=RATING"
        );
    }

    #[test]
    fn test_with_base_url_override() {
        let client = FoursquareClient::new("fsq_test").with_base_url("http://localhost:8080");
        let url = client.search_url(&query("food", "Montreal"));
        assert!(url.starts_with("http://localhost:8080/places/search?"));
    }

    #[test]
    fn test_search_response_parses_results() {
        let json = r#"{"results":[{"name":"A"},{"name":"B"}]}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].name, "A");
    }

    #[test]
    fn test_search_response_tolerates_missing_results() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.results.is_empty());
    }

    #[tokio::test]
    async fn test_search_fails_fast_on_dead_endpoint() {
        let client = FoursquareClient::new("fsq_test").with_base_url("http://127.0.0.1:9");
        let result = client.search(&query("food", "Montreal")).await;
        assert!(matches!(result, Err(TripAiError::Network(_))));
    }
}
