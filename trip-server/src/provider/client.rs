//! Trips provider HTTP client.
//!
//! Queries the external trips API for a single origin/destination pair and
//! converts the records into domain trips.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::Trip;
use crate::search::{SourceResponse, TripSource};

use super::error::ProviderError;
use super::types::ExternalTrip;

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-api-key";

/// Default request timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the trips API client.
#[derive(Debug, Clone)]
pub struct TripsApiConfig {
    /// Endpoint URL of the provider
    pub api_url: String,
    /// API key sent with every request
    pub api_key: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TripsApiConfig {
    /// Create a new config with the given endpoint and API key.
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Client for the external trips API.
#[derive(Debug, Clone)]
pub struct TripsApiClient {
    http: reqwest::Client,
    api_url: String,
}

impl TripsApiClient {
    /// Create a new client.
    ///
    /// Fails if the endpoint URL or the API key is empty, checking the URL
    /// first.
    pub fn new(config: TripsApiConfig) -> Result<Self, ProviderError> {
        if config.api_url.trim().is_empty() {
            return Err(ProviderError::MissingConfig("TRIPS_API_URL"));
        }
        if config.api_key.trim().is_empty() {
            return Err(ProviderError::MissingConfig("TRIPS_API_KEY"));
        }

        let mut headers = HeaderMap::new();
        let api_key =
            HeaderValue::from_str(&config.api_key).map_err(|_| ProviderError::InvalidApiKey)?;
        headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url,
        })
    }

    /// Fetch trips between two locations.
    ///
    /// Transport failures and non-success statuses are returned as errors.
    /// A successful response whose body is not a JSON array yields an empty
    /// list.
    pub async fn fetch_trips(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<Trip>, ProviderError> {
        debug!(origin, destination, "fetching trips from provider");

        let response = self
            .http
            .get(&self.api_url)
            .query(&[("origin", origin), ("destination", destination)])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ProviderError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                warn!(status = status.as_u16(), error = %e, "failed to read error body");
                String::new()
            });
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let items = match array_items(&body) {
            Ok(items) => items,
            Err(shape) => {
                warn!(origin, destination, shape, "trips API did not return a list");
                return Ok(Vec::new());
            }
        };

        let trips = items
            .into_iter()
            .map(|item| {
                ExternalTrip::deserialize(&item)
                    .map(ExternalTrip::into_trip)
                    .map_err(|e| ProviderError::Json {
                        message: e.to_string(),
                        body: Some(item.to_string().chars().take(500).collect()),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = trips.len(), "provider returned trips");
        Ok(trips)
    }
}

impl TripSource for TripsApiClient {
    async fn fetch(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<SourceResponse, ProviderError> {
        self.fetch_trips(origin, destination)
            .await
            .map(SourceResponse::Trips)
    }
}

/// Extract the elements of a JSON array body.
///
/// Returns a short description of the body's shape when it is anything
/// other than an array.
fn array_items(body: &str) -> Result<Vec<Value>, &'static str> {
    if body.trim().is_empty() {
        return Err("empty");
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Array(items)) => Ok(items),
        Ok(other) => Err(shape_of(&other)),
        Err(_) => Err("not JSON"),
    }
}

/// Name the JSON type of a value.
fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = TripsApiConfig::new("https://test-api.com/trips", "test-api-key");

        assert_eq!(config.api_url, "https://test-api.com/trips");
        assert_eq!(config.api_key, "test-api-key");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn config_with_timeout() {
        let config = TripsApiConfig::new("https://test-api.com/trips", "k").with_timeout(5);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn client_creation() {
        let config = TripsApiConfig::new("https://test-api.com/trips", "test-api-key");
        assert!(TripsApiClient::new(config).is_ok());
    }

    #[test]
    fn missing_url_is_rejected() {
        let err = TripsApiClient::new(TripsApiConfig::new("", "test-api-key")).unwrap_err();
        assert_eq!(err.to_string(), "Missing required configuration: TRIPS_API_URL");
    }

    #[test]
    fn missing_key_is_rejected() {
        let err =
            TripsApiClient::new(TripsApiConfig::new("https://test-api.com/trips", "  ")).unwrap_err();
        assert_eq!(err.to_string(), "Missing required configuration: TRIPS_API_KEY");
    }

    #[test]
    fn url_is_checked_before_key() {
        let err = TripsApiClient::new(TripsApiConfig::new("", "")).unwrap_err();
        assert_eq!(err.to_string(), "Missing required configuration: TRIPS_API_URL");
    }

    #[test]
    fn unprintable_key_is_rejected() {
        let err = TripsApiClient::new(TripsApiConfig::new("https://test-api.com", "bad\nkey"))
            .unwrap_err();
        assert!(matches!(err, ProviderError::InvalidApiKey));
    }

    #[test]
    fn array_items_accepts_arrays() {
        assert_eq!(array_items("[]").unwrap().len(), 0);
        assert_eq!(array_items(r#"[{"a":1},{"b":2}]"#).unwrap().len(), 2);
    }

    #[test]
    fn array_items_describes_other_shapes() {
        assert_eq!(array_items(""), Err("empty"));
        assert_eq!(array_items("null"), Err("null"));
        assert_eq!(array_items(r#"{"error":"No trips found"}"#), Err("object"));
        assert_eq!(array_items("\"trips\""), Err("string"));
        assert_eq!(array_items("<html>"), Err("not JSON"));
    }
}
