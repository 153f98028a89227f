//! Trips API client error types.

/// Errors from the trips provider HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid API key or unauthorized
    #[error("unauthorized: check TRIPS_API_KEY")]
    Unauthorized,

    /// Rate limited by the API
    #[error("rate limited by trips API")]
    RateLimited,

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// A trip record in the response could not be decoded
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// A required configuration value is missing or empty
    #[error("Missing required configuration: {0}")]
    MissingConfig(&'static str),

    /// The API key cannot be sent as a header value
    #[error("invalid API key format")]
    InvalidApiKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ProviderError::MissingConfig("TRIPS_API_URL");
        assert_eq!(err.to_string(), "Missing required configuration: TRIPS_API_URL");

        let err = ProviderError::Api {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "API error 503: Service Unavailable");

        let err = ProviderError::Json {
            message: "missing field `cost`".into(),
            body: Some("{}".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("missing field `cost`"));
    }
}
