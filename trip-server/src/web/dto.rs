//! Data transfer objects for web requests and responses.
//!
//! Request fields are all optional so that missing values are reported by
//! validation rather than by the extractor.

use serde::{Deserialize, Serialize};

/// Query string of a trip search.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTripsQuery {
    /// Origin IATA code (3 uppercase letters)
    pub origin: Option<String>,

    /// Destination IATA code (3 uppercase letters)
    pub destination: Option<String>,

    /// `fastest` or `cheapest`
    pub sort_by: Option<String>,
}

/// Body of a create-trip request.
///
/// Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripRequest {
    /// Business identifier, unique across saved trips
    pub trip_id: Option<String>,

    pub origin: Option<String>,

    pub destination: Option<String>,

    pub cost: Option<f64>,

    pub duration: Option<f64>,

    /// Travel mode
    #[serde(rename = "type")]
    pub kind: Option<String>,

    pub display_name: Option<String>,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Individual validation failures, if any
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<String>,
}
