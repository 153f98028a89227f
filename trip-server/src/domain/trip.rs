//! The trip entity.

use serde::{Deserialize, Serialize};

/// A single trip between two locations.
///
/// Trips are immutable once built. Three identifiers with different owners
/// can be attached, and none of them is ever derived from another:
///
/// - `id` is assigned by the store when the trip is persisted.
/// - `trip_id` is the caller's business identifier.
/// - `provider_id` is the external provider's record id. It only exists on
///   search results and is never persisted.
///
/// # Examples
///
/// ```
/// use trip_server::domain::Trip;
///
/// let trip = Trip::new("SYD", "GRU", 625.0, 5.0, "flight", "from SYD to GRU by flight")
///     .with_trip_id("trip-123");
///
/// assert_eq!(trip.trip_id(), Some("trip-123"));
/// assert_eq!(trip.id(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    trip_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    provider_id: Option<String>,

    origin: String,
    destination: String,
    cost: f64,
    duration: f64,

    #[serde(rename = "type")]
    kind: String,

    display_name: String,
}

impl Trip {
    /// Create a trip with no identifiers attached.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        cost: f64,
        duration: f64,
        kind: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            trip_id: None,
            provider_id: None,
            origin: origin.into(),
            destination: destination.into(),
            cost,
            duration,
            kind: kind.into(),
            display_name: display_name.into(),
        }
    }

    /// Attach the storage identifier.
    pub fn with_id(self, id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..self
        }
    }

    /// Attach the business identifier.
    pub fn with_trip_id(self, trip_id: impl Into<String>) -> Self {
        Self {
            trip_id: Some(trip_id.into()),
            ..self
        }
    }

    /// Attach the external provider's record identifier.
    pub fn with_provider_id(self, provider_id: impl Into<String>) -> Self {
        Self {
            provider_id: Some(provider_id.into()),
            ..self
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn trip_id(&self) -> Option<&str> {
        self.trip_id.as_deref()
    }

    pub fn provider_id(&self) -> Option<&str> {
        self.provider_id.as_deref()
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Travel mode, e.g. `"flight"` or `"train"`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Trip {
        Trip::new("SYD", "GRU", 500.0, 480.0, "flight", "Sydney to São Paulo Flight")
    }

    #[test]
    fn new_trip_has_no_identifiers() {
        let trip = sample();
        assert_eq!(trip.id(), None);
        assert_eq!(trip.trip_id(), None);
        assert_eq!(trip.provider_id(), None);
        assert_eq!(trip.origin(), "SYD");
        assert_eq!(trip.destination(), "GRU");
        assert_eq!(trip.cost(), 500.0);
        assert_eq!(trip.duration(), 480.0);
        assert_eq!(trip.kind(), "flight");
        assert_eq!(trip.display_name(), "Sydney to São Paulo Flight");
    }

    #[test]
    fn identifiers_are_independent() {
        let trip = sample()
            .with_id("0f3c9a")
            .with_trip_id("trip-123")
            .with_provider_id("a749c866");

        assert_eq!(trip.id(), Some("0f3c9a"));
        assert_eq!(trip.trip_id(), Some("trip-123"));
        assert_eq!(trip.provider_id(), Some("a749c866"));
    }

    #[test]
    fn serializes_camel_case_and_omits_absent_ids() {
        let trip = sample().with_trip_id("trip-123");
        let value = serde_json::to_value(&trip).unwrap();

        assert_eq!(
            value,
            json!({
                "tripId": "trip-123",
                "origin": "SYD",
                "destination": "GRU",
                "cost": 500.0,
                "duration": 480.0,
                "type": "flight",
                "displayName": "Sydney to São Paulo Flight",
            })
        );
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(sample(), sample());
        assert_ne!(sample(), sample().with_trip_id("trip-1"));
    }
}
