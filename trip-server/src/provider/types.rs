//! Wire types for the trips provider API.

use serde::Deserialize;

use crate::domain::Trip;

/// One trip record as returned by the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalTrip {
    pub id: String,
    pub origin: String,
    pub destination: String,
    pub cost: f64,
    pub duration: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub display_name: String,
}

impl ExternalTrip {
    /// Convert to a domain trip.
    ///
    /// The provider's id is kept as `provider_id`; the storage and business
    /// identifiers stay empty.
    pub fn into_trip(self) -> Trip {
        Trip::new(
            self.origin,
            self.destination,
            self.cost,
            self.duration,
            self.kind,
            self.display_name,
        )
        .with_provider_id(self.id)
    }
}
