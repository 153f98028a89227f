//! External trips provider client.
//!
//! The provider answers `GET {url}?origin=..&destination=..` with a JSON
//! array of trip records. Any successful response that is not an array is
//! treated as "no trips".

mod client;
mod error;
mod types;

pub use client::{TripsApiClient, TripsApiConfig};
pub use error::ProviderError;
pub use types::ExternalTrip;
