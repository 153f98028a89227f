//! Abstraction over where trip candidates come from.

use std::future::Future;

use crate::domain::Trip;
use crate::provider::ProviderError;

/// What a trip source handed back.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceResponse {
    /// A list of trips, possibly empty.
    Trips(Vec<Trip>),

    /// The source produced something that is not a list.
    Invalid { shape: &'static str },
}

/// Trait for providing trip candidates.
///
/// This abstraction allows the search to be tested with mock data.
pub trait TripSource: Send + Sync {
    /// Fetch trips between `origin` and `destination`.
    ///
    /// Errors are returned unchanged to the caller of the search.
    fn fetch(
        &self,
        origin: &str,
        destination: &str,
    ) -> impl Future<Output = Result<SourceResponse, ProviderError>> + Send;
}
