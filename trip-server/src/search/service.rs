//! Trip search: validate, fetch, sort.

use tracing::{debug, warn};

use crate::domain::Trip;
use crate::provider::ProviderError;

use super::sort::{SortStrategy, sort_trips};
use super::source::{SourceResponse, TripSource};

/// Error from trip search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Origin or destination is blank
    #[error("Origin and destination are required")]
    MissingEndpoints,

    /// The source returned something other than a list of trips
    #[error("Trips API returned an invalid response")]
    InvalidResponse,

    /// The source itself failed
    #[error(transparent)]
    Upstream(#[from] ProviderError),
}

/// Parameters for a trip search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub origin: String,
    pub destination: String,
    pub sort_by: SortStrategy,
}

impl SearchParams {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        sort_by: SortStrategy,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            sort_by,
        }
    }
}

/// Searches a trip source and orders the results.
pub struct SearchTrips<S> {
    source: S,
}

impl<S: TripSource> SearchTrips<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    #[cfg(test)]
    pub(crate) fn source(&self) -> &S {
        &self.source
    }

    /// Run a search.
    ///
    /// Blank endpoints are rejected before the source is contacted. Source
    /// failures are not retried.
    pub async fn execute(&self, params: &SearchParams) -> Result<Vec<Trip>, SearchError> {
        let origin = params.origin.trim();
        let destination = params.destination.trim();

        if origin.is_empty() || destination.is_empty() {
            return Err(SearchError::MissingEndpoints);
        }

        let trips = match self.source.fetch(origin, destination).await? {
            SourceResponse::Trips(trips) => trips,
            SourceResponse::Invalid { shape } => {
                warn!(origin, destination, shape, "trip source returned a non-list response");
                return Err(SearchError::InvalidResponse);
            }
        };

        debug!(
            origin,
            destination,
            count = trips.len(),
            sort_by = %params.sort_by,
            "sorting trips"
        );

        Ok(sort_trips(&trips, params.sort_by))
    }
}
