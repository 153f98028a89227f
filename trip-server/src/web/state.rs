//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::TripCatalog;
use crate::search::SearchTrips;

/// Shared application state.
///
/// Generic over the trip source and the repository so handlers can be
/// exercised against in-process fakes.
pub struct AppState<S, R> {
    /// Trip search against the provider
    pub search: Arc<SearchTrips<S>>,

    /// Saved trips
    pub catalog: Arc<TripCatalog<R>>,
}

impl<S, R> Clone for AppState<S, R> {
    fn clone(&self) -> Self {
        Self {
            search: Arc::clone(&self.search),
            catalog: Arc::clone(&self.catalog),
        }
    }
}

impl<S, R> AppState<S, R> {
    /// Create a new app state.
    pub fn new(search: SearchTrips<S>, catalog: TripCatalog<R>) -> Self {
        Self {
            search: Arc::new(search),
            catalog: Arc::new(catalog),
        }
    }
}
