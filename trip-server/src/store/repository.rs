//! Persistence contract for trips.

use std::future::Future;

use crate::domain::Trip;

use super::error::StoreError;

/// Trait for persisting trips.
///
/// Implementations store the business `trip_id`, never the storage `id`,
/// and hand back trips carrying both.
pub trait TripRepository: Send + Sync {
    /// Persist a trip and return it with its storage id attached.
    fn save(&self, trip: &Trip) -> impl Future<Output = Result<Trip, StoreError>> + Send;

    /// Every stored trip.
    fn find_all(&self) -> impl Future<Output = Result<Vec<Trip>, StoreError>> + Send;

    /// Remove a trip by storage id. Returns whether anything was removed.
    fn delete_by_id(&self, id: &str) -> impl Future<Output = Result<bool, StoreError>> + Send;
}
