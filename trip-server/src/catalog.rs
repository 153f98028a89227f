//! Saved-trip management: create, list, delete.

use tracing::info;

use crate::domain::Trip;
use crate::store::{StoreError, TripRepository};

/// Error from a catalog operation.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// No trip has the given storage id
    #[error("Trip with id {0} not found")]
    NotFound(String),

    /// The store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Application service over a trip repository.
pub struct TripCatalog<R> {
    repo: R,
}

impl<R: TripRepository> TripCatalog<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    #[cfg(test)]
    pub(crate) fn repository(&self) -> &R {
        &self.repo
    }

    /// Persist a new trip.
    pub async fn save(&self, trip: &Trip) -> Result<Trip, CatalogError> {
        let saved = self.repo.save(trip).await?;
        info!(
            id = saved.id().unwrap_or_default(),
            trip_id = saved.trip_id().unwrap_or_default(),
            "saved trip"
        );
        Ok(saved)
    }

    /// Every saved trip.
    pub async fn list(&self) -> Result<Vec<Trip>, CatalogError> {
        Ok(self.repo.find_all().await?)
    }

    /// Delete a trip by storage id.
    ///
    /// Deleting an id that matches nothing is reported as `NotFound`.
    pub async fn delete(&self, id: &str) -> Result<(), CatalogError> {
        if !self.repo.delete_by_id(id).await? {
            return Err(CatalogError::NotFound(id.to_string()));
        }
        info!(id, "deleted trip");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DocumentStore;
    use std::sync::Mutex;

    /// Repository that fails every call, recording what it was asked.
    #[derive(Default)]
    struct BrokenRepo {
        deleted: Mutex<Vec<String>>,
    }

    impl TripRepository for BrokenRepo {
        async fn save(&self, _trip: &Trip) -> Result<Trip, StoreError> {
            Err(StoreError::Io(std::io::Error::other("Database save failed")))
        }

        async fn find_all(&self) -> Result<Vec<Trip>, StoreError> {
            Err(StoreError::Io(std::io::Error::other("DB error")))
        }

        async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
            self.deleted.lock().unwrap().push(id.to_string());
            Err(StoreError::Io(std::io::Error::other("Database deletion failed")))
        }
    }

    fn trip(trip_id: &str) -> Trip {
        Trip::new("SYD", "GRU", 500.0, 480.0, "flight", "Sydney to São Paulo Flight")
            .with_trip_id(trip_id)
    }

    #[tokio::test]
    async fn save_then_list() {
        let catalog = TripCatalog::new(DocumentStore::in_memory());

        let saved = catalog.save(&trip("trip-123")).await.unwrap();
        let listed = catalog.list().await.unwrap();

        assert_eq!(listed, vec![saved]);
    }

    #[tokio::test]
    async fn delete_existing() {
        let catalog = TripCatalog::new(DocumentStore::in_memory());
        let saved = catalog.save(&trip("trip-123")).await.unwrap();

        catalog.delete(saved.id().unwrap()).await.unwrap();

        assert!(catalog.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let catalog = TripCatalog::new(DocumentStore::in_memory());
        let id = "0123456789abcdef0123456789abcdef";

        let err = catalog.delete(id).await.unwrap_err();

        assert!(matches!(err, CatalogError::NotFound(_)));
        assert_eq!(err.to_string(), format!("Trip with id {id} not found"));
    }

    #[tokio::test]
    async fn duplicate_save_propagates_store_error() {
        let catalog = TripCatalog::new(DocumentStore::in_memory());
        catalog.save(&trip("trip-123")).await.unwrap();

        let err = catalog.save(&trip("trip-123")).await.unwrap_err();

        assert!(matches!(
            err,
            CatalogError::Store(StoreError::DuplicateTripId(_))
        ));
    }

    #[tokio::test]
    async fn store_failures_propagate_verbatim() {
        let catalog = TripCatalog::new(BrokenRepo::default());

        let err = catalog.save(&trip("trip-1")).await.unwrap_err();
        assert_eq!(err.to_string(), "store I/O error: Database save failed");

        let err = catalog.list().await.unwrap_err();
        assert_eq!(err.to_string(), "store I/O error: DB error");

        let err = catalog.delete("trip-id").await.unwrap_err();
        assert_eq!(err.to_string(), "store I/O error: Database deletion failed");
        assert_eq!(
            *catalog.repository().deleted.lock().unwrap(),
            vec!["trip-id".to_string()]
        );
    }
}
