//! Document store for trips.
//!
//! Trips are kept as JSON documents in memory, keyed by a generated `_id`
//! with a unique index on `tripId`. When opened with a path, the whole
//! collection is written back to disk after every change.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::Trip;

use super::error::StoreError;
use super::repository::TripRepository;

/// A stored trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TripDocument {
    #[serde(rename = "_id")]
    id: String,
    trip_id: String,
    origin: String,
    destination: String,
    cost: f64,
    duration: f64,
    #[serde(rename = "type")]
    kind: String,
    display_name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TripDocument {
    fn new(id: String, trip_id: String, trip: &Trip, now: DateTime<Utc>) -> Self {
        Self {
            id,
            trip_id,
            origin: trip.origin().to_string(),
            destination: trip.destination().to_string(),
            cost: trip.cost(),
            duration: trip.duration(),
            kind: trip.kind().to_string(),
            display_name: trip.display_name().to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn to_trip(&self) -> Trip {
        Trip::new(
            self.origin.as_str(),
            self.destination.as_str(),
            self.cost,
            self.duration,
            self.kind.as_str(),
            self.display_name.as_str(),
        )
        .with_id(self.id.as_str())
        .with_trip_id(self.trip_id.as_str())
    }
}

/// On-disk snapshot layout.
#[derive(Debug, Default, Deserialize)]
struct Snapshot {
    trips: Vec<TripDocument>,
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    trips: &'a [TripDocument],
}

/// Thread-safe trip document store.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    docs: Arc<RwLock<Vec<TripDocument>>>,
    path: Option<PathBuf>,
}

impl DocumentStore {
    /// Create an empty store that lives only in memory.
    pub fn in_memory() -> Self {
        Self {
            docs: Arc::new(RwLock::new(Vec::new())),
            path: None,
        }
    }

    /// Open a store backed by a snapshot file.
    ///
    /// A missing file starts an empty collection; an unreadable or invalid
    /// one is an error.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let docs = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => serde_json::from_str::<Snapshot>(&contents)?.trips,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        info!(path = %path.display(), count = docs.len(), "opened trip store");

        Ok(Self {
            docs: Arc::new(RwLock::new(docs)),
            path: Some(path),
        })
    }

    #[cfg(test)]
    fn path(&self) -> Option<&std::path::Path> {
        self.path.as_deref()
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.docs.read().await.len()
    }

    #[cfg(test)]
    async fn is_empty(&self) -> bool {
        self.docs.read().await.is_empty()
    }

    /// Write the collection to the snapshot file.
    ///
    /// Writes to a sibling temp file first and renames it into place.
    async fn persist(&self, docs: &[TripDocument]) -> Result<(), StoreError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&SnapshotRef { trips: docs })?;
        let tmp = path.with_extension("tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, path).await?;

        debug!(path = %path.display(), count = docs.len(), "wrote trip snapshot");
        Ok(())
    }
}

impl TripRepository for DocumentStore {
    async fn save(&self, trip: &Trip) -> Result<Trip, StoreError> {
        let trip_id = trip
            .trip_id()
            .filter(|t| !t.trim().is_empty())
            .ok_or(StoreError::MissingTripId)?;

        let mut docs = self.docs.write().await;

        if docs.iter().any(|d| d.trip_id == trip_id) {
            return Err(StoreError::DuplicateTripId(trip_id.to_string()));
        }

        let doc = TripDocument::new(new_id(), trip_id.to_string(), trip, Utc::now());
        let saved = doc.to_trip();
        docs.push(doc);

        if let Err(e) = self.persist(&docs).await {
            docs.pop();
            return Err(e);
        }

        Ok(saved)
    }

    async fn find_all(&self) -> Result<Vec<Trip>, StoreError> {
        let docs = self.docs.read().await;
        Ok(docs.iter().map(TripDocument::to_trip).collect())
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError> {
        if !is_valid_id(id) {
            return Err(StoreError::InvalidId(id.to_string()));
        }

        let mut docs = self.docs.write().await;

        let Some(pos) = docs.iter().position(|d| d.id == id) else {
            return Ok(false);
        };

        let removed = docs.remove(pos);
        if let Err(e) = self.persist(&docs).await {
            docs.insert(pos, removed);
            return Err(e);
        }

        Ok(true)
    }
}

/// Generate a fresh store id: 32 lowercase hex characters.
fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Check that `id` has the shape of a store id.
fn is_valid_id(id: &str) -> bool {
    id.len() == 32 && id.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
