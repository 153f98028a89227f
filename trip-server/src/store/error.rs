//! Trip store error types.

/// Errors from the trip document store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The trip has no business identifier to store it under
    #[error("tripId is required")]
    MissingTripId,

    /// Another stored trip already uses this business identifier
    #[error("duplicate key error: tripId {0:?} already exists")]
    DuplicateTripId(String),

    /// The identifier is not a well-formed store id
    #[error("invalid trip id {0:?}: expected 32 lowercase hex characters")]
    InvalidId(String),

    /// Reading or writing the snapshot file failed
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot file could not be (de)serialized
    #[error("store JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(StoreError::MissingTripId.to_string(), "tripId is required");

        let err = StoreError::DuplicateTripId("trip-123".into());
        assert_eq!(
            err.to_string(),
            "duplicate key error: tripId \"trip-123\" already exists"
        );

        let err = StoreError::InvalidId("invalid-id".into());
        assert!(err.to_string().starts_with("invalid trip id \"invalid-id\""));
    }
}
