//! Trip persistence.
//!
//! Storage ids and business ids are kept apart: the store generates `_id`
//! for every document and indexes the caller-supplied `tripId` as unique.

mod document;
mod error;
mod repository;

pub use document::DocumentStore;
pub use error::StoreError;
pub use repository::TripRepository;
