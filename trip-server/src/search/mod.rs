//! Trip search pipeline.
//!
//! Validates the requested endpoints, fetches candidates from a
//! [`TripSource`], checks the shape of what came back, and orders the
//! trips by the requested [`SortStrategy`].

mod service;
mod sort;
mod source;


pub use service::{SearchError, SearchParams, SearchTrips};
pub use sort::{SortStrategy, UnknownStrategy, sort_trips};
pub use source::{SourceResponse, TripSource};
