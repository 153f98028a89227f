//! Web layer for the trip planner.
//!
//! Provides HTTP endpoints for searching provider trips and managing saved
//! trips.

mod dto;
mod routes;
mod state;
mod validate;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
pub use validate::{validate_create, validate_search};
