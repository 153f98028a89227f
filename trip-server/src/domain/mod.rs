//! Domain types for the trip server.

mod iata;
mod trip;

pub use iata::{IataCode, InvalidIata};
pub use trip::Trip;
