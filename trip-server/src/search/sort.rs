//! Trip ordering strategies.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::Trip;

/// How to order search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortStrategy {
    /// Shortest duration first.
    Fastest,
    /// Lowest cost first.
    Cheapest,
}

impl SortStrategy {
    /// All strategies, in the order they are listed to callers.
    pub const ALL: [SortStrategy; 2] = [SortStrategy::Fastest, SortStrategy::Cheapest];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortStrategy::Fastest => "fastest",
            SortStrategy::Cheapest => "cheapest",
        }
    }

    /// The value a trip is ordered by under this strategy.
    fn key(&self, trip: &Trip) -> f64 {
        match self {
            SortStrategy::Fastest => trip.duration(),
            SortStrategy::Cheapest => trip.cost(),
        }
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort strategy: {0}")]
pub struct UnknownStrategy(pub String);

impl FromStr for SortStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort trips by the given strategy.
///
/// Returns a new vector in ascending key order; the input is left
/// untouched. The sort is stable, so trips with equal keys keep their
/// input order.
pub fn sort_trips(trips: &[Trip], strategy: SortStrategy) -> Vec<Trip> {
    let mut sorted = trips.to_vec();
    sorted.sort_by(|a, b| strategy.key(a).total_cmp(&strategy.key(b)));
    sorted
}
