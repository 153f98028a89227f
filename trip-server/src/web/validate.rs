//! Request validation.
//!
//! Each request DTO has one function that either produces the typed value
//! the rest of the server works with, or lists every violation found.

use crate::domain::{IataCode, Trip};
use crate::search::{SearchParams, SortStrategy};

use super::dto::{CreateTripRequest, SearchTripsQuery};

/// Validate a search query.
pub fn validate_search(query: &SearchTripsQuery) -> Result<SearchParams, Vec<String>> {
    let mut violations = Vec::new();

    let origin = iata_field("origin", query.origin.as_deref(), &mut violations);
    let destination = iata_field("destination", query.destination.as_deref(), &mut violations);

    let sort_by = query
        .sort_by
        .as_deref()
        .and_then(|s| s.parse::<SortStrategy>().ok());
    if sort_by.is_none() {
        let allowed: Vec<&str> = SortStrategy::ALL.iter().map(SortStrategy::as_str).collect();
        violations.push(format!(
            "sortBy must be one of the following values: {}",
            allowed.join(", ")
        ));
    }

    match (origin, destination, sort_by) {
        (Some(origin), Some(destination), Some(sort_by)) if violations.is_empty() => Ok(
            SearchParams::new(origin.into_string(), destination.into_string(), sort_by),
        ),
        _ => Err(violations),
    }
}

/// Validate a create-trip body and build the unsaved trip.
pub fn validate_create(req: CreateTripRequest) -> Result<Trip, Vec<String>> {
    let mut violations = Vec::new();

    let trip_id = required_string("tripId", req.trip_id, &mut violations);
    if trip_id.as_deref().is_some_and(|t| t.trim().is_empty()) {
        violations.push("tripId should not be empty".to_string());
    }

    let origin = three_chars("origin", req.origin, &mut violations);
    let destination = three_chars("destination", req.destination, &mut violations);
    let cost = non_negative("cost", req.cost, &mut violations);
    let duration = non_negative("duration", req.duration, &mut violations);
    let kind = required_string("type", req.kind, &mut violations);
    let display_name = required_string("displayName", req.display_name, &mut violations);

    if !violations.is_empty() {
        return Err(violations);
    }

    match (trip_id, origin, destination, cost, duration, kind, display_name) {
        (
            Some(trip_id),
            Some(origin),
            Some(destination),
            Some(cost),
            Some(duration),
            Some(kind),
            Some(display_name),
        ) => Ok(
            Trip::new(origin, destination, cost, duration, kind, display_name)
                .with_trip_id(trip_id),
        ),
        _ => Err(violations),
    }
}

fn iata_field(name: &str, value: Option<&str>, violations: &mut Vec<String>) -> Option<IataCode> {
    let Some(value) = value else {
        violations.push(format!("{name} is required"));
        return None;
    };

    match IataCode::parse(value) {
        Ok(code) => Some(code),
        Err(_) => {
            violations.push(format!("{name} must be a 3-letter uppercase IATA code"));
            None
        }
    }
}

fn required_string(
    name: &str,
    value: Option<String>,
    violations: &mut Vec<String>,
) -> Option<String> {
    if value.is_none() {
        violations.push(format!("{name} is required"));
    }
    value
}

fn three_chars(name: &str, value: Option<String>, violations: &mut Vec<String>) -> Option<String> {
    let value = required_string(name, value, violations)?;
    if value.chars().count() != 3 {
        violations.push(format!("{name} must be exactly 3 characters"));
        return None;
    }
    Some(value)
}

fn non_negative(name: &str, value: Option<f64>, violations: &mut Vec<String>) -> Option<f64> {
    let Some(value) = value else {
        violations.push(format!("{name} is required"));
        return None;
    };

    if !value.is_finite() {
        violations.push(format!("{name} must be a number"));
        return None;
    }
    if value < 0.0 {
        violations.push(format!("{name} must not be less than 0"));
        return None;
    }
    Some(value)
}
