//! Trip planner server.
//!
//! Searches an external trips provider for journeys between two airports,
//! orders them by cost or duration, and keeps a catalog of saved trips.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod provider;
pub mod search;
pub mod store;
pub mod web;
