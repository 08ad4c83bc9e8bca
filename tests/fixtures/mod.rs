//! Test fixtures for itinerary-planner.
//!
//! Provides realistic test data: real Paris-area and French intercity
//! locations (from OpenStreetMap).

pub mod paris_locations;

pub use paris_locations::*;
