//! itinerary-planner core
//!
//! Domain-agnostic engine for day-by-day trip itineraries: recomputes
//! travel legs between consecutive stops, reorders a day's stops with a
//! greedy nearest-neighbor heuristic, and flags transit-heavy days.

pub mod traits;
pub mod haversine;
pub mod legs;
pub mod sequencer;
pub mod load;
pub mod planner;
