//! Core domain traits for the itinerary engine.
//!
//! These are intentionally minimal and domain-agnostic. Concrete apps should
//! implement them for their own data models.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unique identifier for engine entities.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// Day number marking a stop as unscheduled. Unscheduled stops are passed
/// through untouched: no legs, no sequencing, no load report.
pub const UNSCHEDULED_DAY: u32 = 0;

/// Geographic point in decimal degrees.
///
/// Range validation is the input boundary's job; the engine treats any
/// finite pair as a valid point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Transport mode for a travel leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Driving,
    Walking,
    Transit,
}

impl TransportMode {
    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::Driving => "driving",
            TransportMode::Walking => "walking",
            TransportMode::Transit => "transit",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mode label from the application boundary did not name a known
/// transport mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown transport mode: {0}")]
pub struct InvalidModeError(pub String);

impl FromStr for TransportMode {
    type Err = InvalidModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "driving" => Ok(TransportMode::Driving),
            "walking" => Ok(TransportMode::Walking),
            "transit" => Ok(TransportMode::Transit),
            other => Err(InvalidModeError(other.to_string())),
        }
    }
}

/// A directional travel segment from one stop to the next in its day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelLeg<I> {
    pub distance_km: f64,
    pub duration_minutes: u32,
    pub mode: TransportMode,
    pub target_stop_id: I,
}

/// A coordinate-pure leg estimate, before a target stop is attached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegEstimate {
    pub distance_km: f64,
    pub duration_minutes: u32,
    pub mode: TransportMode,
}

impl LegEstimate {
    /// Attach the stop this estimate travels to, producing a full leg.
    pub fn into_leg<I>(self, target_stop_id: I) -> TravelLeg<I> {
        TravelLeg {
            distance_km: self.distance_km,
            duration_minutes: self.duration_minutes,
            mode: self.mode,
            target_stop_id,
        }
    }
}

/// A stop is a single schedulable item (lodging, activity, meal, sight) on
/// a trip.
pub trait Stop {
    type Id: Id;

    fn id(&self) -> &Self::Id;

    /// Trip-relative day number. 0 means unscheduled.
    fn day(&self) -> u32;

    /// Position within the day when no re-sequencing is requested.
    fn sequence_index(&self) -> i32;

    /// Local time label (e.g. "09:00"), used only as an ordering tie-break.
    fn time_slot(&self) -> Option<&str>;

    /// Location coordinates. Stops without coordinates act as gaps: they
    /// contribute no legs and are never distance-compared.
    fn coordinates(&self) -> Option<Coordinate>;
}

/// Produces travel leg estimates between two coordinates.
///
/// The seam for swapping in a real road-network estimator. The engine ships
/// a haversine implementation; anything that talks to a routing backend
/// belongs outside this crate.
pub trait LegEstimator {
    fn estimate(&self, from: Coordinate, to: Coordinate, mode: TransportMode) -> LegEstimate;
}
