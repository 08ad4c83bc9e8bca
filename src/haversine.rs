//! Haversine leg estimator (straight-line approximation).
//!
//! Uses great-circle distance with a fixed detour multiplier to estimate
//! road distance and travel time. Ignores the actual road network; always
//! available and deterministic.

use crate::traits::{Coordinate, LegEstimate, LegEstimator, TransportMode};

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Multiplier from straight-line to road distance.
const DEFAULT_DETOUR_FACTOR: f64 = 1.3;

const DEFAULT_WALKING_KMH: f64 = 5.0;
const DEFAULT_TRANSIT_KMH: f64 = 30.0;
const DEFAULT_DRIVING_KMH: f64 = 50.0;

/// Great-circle distance between two points in kilometers.
///
/// Symmetric, and zero for identical points.
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lng = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Haversine-based leg estimator.
///
/// Estimates travel time from straight-line distance, a detour factor, and
/// an assumed average speed per mode. All knobs are overridable per
/// instance; the defaults are the engine's policy constants.
#[derive(Debug, Clone)]
pub struct HaversineEstimator {
    /// Multiplier applied to straight-line distance to approximate real
    /// routing overhead.
    pub detour_factor: f64,
    pub walking_speed_kmh: f64,
    pub transit_speed_kmh: f64,
    pub driving_speed_kmh: f64,
}

impl Default for HaversineEstimator {
    fn default() -> Self {
        Self {
            detour_factor: DEFAULT_DETOUR_FACTOR,
            walking_speed_kmh: DEFAULT_WALKING_KMH,
            transit_speed_kmh: DEFAULT_TRANSIT_KMH,
            driving_speed_kmh: DEFAULT_DRIVING_KMH,
        }
    }
}

impl HaversineEstimator {
    fn speed_kmh(&self, mode: TransportMode) -> f64 {
        match mode {
            TransportMode::Driving => self.driving_speed_kmh,
            TransportMode::Walking => self.walking_speed_kmh,
            TransportMode::Transit => self.transit_speed_kmh,
        }
    }
}

impl LegEstimator for HaversineEstimator {
    fn estimate(&self, from: Coordinate, to: Coordinate, mode: TransportMode) -> LegEstimate {
        let straight_km = haversine_km(from, to);
        let road_km = straight_km * self.detour_factor;
        // Duration comes from the unrounded road distance; the reported
        // distance is the straight-line figure at one-decimal precision.
        let duration_minutes = (road_km / self.speed_kmh(mode) * 60.0).ceil() as u32;

        LegEstimate {
            distance_km: (straight_km * 10.0).round() / 10.0,
            duration_minutes,
            mode,
        }
    }
}
