//! Day transit load validation.

use serde::{Deserialize, Serialize};

use crate::legs::PlannedStop;

/// Transit minutes past which a day is flagged as overloaded.
pub const DEFAULT_OVERLOAD_THRESHOLD_MINUTES: u32 = 240;

/// Summary of one day's cumulative transit burden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLoadReport {
    pub day: u32,
    pub total_transit_minutes: u32,
    pub overloaded: bool,
}

/// Sum a day's outgoing leg durations and flag the day when they exceed
/// the threshold. Missing legs count as zero; exactly the threshold is not
/// overloaded.
pub fn validate_load<I>(
    day: u32,
    stops: &[PlannedStop<I>],
    threshold_minutes: u32,
) -> DayLoadReport {
    let total_transit_minutes = stops
        .iter()
        .filter_map(|stop| stop.outgoing_leg.as_ref())
        .map(|leg| leg.duration_minutes)
        .sum();

    DayLoadReport {
        day,
        total_transit_minutes,
        overloaded: total_transit_minutes > threshold_minutes,
    }
}
