//! Day leg recalculation.
//!
//! Walks one day's stops in order and recomputes the outgoing leg of every
//! stop from coordinates alone. Leg data supplied on input is never trusted.

use serde::{Deserialize, Serialize};

use crate::traits::{LegEstimator, Stop, TransportMode, TravelLeg};

/// Engine output record: one stop with its recomputed outgoing leg.
///
/// The engine never creates, deletes, or renumbers stops in the caller's
/// store; it emits these records for the caller to write back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedStop<I> {
    pub stop_id: I,
    pub day: u32,
    pub sequence_index: i32,
    pub outgoing_leg: Option<TravelLeg<I>>,
}

/// Recompute outgoing legs for one day's stops, in the given order.
///
/// A leg is attached to each stop whose successor exists and where both
/// ends have coordinates. The last stop never has a leg, and a stop without
/// coordinates is a gap: no leg on either side, never bridged by searching
/// further ahead. Idempotent.
pub fn recalc_day<S, E>(stops: &[&S], estimator: &E, mode: TransportMode) -> Vec<PlannedStop<S::Id>>
where
    S: Stop,
    E: LegEstimator,
{
    let mut planned = Vec::with_capacity(stops.len());

    for (i, stop) in stops.iter().enumerate() {
        let outgoing_leg = match (stop.coordinates(), stops.get(i + 1)) {
            (Some(from), Some(next)) => next
                .coordinates()
                .map(|to| estimator.estimate(from, to, mode).into_leg(next.id().clone())),
            _ => None,
        };

        planned.push(PlannedStop {
            stop_id: stop.id().clone(),
            day: stop.day(),
            sequence_index: stop.sequence_index(),
            outgoing_leg,
        });
    }

    planned
}
