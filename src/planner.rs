//! Trip-level planning.
//!
//! Fans leg recalculation, optional re-sequencing, and load validation out
//! over every day of a trip, then reassembles a flat, order-preserving
//! collection. Days are independent, so they are planned in parallel; the
//! merge is pure reassembly.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;
use tracing::debug;

use crate::legs::{PlannedStop, recalc_day};
use crate::load::{DEFAULT_OVERLOAD_THRESHOLD_MINUTES, DayLoadReport, validate_load};
use crate::sequencer::sequence;
use crate::traits::{LegEstimator, Stop, TransportMode, UNSCHEDULED_DAY};

#[derive(Debug, Clone)]
pub struct PlanOptions {
    /// Transit minutes past which a day is flagged as overloaded.
    pub overload_threshold_minutes: u32,
    /// Mode used for every recomputed leg.
    pub default_mode: TransportMode,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            overload_threshold_minutes: DEFAULT_OVERLOAD_THRESHOLD_MINUTES,
            default_mode: TransportMode::Driving,
        }
    }
}

/// Result of planning one trip.
#[derive(Debug, Clone)]
pub struct TripPlan<I> {
    /// Planned stops in the caller's flat ordering. A reordered day's stops
    /// appear as a block, in their new order, at the position of that day's
    /// first stop in the input.
    pub stops: Vec<PlannedStop<I>>,
    /// One report per scheduled day, ascending by day number.
    pub day_reports: Vec<DayLoadReport>,
}

/// Recompute every travel leg of a trip.
///
/// Stops are grouped by day. Days named in `reorder_days` are re-sequenced
/// with the nearest-neighbor heuristic and renumbered from 1; all other
/// scheduled days keep their order (`sequence_index`, then `time_slot`).
/// Unscheduled stops (day 0) pass through untouched with no legs. Total
/// over any input; an empty trip yields an empty plan.
pub fn plan_trip<S, E>(
    stops: &[S],
    reorder_days: &HashSet<u32>,
    estimator: &E,
    options: PlanOptions,
) -> TripPlan<S::Id>
where
    S: Stop + Sync,
    S::Id: Send + Sync,
    E: LegEstimator + Sync,
{
    let mut day_order: Vec<u32> = Vec::new();
    let mut groups: HashMap<u32, Vec<&S>> = HashMap::new();
    for stop in stops {
        let day = stop.day();
        groups
            .entry(day)
            .or_insert_with(|| {
                day_order.push(day);
                Vec::new()
            })
            .push(stop);
    }

    let scheduled_days: Vec<u32> = day_order
        .iter()
        .copied()
        .filter(|&day| day != UNSCHEDULED_DAY)
        .collect();

    debug!(
        stops = stops.len(),
        days = scheduled_days.len(),
        reordering = reorder_days.len(),
        "planning trip"
    );

    let planned: HashMap<u32, (Vec<PlannedStop<S::Id>>, DayLoadReport)> = scheduled_days
        .par_iter()
        .map(|&day| {
            let block = plan_day(
                day,
                &groups[&day],
                reorder_days.contains(&day),
                estimator,
                &options,
            );
            (day, block)
        })
        .collect();

    let mut day_reports = Vec::with_capacity(planned.len());
    let mut reordered_blocks: HashMap<u32, Vec<PlannedStop<S::Id>>> = HashMap::new();
    let mut by_id: HashMap<S::Id, PlannedStop<S::Id>> = HashMap::new();
    for (day, (block, report)) in planned {
        if report.overloaded {
            debug!(
                day = report.day,
                minutes = report.total_transit_minutes,
                "day exceeds transit budget"
            );
        }
        day_reports.push(report);

        if reorder_days.contains(&day) {
            reordered_blocks.insert(day, block);
        } else {
            for record in block {
                by_id.insert(record.stop_id.clone(), record);
            }
        }
    }
    day_reports.sort_by_key(|report| report.day);

    // Reassemble in the caller's flat order. Reordered days are emitted as
    // a block at the position of their first original stop.
    let mut flat = Vec::with_capacity(stops.len());
    for stop in stops {
        let day = stop.day();
        if day == UNSCHEDULED_DAY {
            flat.push(PlannedStop {
                stop_id: stop.id().clone(),
                day,
                sequence_index: stop.sequence_index(),
                outgoing_leg: None,
            });
        } else if reorder_days.contains(&day) {
            if let Some(block) = reordered_blocks.remove(&day) {
                flat.extend(block);
            }
        } else if let Some(record) = by_id.remove(stop.id()) {
            flat.push(record);
        }
    }

    TripPlan {
        stops: flat,
        day_reports,
    }
}

fn plan_day<S, E>(
    day: u32,
    day_stops: &[&S],
    reorder: bool,
    estimator: &E,
    options: &PlanOptions,
) -> (Vec<PlannedStop<S::Id>>, DayLoadReport)
where
    S: Stop,
    E: LegEstimator,
{
    let planned = if reorder {
        let ordered = sequence(day_stops);
        let mut planned = recalc_day(&ordered, estimator, options.default_mode);
        for (position, record) in planned.iter_mut().enumerate() {
            record.sequence_index = position as i32 + 1;
        }
        planned
    } else {
        let mut ordered = day_stops.to_vec();
        ordered.sort_by(|a, b| {
            a.sequence_index()
                .cmp(&b.sequence_index())
                .then_with(|| a.time_slot().cmp(&b.time_slot()))
        });
        recalc_day(&ordered, estimator, options.default_mode)
    };

    let report = validate_load(day, &planned, options.overload_threshold_minutes);
    (planned, report)
}
