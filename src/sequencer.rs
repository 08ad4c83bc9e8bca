//! Greedy nearest-neighbor day sequencing.
//!
//! Orders one day's stops to cut obvious backtracking. This is a fast O(n²)
//! approximation, not an optimal tour: it can strand a distant stop for
//! last. Callers may assert the exact greedy ordering, so a better
//! heuristic (e.g. a 2-opt pass) belongs in a new entry point, not here.

use crate::haversine::haversine_km;
use crate::traits::{Coordinate, Stop};

/// Order a day's stops with a nearest-unvisited-next heuristic.
///
/// Returns a permutation of the input. The starting stop is the one with
/// the lexicographically smallest time slot, falling back to the first stop
/// in input order when no stop has one. From there, the nearest unplaced
/// stop by great-circle distance is appended, ties broken by input order.
/// Stops without coordinates are never distance-compared and degrade to
/// input-order placement.
pub fn sequence<'a, S: Stop>(stops: &[&'a S]) -> Vec<&'a S> {
    if stops.len() <= 1 {
        return stops.to_vec();
    }

    let start = stops
        .iter()
        .enumerate()
        .filter_map(|(i, stop)| stop.time_slot().map(|slot| (slot, i)))
        .min()
        .map(|(_, i)| i)
        .unwrap_or(0);

    let mut order = Vec::with_capacity(stops.len());
    order.push(start);

    let mut remaining: Vec<usize> = (0..stops.len()).filter(|&i| i != start).collect();
    let mut current = start;

    while !remaining.is_empty() {
        let next_pos = match stops[current].coordinates() {
            Some(here) => nearest_remaining(stops, &remaining, here),
            None => 0,
        };
        let next = remaining.remove(next_pos);
        order.push(next);
        current = next;
    }

    order.into_iter().map(|i| stops[i]).collect()
}

/// Position in `remaining` of the stop closest to `here`.
///
/// Only stops with coordinates compete; if none remain, falls back to the
/// first remaining stop in input order. Strict `<` keeps the earliest
/// candidate on ties.
fn nearest_remaining<S: Stop>(stops: &[&S], remaining: &[usize], here: Coordinate) -> usize {
    let mut best_pos = 0;
    let mut best_distance = f64::INFINITY;

    for (pos, &candidate) in remaining.iter().enumerate() {
        let Some(there) = stops[candidate].coordinates() else {
            continue;
        };
        let distance = haversine_km(here, there);
        if distance < best_distance {
            best_distance = distance;
            best_pos = pos;
        }
    }

    best_pos
}
