//! Level-wise candidate growth with downward-closure pruning.
//!
//! At level k every trip is scanned with a sliding window: the length-k
//! window at offset `i` is a candidate only if both of its length-(k-1)
//! sub-windows (offsets `i` and `i+1`, overlapping in k-2 segments) are
//! members of the previous frequent set. A frequent k-path can only be built
//! from frequent (k-1)-paths, so everything else is skipped without
//! counting.

use std::collections::HashMap;

use crate::{FrequentPath, FrequentSet, Trip};

/// Trips still long enough to matter at the given cardinality.
///
/// A trip shorter than k has no length-k window and can never regain one, so
/// it is excluded from this and every later level. A fresh collection is
/// produced; the input is never mutated mid-scan.
pub fn prune_short_trips<'a>(trips: &[&'a Trip], cardinality: usize) -> Vec<&'a Trip> {
    trips
        .iter()
        .copied()
        .filter(|trip| trip.len() >= cardinality)
        .collect()
}

/// Grow the next frequent set from the previous level.
///
/// `trips` is normally pre-pruned to length >= `prev.cardinality + 1` (see
/// [`prune_short_trips`]); a shorter trip has no window of that length and
/// contributes nothing. Candidates are counted per occurrence, and each
/// occurrence records its trip id, so a path recurring within one trip
/// contributes multiple counts and a repeated id. Survivors must exceed
/// `min_support` strictly (`>`), unlike the `>=` used at cardinality 1.
pub fn grow_level(trips: &[&Trip], prev: &FrequentSet, min_support: u64) -> FrequentSet {
    let cardinality = prev.cardinality + 1;
    let mut candidates: HashMap<&[String], (u64, Vec<String>)> = HashMap::new();

    for trip in trips {
        let segments = &trip.segments;
        if segments.len() < cardinality {
            continue;
        }

        for i in 0..=(segments.len() - cardinality) {
            let a = &segments[i..i + cardinality - 1];
            let b = &segments[i + 1..i + cardinality];
            if !prev.contains(a) || !prev.contains(b) {
                continue;
            }

            let candidate = &segments[i..i + cardinality];
            let entry = candidates.entry(candidate).or_default();
            entry.0 += 1;
            entry.1.push(trip.trip_id.clone());
        }
    }

    let paths = candidates
        .into_iter()
        .filter(|(_, (count, _))| *count > min_support)
        .map(|(segments, (support, trip_ids))| FrequentPath {
            segments: segments.to_vec(),
            support,
            trip_ids,
        })
        .collect();

    FrequentSet::freeze(cardinality, paths)
}
