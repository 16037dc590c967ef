//! Single-segment frequency counting: the cardinality-1 frequent set.
//!
//! This is the seed for level-wise growth: every distinct segment whose total
//! occurrence count meets the support threshold becomes a length-1 frequent
//! path. One pass over the corpus, one filter at the end, so the cost is
//! linear in the total number of segment occurrences.

use log::debug;
use std::collections::HashMap;

use crate::{FrequentPath, FrequentSet, Trip};

/// Mine the cardinality-1 frequent set from a corrected trip corpus.
///
/// The threshold is an occurrence count, not a trip count: a segment
/// traversed twice within one trip counts twice. A segment is kept when its
/// count is `>=` `min_support` (note: levels >= 2 use a strict comparison
/// instead; see [`crate::MiningConfig::min_support`]).
///
/// An empty corpus yields an empty set.
pub fn mine_frequent_edges(trips: &[Trip], min_support: u64) -> FrequentSet {
    let mut counters: HashMap<&str, (u64, Vec<String>)> = HashMap::new();

    for (scanned, trip) in trips.iter().enumerate() {
        if scanned > 0 && scanned % 1000 == 0 {
            debug!("counting segments: {}/{} trips", scanned, trips.len());
        }
        for segment in &trip.segments {
            let entry = counters.entry(segment.as_str()).or_default();
            entry.0 += 1;
            entry.1.push(trip.trip_id.clone());
        }
    }

    let paths = counters
        .into_iter()
        .filter(|(_, (count, _))| *count >= min_support)
        .map(|(segment, (support, trip_ids))| FrequentPath {
            segments: vec![segment.to_string()],
            support,
            trip_ids,
        })
        .collect();

    FrequentSet::freeze(1, paths)
}
