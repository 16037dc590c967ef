//! Trip correction: repairing raw records with "teleporting" vehicles.
//!
//! Some extracted trips contain discontinuities where the recorded vehicle
//! jumps between unconnected segments. Correction partitions each raw
//! segment list into maximal chain-consistent contiguous runs, emitting one
//! sub-trip per run. All sub-trips keep the original trip id.

use log::warn;

use crate::error::OptionExt;
use crate::{Result, Trip};

/// Split a segment id into its (source, target) node tokens.
///
/// The split happens at the first `-`; both endpoints must be non-empty.
/// Returns `None` for a malformed id.
///
/// # Example
/// ```
/// use hotpaths::split_endpoints;
///
/// assert_eq!(split_endpoints("17-42"), Some(("17", "42")));
/// assert_eq!(split_endpoints("17"), None);
/// ```
pub fn split_endpoints(segment: &str) -> Option<(&str, &str)> {
    let (source, target) = segment.split_once('-')?;
    if source.is_empty() || target.is_empty() {
        return None;
    }
    Some((source, target))
}

/// Correct one raw trip, splitting it at every discontinuity.
///
/// The segment list is scanned backward from the end. A discontinuity exists
/// between two adjacent segments when the earlier segment's target node
/// differs from the later segment's source node; the already-scanned suffix
/// is then closed off as its own sub-trip and the scan continues on the
/// prefix. Sub-trips are returned in original traversal order, so an already
/// chain-consistent trip comes back as a single sub-trip equal to the input.
///
/// A malformed segment id rejects the whole trip record.
pub fn correct_trip(trip: &Trip) -> Result<Vec<Trip>> {
    if trip.segments.is_empty() {
        return Ok(Vec::new());
    }

    let segments = &trip.segments;
    let mut runs: Vec<Vec<String>> = Vec::new();
    let mut run_end = segments.len();
    // Source node of the earliest segment accepted into the current run.
    let mut run_source: Option<&str> = None;

    for i in (0..segments.len()).rev() {
        let (source, target) =
            split_endpoints(&segments[i]).ok_or_malformed(&trip.trip_id, &segments[i])?;

        if let Some(required) = run_source {
            if target != required {
                runs.push(segments[i + 1..run_end].to_vec());
                run_end = i + 1;
            }
        }
        run_source = Some(source);
    }
    runs.push(segments[..run_end].to_vec());
    runs.reverse();

    Ok(runs
        .into_iter()
        .map(|segments| Trip {
            trip_id: trip.trip_id.clone(),
            segments,
        })
        .collect())
}

/// Correct a whole batch of raw trips.
///
/// Trips with malformed segment ids are logged and skipped; the batch
/// continues. Returns the corrected corpus and the number of rejected
/// records.
pub fn correct_corpus(raw_trips: &[Trip]) -> (Vec<Trip>, usize) {
    let mut corrected = Vec::with_capacity(raw_trips.len());
    let mut rejected = 0;

    for trip in raw_trips {
        match correct_trip(trip) {
            Ok(sub_trips) => corrected.extend(sub_trips),
            Err(err) => {
                warn!("skipping trip record: {err}");
                rejected += 1;
            }
        }
    }

    (corrected, rejected)
}
