//! Corpus assembly from extracted (trip id, segment id) rows.
//!
//! The ingestion collaborator supplies rows grouped by trip id, ordered
//! within each trip by traversal time. That ordering is an external
//! precondition and is not verified here.

use crate::Trip;

/// Group consecutive rows sharing a trip id into [`Trip`] values.
///
/// Rows are expected pre-grouped by trip id; a trip id reappearing after an
/// intervening id starts a new trip rather than extending the earlier one,
/// mirroring a streaming group-by over the extraction result.
///
/// # Example
/// ```
/// use hotpaths::trips_from_rows;
///
/// let rows = vec![
///     ("1".to_string(), "a-b".to_string()),
///     ("1".to_string(), "b-c".to_string()),
///     ("2".to_string(), "c-d".to_string()),
/// ];
///
/// let trips = trips_from_rows(rows);
/// assert_eq!(trips.len(), 2);
/// assert_eq!(trips[0].segments, vec!["a-b", "b-c"]);
/// ```
pub fn trips_from_rows(rows: impl IntoIterator<Item = (String, String)>) -> Vec<Trip> {
    let mut trips: Vec<Trip> = Vec::new();

    for (trip_id, segment) in rows {
        match trips.last_mut() {
            Some(current) if current.trip_id == trip_id => current.segments.push(segment),
            _ => trips.push(Trip {
                trip_id,
                segments: vec![segment],
            }),
        }
    }

    trips
}
