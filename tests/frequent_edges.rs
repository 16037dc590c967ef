//! Tests for the frequent module (cardinality-1 mining)

use hotpaths::{mine_frequent_edges, Trip};

#[test]
fn test_counts_across_trips() {
    let trips = vec![
        Trip::new("1", vec!["a-b", "b-c"]),
        Trip::new("2", vec!["a-b", "b-c"]),
    ];

    let set = mine_frequent_edges(&trips, 1);

    assert_eq!(set.cardinality, 1);
    assert_eq!(set.len(), 2);
    for path in &set.paths {
        assert_eq!(path.support, 2);
        assert_eq!(path.trip_ids, vec!["1", "2"]);
    }
}

#[test]
fn test_within_trip_repeats_count_each_time() {
    // a-b occurs twice within the one trip
    let trips = vec![Trip::new("1", vec!["a-b", "b-a", "a-b"])];

    let set = mine_frequent_edges(&trips, 2);

    assert_eq!(set.len(), 1);
    assert_eq!(set.paths[0].segments, vec!["a-b"]);
    assert_eq!(set.paths[0].support, 2);
    assert_eq!(set.paths[0].trip_ids, vec!["1", "1"]);
}

#[test]
fn test_threshold_is_inclusive_at_level_one() {
    let trips = vec![
        Trip::new("1", vec!["a-b"]),
        Trip::new("2", vec!["a-b"]),
        Trip::new("3", vec!["b-c"]),
    ];

    // Support exactly equal to the threshold is kept at cardinality 1
    let set = mine_frequent_edges(&trips, 2);

    assert_eq!(set.len(), 1);
    assert_eq!(set.paths[0].segments, vec!["a-b"]);
}

#[test]
fn test_empty_corpus_yields_empty_set() {
    let set = mine_frequent_edges(&[], 1);

    assert_eq!(set.cardinality, 1);
    assert!(set.is_empty());
}

#[test]
fn test_support_conservation() {
    let trips = vec![
        Trip::new("1", vec!["a-b", "b-c", "c-d"]),
        Trip::new("2", vec!["a-b", "b-a", "a-b"]),
        Trip::new("3", vec!["x-y"]),
    ];
    let total_occurrences: u64 = trips.iter().map(|t| t.len() as u64).sum();

    // Threshold 1 keeps every distinct segment
    let set = mine_frequent_edges(&trips, 1);
    let counted: u64 = set.paths.iter().map(|p| p.support).sum();

    assert_eq!(counted, total_occurrences);
}

#[test]
fn test_paths_sorted_for_determinism() {
    let trips = vec![Trip::new("1", vec!["c-d", "a-b", "b-c"])];

    let set = mine_frequent_edges(&trips, 1);

    let segments: Vec<&str> = set.paths.iter().map(|p| p.segments[0].as_str()).collect();
    assert_eq!(segments, vec!["a-b", "b-c", "c-d"]);
}
