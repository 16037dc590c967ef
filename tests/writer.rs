//! Tests for the writer module

use std::fs;

use hotpaths::writer::format_path;
use hotpaths::{FileSink, FrequentPath, FrequentSet, LevelSink, MemorySink, Trip};
use hotpaths::{MiningConfig, MiningSession};

fn sample_level() -> FrequentSet {
    FrequentSet::freeze(
        2,
        vec![
            FrequentPath {
                segments: vec!["a-b".to_string(), "b-c".to_string()],
                support: 2,
                trip_ids: vec!["1".to_string(), "2".to_string()],
            },
            FrequentPath {
                segments: vec!["b-c".to_string(), "c-d".to_string()],
                support: 3,
                trip_ids: vec!["1".to_string(), "1".to_string(), "2".to_string()],
            },
        ],
    )
}

#[test]
fn test_line_format() {
    let path = FrequentPath {
        segments: vec!["a-b".to_string(), "b-c".to_string()],
        support: 2,
        trip_ids: vec!["1".to_string(), "2".to_string()],
    };

    assert_eq!(format_path(&path), "a-b, b-c;2;{1, 2};");
}

#[test]
fn test_file_sink_writes_level_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = FileSink::new(dir.path()).unwrap();

    sink.write_level(&sample_level()).unwrap();

    let content = fs::read_to_string(dir.path().join("frequent_paths_2")).unwrap();
    assert_eq!(content, "a-b, b-c;2;{1, 2};\nb-c, c-d;3;{1, 1, 2};\n");
}

#[test]
fn test_new_run_overwrites_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = FileSink::new(dir.path()).unwrap();

    sink.write_level(&sample_level()).unwrap();

    let rerun = FrequentSet::freeze(
        2,
        vec![FrequentPath {
            segments: vec!["x-y".to_string(), "y-z".to_string()],
            support: 4,
            trip_ids: vec!["5".to_string()],
        }],
    );
    sink.write_level(&rerun).unwrap();

    let content = fs::read_to_string(dir.path().join("frequent_paths_2")).unwrap();
    assert_eq!(content, "x-y, y-z;4;{5};\n");
}

#[test]
fn test_empty_level_truncates_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut sink = FileSink::new(dir.path()).unwrap();

    sink.write_level(&sample_level()).unwrap();
    sink.write_level(&FrequentSet::freeze(2, Vec::new())).unwrap();

    let content = fs::read_to_string(dir.path().join("frequent_paths_2")).unwrap();
    assert!(content.is_empty());
}

#[test]
fn test_each_level_gets_its_own_file() {
    let dir = tempfile::tempdir().unwrap();

    let trips = vec![
        Trip::new("1", vec!["a-b", "b-c", "c-d"]),
        Trip::new("2", vec!["a-b", "b-c", "c-d"]),
    ];
    let config = MiningConfig {
        min_support: 1,
        max_cardinality: 3,
    };

    let mut session = MiningSession::from_raw_trips(trips);
    let mut sink = FileSink::new(dir.path()).unwrap();
    session.run(&config, &mut sink).unwrap();

    assert!(dir.path().join("frequent_paths_2").exists());
    assert!(dir.path().join("frequent_paths_3").exists());
    // Cardinality 1 is an in-memory seed only
    assert!(!dir.path().join("frequent_paths_1").exists());

    let level3 = fs::read_to_string(dir.path().join("frequent_paths_3")).unwrap();
    assert_eq!(level3, "a-b, b-c, c-d;2;{1, 2};\n");
}

#[test]
fn test_memory_sink_captures_levels() {
    let mut sink = MemorySink::new();

    sink.write_level(&sample_level()).unwrap();

    assert_eq!(sink.levels.len(), 1);
    assert_eq!(sink.levels[0].cardinality, 2);
    assert_eq!(sink.levels[0].len(), 2);
}

#[test]
fn test_file_sink_creates_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("results").join("run1");

    let mut sink = FileSink::new(&nested).unwrap();
    sink.write_level(&sample_level()).unwrap();

    assert!(nested.join("frequent_paths_2").exists());
}
