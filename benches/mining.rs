//! Benchmarks for trip correction and level-wise mining.
//!
//! Run with: `cargo bench --bench mining`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hotpaths::{correct_corpus, MemorySink, MiningConfig, MiningSession, Trip};

/// Random-walk trips over a small node grid. Consecutive segments chain by
/// construction; an occasional jump injects a teleport to exercise the
/// corrector.
fn synthetic_trips(trip_count: usize, trip_len: usize, nodes: u32, seed: u64) -> Vec<Trip> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut trips = Vec::with_capacity(trip_count);

    for trip_id in 0..trip_count {
        let mut segments = Vec::with_capacity(trip_len);
        let mut at = rng.gen_range(0..nodes);
        for _ in 0..trip_len {
            if rng.gen_ratio(1, 50) {
                at = rng.gen_range(0..nodes); // teleport
            }
            let next = (at + rng.gen_range(1..4)) % nodes;
            segments.push(format!("{at}-{next}"));
            at = next;
        }
        trips.push(Trip::new(trip_id.to_string(), segments));
    }

    trips
}

fn bench_correction(c: &mut Criterion) {
    let mut group = c.benchmark_group("correction");

    for &trip_count in &[100usize, 1000] {
        let trips = synthetic_trips(trip_count, 20, 50, 7);
        group.bench_with_input(
            BenchmarkId::new("correct_corpus", trip_count),
            &trips,
            |b, trips| {
                b.iter(|| correct_corpus(trips));
            },
        );
    }

    group.finish();
}

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");
    group.sample_size(20);

    for &trip_count in &[100usize, 500] {
        let trips = synthetic_trips(trip_count, 20, 50, 7);
        let config = MiningConfig {
            min_support: 2,
            max_cardinality: 4,
        };

        group.bench_with_input(
            BenchmarkId::new("session_run", trip_count),
            &trips,
            |b, trips| {
                b.iter(|| {
                    let mut session = MiningSession::from_raw_trips(trips.clone());
                    let mut sink = MemorySink::new();
                    session.run(&config, &mut sink).unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_correction, bench_full_run);
criterion_main!(benches);
