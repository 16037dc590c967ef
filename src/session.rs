//! Mining session: owns the trip corpus and the per-cardinality results.
//!
//! The session is the single mutable home for mining state. It runs the
//! stages in order — correction, cardinality-1 counting, level-wise growth —
//! and hands each completed level (cardinality >= 2) to the sink before the
//! next level starts, so a run interrupted between levels keeps everything
//! already written.

use log::{debug, info};

use crate::growth::prune_short_trips;
use crate::writer::LevelSink;
use crate::{
    correct_corpus, grow_level, mine_frequent_edges, FrequentSet, MiningConfig, MiningStats,
    Result, Trip,
};

/// A single mining run over one trip corpus.
///
/// Built once from raw or pre-corrected trips; afterwards the corpus is
/// read-only. Frequent sets accumulate in cardinality order and are never
/// mutated after their level completes (only the membership index of sets
/// older than the previous level is released, since growth probes nothing
/// but the previous level).
pub struct MiningSession {
    trips: Vec<Trip>,
    levels: Vec<FrequentSet>,
    rejected_trips: usize,
}

impl MiningSession {
    /// Create a session from raw extracted trips, applying teleport
    /// correction. Records with malformed segment ids are logged and
    /// skipped.
    pub fn from_raw_trips(raw_trips: Vec<Trip>) -> Self {
        let (trips, rejected_trips) = correct_corpus(&raw_trips);
        if rejected_trips > 0 {
            info!("rejected {rejected_trips} malformed trip records");
        }
        info!(
            "corpus: {} corrected trips from {} raw records",
            trips.len(),
            raw_trips.len()
        );
        Self {
            trips,
            levels: Vec::new(),
            rejected_trips,
        }
    }

    /// Create a session from trips that are already chain-consistent.
    pub fn from_corrected_trips(trips: Vec<Trip>) -> Self {
        Self {
            trips,
            levels: Vec::new(),
            rejected_trips: 0,
        }
    }

    /// The corrected trip corpus.
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Frequent sets produced so far, in cardinality order starting at 1.
    pub fn levels(&self) -> &[FrequentSet] {
        &self.levels
    }

    /// Run the full mining pipeline.
    ///
    /// Mines the cardinality-1 seed, then grows levels 2..=`max_cardinality`,
    /// writing each grown level to `sink` as soon as it is complete. Stops
    /// early (successfully) once a level comes up empty. A sink error aborts
    /// the run; levels already written remain valid.
    pub fn run(&mut self, config: &MiningConfig, sink: &mut dyn LevelSink) -> Result<MiningStats> {
        config.validate()?;
        self.levels.clear();

        info!(
            "mining with min_support={} max_cardinality={}",
            config.min_support, config.max_cardinality
        );

        let seed = mine_frequent_edges(&self.trips, config.min_support);
        info!("cardinality 1: {} frequent segments", seed.len());
        self.levels.push(seed);

        let mut levels_written = 0;
        let mut working: Vec<&Trip> = self.trips.iter().collect();

        for cardinality in 2..=config.max_cardinality {
            let prev = &self.levels[cardinality - 2];
            if prev.is_empty() {
                info!(
                    "cardinality {}: previous level empty, stopping early",
                    cardinality
                );
                break;
            }

            working = prune_short_trips(&working, cardinality);
            debug!(
                "cardinality {}: {} trips remain after length pruning",
                cardinality,
                working.len()
            );

            let level = grow_level(&working, prev, config.min_support);
            info!("cardinality {}: {} frequent paths", cardinality, level.len());

            sink.write_level(&level)?;
            levels_written += 1;
            self.levels.push(level);

            // Growth only ever probes the previous level.
            if cardinality >= 3 {
                self.levels[cardinality - 3].release_index();
            }
        }

        Ok(MiningStats {
            trip_count: self.trips.len(),
            rejected_trips: self.rejected_trips,
            level_sizes: self.levels.iter().map(FrequentSet::len).collect(),
            levels_written,
        })
    }
}
