//! # Hot Paths
//!
//! Frequent travel-sequence mining for vehicle trip records.
//!
//! This library provides:
//! - Trip correction (repairing "teleporting" vehicles by splitting raw
//!   records into chain-consistent sub-trips)
//! - Single-segment frequency counting (the cardinality-1 seed)
//! - Level-wise Apriori growth of frequent paths with downward-closure
//!   pruning
//! - Durable per-cardinality result output
//!
//! ## Quick Start
//!
//! ```rust
//! use hotpaths::{MiningConfig, MiningSession, Trip, writer::MemorySink};
//!
//! let trips = vec![
//!     Trip::new("1", vec!["a-b", "b-c"]),
//!     Trip::new("2", vec!["a-b", "b-c"]),
//! ];
//!
//! let config = MiningConfig {
//!     min_support: 1,
//!     max_cardinality: 2,
//! };
//!
//! let mut session = MiningSession::from_raw_trips(trips);
//! let mut sink = MemorySink::new();
//! let stats = session.run(&config, &mut sink).unwrap();
//!
//! assert_eq!(stats.level_sizes, vec![2, 1]);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// Unified error handling
pub mod error;
pub use error::{MiningError, OptionExt, Result};

// Row-to-trip corpus assembly
pub mod corpus;
pub use corpus::trips_from_rows;

// Trip correction (teleport repair)
pub mod correction;
pub use correction::{correct_corpus, correct_trip, split_endpoints};

// Cardinality-1 frequency counting
pub mod frequent;
pub use frequent::mine_frequent_edges;

// Level-wise candidate growth (k >= 2)
pub mod growth;
pub use growth::grow_level;

// Mining session tying the stages together
pub mod session;
pub use session::MiningSession;

// Per-cardinality result output
pub mod writer;
pub use writer::{FileSink, LevelSink, MemorySink};

// Compact segment-id aliasing (debugging aid)
pub mod alias;
pub use alias::AliasTable;

// ============================================================================
// Core Types
// ============================================================================

/// One recorded vehicle traversal: a trip id and the ordered segment ids it
/// visited.
///
/// Segment ids are opaque tokens of the form `"<source>-<target>"`. A
/// *corrected* trip is chain-consistent: each segment's target node equals
/// the next segment's source node. Raw trips may violate this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    /// Identifier of the recorded traversal. Sub-trips produced by
    /// correction share the original id.
    pub trip_id: String,
    /// Segment ids in temporal traversal order.
    pub segments: Vec<String>,
}

impl Trip {
    /// Create a trip from a trip id and segment ids.
    pub fn new(trip_id: impl Into<String>, segments: Vec<impl Into<String>>) -> Self {
        Self {
            trip_id: trip_id.into(),
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of segments in the trip.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the trip has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Check chain consistency: every segment's target node equals the next
    /// segment's source node. Trips with fewer than two segments are always
    /// consistent. Returns an error on a malformed segment id.
    pub fn is_chain_consistent(&self) -> Result<bool> {
        for pair in self.segments.windows(2) {
            let (_, target) = split_endpoints(&pair[0]).ok_or_malformed(&self.trip_id, &pair[0])?;
            let (source, _) = split_endpoints(&pair[1]).ok_or_malformed(&self.trip_id, &pair[1])?;
            if target != source {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// A frequent path: an ordered segment sequence together with its support
/// count and the trips it was observed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequentPath {
    /// The segment ids making up the path, in traversal order.
    pub segments: Vec<String>,
    /// Total occurrence count across the corpus. Repeated occurrence within
    /// a single trip counts each time.
    pub support: u64,
    /// Contributing trip ids in discovery order. A trip id repeats when the
    /// path recurs within that trip.
    pub trip_ids: Vec<String>,
}

/// All frequent paths of one cardinality, frozen after the level completes.
///
/// The set carries a membership index over its segment sequences so the next
/// level's downward-closure probes are O(1). The index can be released once
/// the set is no longer the previous level (the paths themselves are kept).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequentSet {
    /// Path length of every member.
    pub cardinality: usize,
    /// Surviving paths, sorted by segment sequence.
    pub paths: Vec<FrequentPath>,
    #[serde(skip)]
    index: Option<HashSet<Vec<String>>>,
}

impl FrequentSet {
    /// Freeze a set of frequent paths at the given cardinality.
    ///
    /// Paths are sorted by segment sequence so output is deterministic, and
    /// a membership index is built for downward-closure probes.
    pub fn freeze(cardinality: usize, mut paths: Vec<FrequentPath>) -> Self {
        paths.sort_by(|a, b| a.segments.cmp(&b.segments));
        let index = paths.iter().map(|p| p.segments.clone()).collect();
        Self {
            cardinality,
            paths,
            index: Some(index),
        }
    }

    /// Whether the given segment window is a member of this set.
    ///
    /// Returns `false` if the membership index has been released.
    pub fn contains(&self, window: &[String]) -> bool {
        self.index
            .as_ref()
            .is_some_and(|index| index.contains(window))
    }

    /// Number of frequent paths in the set.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the set has no frequent paths.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Drop the membership index. Only the previous level is probed during
    /// growth, so older sets do not need theirs.
    pub fn release_index(&mut self) {
        self.index = None;
    }
}

/// Configuration for a mining run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiningConfig {
    /// Minimum traversal count for a path to be considered frequent.
    ///
    /// At cardinality 1 a segment is kept when its count is `>=` this value;
    /// at cardinality >= 2 a path is kept only when its count is strictly
    /// `>` this value. The asymmetry is preserved from the observed system
    /// pending a stakeholder decision; see DESIGN.md.
    ///
    /// Must be >= 1.
    pub min_support: u64,

    /// Highest cardinality to mine, inclusive. Growth stops earlier when a
    /// level produces no frequent paths.
    ///
    /// Must be >= 2.
    pub max_cardinality: usize,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: 2,
            max_cardinality: 5,
        }
    }
}

impl MiningConfig {
    /// Validate the configured bounds.
    pub fn validate(&self) -> Result<()> {
        if self.min_support < 1 {
            return Err(MiningError::InvalidConfig {
                message: "min_support must be >= 1".to_string(),
            });
        }
        if self.max_cardinality < 2 {
            return Err(MiningError::InvalidConfig {
                message: "max_cardinality must be >= 2".to_string(),
            });
        }
        Ok(())
    }
}

/// Summary of a completed mining run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiningStats {
    /// Corrected trips in the corpus (after teleport splitting).
    pub trip_count: usize,
    /// Raw trip records rejected for malformed segment ids.
    pub rejected_trips: usize,
    /// Frequent-path count per cardinality, starting at cardinality 1.
    pub level_sizes: Vec<usize>,
    /// Levels handed to the sink (cardinalities 2..).
    pub levels_written: usize,
}
