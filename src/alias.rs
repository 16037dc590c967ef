//! Compact segment-id aliasing.
//!
//! Long `"<source>-<target>"` tokens make debug output unwieldy. The alias
//! table maps every distinct segment id in a corpus to a small numeric token
//! and back. Aliasing is a pure lookup with no effect on mining semantics:
//! the table is built once and never mutated afterwards.

use std::collections::HashMap;

use crate::Trip;

/// Bidirectional mapping between segment ids and compact numeric tokens.
///
/// Tokens are assigned in first-seen corpus order starting at 0.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    compact: HashMap<String, u64>,
    expanded: Vec<String>,
}

impl AliasTable {
    /// Build the table from a trip corpus.
    pub fn from_trips(trips: &[Trip]) -> Self {
        let mut table = Self::default();
        for trip in trips {
            for segment in &trip.segments {
                if !table.compact.contains_key(segment) {
                    let token = table.expanded.len() as u64;
                    table.compact.insert(segment.clone(), token);
                    table.expanded.push(segment.clone());
                }
            }
        }
        table
    }

    /// Compact token for a segment id, if the segment was in the corpus.
    pub fn compact(&self, segment: &str) -> Option<u64> {
        self.compact.get(segment).copied()
    }

    /// Segment id for a compact token.
    pub fn expand(&self, token: u64) -> Option<&str> {
        self.expanded.get(token as usize).map(String::as_str)
    }

    /// Number of distinct segments in the table.
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Iterate over `(token, segment id)` pairs in token order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &str)> {
        self.expanded
            .iter()
            .enumerate()
            .map(|(token, segment)| (token as u64, segment.as_str()))
    }
}
