// universe.rs - Substring universe construction

use std::collections::HashSet;
use rayon::prelude::*;
use crate::data::SequenceRecord;

/// Build the substring universe of a cleaned sequence: the set of all
/// distinct contiguous substrings of length >= 1, including every single
/// character and the full sequence itself.
///
/// A sequence of length L yields up to L*(L+1)/2 candidates before
/// deduplication; repeated fragments collapse to one set member. An empty
/// sequence yields an empty universe.
pub fn substring_universe(sequence: &str) -> HashSet<String> {
    // Character boundaries, so slicing stays valid for non-ASCII input too
    let mut bounds: Vec<usize> = sequence.char_indices().map(|(i, _)| i).collect();
    bounds.push(sequence.len());

    let mut universe = HashSet::new();
    for start in 0..bounds.len().saturating_sub(1) {
        for end in (start + 1)..bounds.len() {
            universe.insert(sequence[bounds[start]..bounds[end]].to_string());
        }
    }
    universe
}

/// Build one universe per record, in collection order.
///
/// Records are independent here, so construction is parallelized across the
/// collection.
pub fn build_universes(records: &[SequenceRecord]) -> Vec<HashSet<String>> {
    records
        .par_iter()
        .map(|record| substring_universe(&record.sequence))
        .collect()
}
