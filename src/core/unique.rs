// unique.rs - Cross-sequence uniqueness computation

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use rayon::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};

/// For each record index i, compute the substrings present in universe i and
/// absent from every other universe of the collection:
///
///   UniqueSet[i] = Universe[i] - union(Universe[j] for all j != i)
///
/// The union is accumulated over an explicit loop skipping index i. A
/// substring shared only among *other* records never enters UniqueSet[i];
/// only membership in i's own universe matters for inclusion. Two textually
/// identical records annihilate each other's unique sets, which is the
/// intended consequence of the definition. A single-record collection keeps
/// its full universe (nothing to subtract).
pub fn unique_sets(universes: &[HashSet<String>]) -> Vec<HashSet<String>> {
    let pb = ProgressBar::new(universes.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} records")
            .unwrap(),
    );
    let processed = AtomicUsize::new(0);

    let results: Vec<HashSet<String>> = universes
        .par_iter()
        .enumerate()
        .map(|(i, universe)| {
            let mut union_of_others: HashSet<&str> = HashSet::new();
            for (j, other) in universes.iter().enumerate() {
                if j != i {
                    union_of_others.extend(other.iter().map(|s| s.as_str()));
                }
            }

            let unique: HashSet<String> = universe
                .iter()
                .filter(|fragment| !union_of_others.contains(fragment.as_str()))
                .cloned()
                .collect();

            let count = processed.fetch_add(1, Ordering::Relaxed) + 1;
            pb.set_position(count as u64);
            unique
        })
        .collect();

    pb.finish_and_clear();
    results
}
