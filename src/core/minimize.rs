// minimize.rs - Reduction of unique sets to their minimal members

use std::collections::HashSet;
use rayon::prelude::*;

/// Reduce a unique set to its minimal members: discard every member that
/// contains a strictly shorter member of the same set as a substring.
///
/// Containment is checked between the immutable candidate snapshot and an
/// accumulating discard-marker set, then the snapshot is filtered against
/// the markers. The result is therefore invariant to pair visitation order.
/// Equal-length members never discard each other, and a member is never
/// compared against itself. Applying the reduction twice yields the same
/// set (idempotent).
pub fn minimize(unique: &HashSet<String>) -> HashSet<String> {
    let mut discarded: HashSet<&str> = HashSet::new();

    for shorter in unique {
        for longer in unique {
            if shorter.len() < longer.len() && longer.contains(shorter.as_str()) {
                discarded.insert(longer.as_str());
            }
        }
    }

    unique
        .iter()
        .filter(|fragment| !discarded.contains(fragment.as_str()))
        .cloned()
        .collect()
}

/// Minimize every record's unique set, in collection order.
pub fn minimize_all(uniques: &[HashSet<String>]) -> Vec<HashSet<String>> {
    uniques.par_iter().map(minimize).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(fragments: &[&str]) -> HashSet<String> {
        fragments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_minimize_discards_superstrings() {
        let unique = set_of(&["A", "AB", "ABC", "XY"]);
        let minimal = minimize(&unique);
        // "AB" and "ABC" both contain the shorter "A"; "XY" has no shorter
        // member inside it
        assert_eq!(minimal, set_of(&["A", "XY"]));
    }

    #[test]
    fn test_minimize_keeps_shorter_member_of_every_discard() {
        let unique = set_of(&["GC", "AGCA", "TTGCTT"]);
        let minimal = minimize(&unique);
        assert_eq!(minimal, set_of(&["GC"]));
    }

    #[test]
    fn test_minimize_equal_length_incomparable_members_retained() {
        // Same length, neither contains the other: both stay
        let unique = set_of(&["AB", "BA"]);
        assert_eq!(minimize(&unique), unique);
    }

    #[test]
    fn test_minimize_no_member_contains_another() {
        let unique = set_of(&["T", "AT", "AAT", "GG", "CGG"]);
        let minimal = minimize(&unique);
        for a in &minimal {
            for b in &minimal {
                if a != b {
                    assert!(
                        !b.contains(a.as_str()) || a.len() >= b.len(),
                        "{} still contains shorter member {}",
                        b,
                        a
                    );
                }
            }
        }
        assert_eq!(minimal, set_of(&["T", "GG"]));
    }

    #[test]
    fn test_minimize_is_idempotent() {
        let unique = set_of(&["C", "CC", "ACC", "TG", "GT"]);
        let minimal = minimize(&unique);
        assert_eq!(minimize(&minimal), minimal);
    }

    #[test]
    fn test_minimize_empty_set() {
        assert!(minimize(&HashSet::new()).is_empty());
    }

    #[test]
    fn test_minimize_singleton() {
        let unique = set_of(&["ABABC"]);
        assert_eq!(minimize(&unique), unique);
    }

    #[test]
    fn test_minimize_all_preserves_order() {
        let uniques = vec![set_of(&["A", "AB"]), set_of(&["T"])];
        let minimals = minimize_all(&uniques);
        assert_eq!(minimals[0], set_of(&["A"]));
        assert_eq!(minimals[1], set_of(&["T"]));
    }
}
