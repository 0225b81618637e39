//! FILENAME: reshape-engine/src/domain.rs
//! Category domains.
//!
//! A category domain is the deduplicated sequence of distinct values
//! observed for one categorical field, ordered by first appearance across
//! the input collections (collection 1's first appearances, then collection
//! 2's not already seen, and so on). This ordering feeds axis and label
//! ordering directly, so it is an observable contract.

use rustc_hash::FxHashSet;
use crate::record::Record;

/// Collects the distinct values of `field` across all collections,
/// duplicates removed, first-appearance order preserved.
pub fn distinct_domain(collections: &[&[Record]], field: &str) -> Vec<String> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut domain = Vec::new();

    for collection in collections {
        for record in *collection {
            let value = record.text(field);
            if seen.insert(value.clone()) {
                domain.push(value);
            }
        }
    }

    domain
}
