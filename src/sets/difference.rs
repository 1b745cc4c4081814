//! Set difference.

use std::collections::HashSet;
use std::hash::{BuildHasher, Hash};

/// Elements of `set_a` that are not in `set_b`, as a new set.
///
/// Neither input is modified.
#[must_use]
pub fn difference<T, S>(set_a: &HashSet<T, S>, set_b: &HashSet<T, S>) -> HashSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Default,
{
    set_a
        .iter()
        .filter(|value| !set_b.contains(*value))
        .cloned()
        .collect()
}
