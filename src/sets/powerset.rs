//! Non-empty subset enumeration.

/// Enumerate every non-empty subset of `items`.
///
/// Subsets keep the relative order of the input. Starting from the empty
/// subset, each input element is folded in by appending it to every subset
/// generated so far, so for `[a, b, c]` the output order is
/// `[a], [b], [a, b], [c], [a, c], [b, c], [a, b, c]`.
///
/// The result has `2^n - 1` entries. Callers bound `n` (the tile count is
/// validated by `GameConfig`), this function does not.
///
/// ```
/// use shut_the_box::sets::powerset;
///
/// assert_eq!(
///     powerset(&[1, 2, 3]),
///     vec![vec![1], vec![2], vec![1, 2], vec![3], vec![1, 3], vec![2, 3], vec![1, 2, 3]],
/// );
/// ```
#[must_use]
pub fn powerset<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut sets: Vec<Vec<T>> = vec![Vec::new()];

    for item in items {
        let extended: Vec<Vec<T>> = sets
            .iter()
            .map(|set| {
                let mut next = Vec::with_capacity(set.len() + 1);
                next.extend_from_slice(set);
                next.push(item.clone());
                next
            })
            .collect();
        sets.extend(extended);
    }

    // Drop the seed empty subset
    sets.remove(0);
    sets
}
