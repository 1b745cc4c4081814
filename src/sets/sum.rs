//! Sequence totals.

use std::borrow::Borrow;

/// Sum a sequence of values. An empty sequence sums to 0.
///
/// Accepts anything that iterates over `u32` or `&u32`, so slices,
/// `im::Vector`s and `SmallVec`s all work without copying.
///
/// ```
/// use shut_the_box::sets::sum;
///
/// assert_eq!(sum([4, 2, 10]), 16);
/// assert_eq!(sum(&Vec::<u32>::new()), 0);
/// ```
pub fn sum<I>(values: I) -> u32
where
    I: IntoIterator,
    I::Item: Borrow<u32>,
{
    values.into_iter().map(|value| *value.borrow()).sum()
}
