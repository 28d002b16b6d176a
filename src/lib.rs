//! In-place smoothsort over mutable slices.
//!
//! Smoothsort, due to Edsger W. Dijkstra, is a comparison sort that runs in
//! *O*(*n* \* log(*n*)) worst-case with *O*(1) auxiliary space, and degrades
//! gracefully toward *O*(*n*) on already-sorted or nearly-sorted input. It
//! maintains an implicit forest of Leonardo heaps overlaid on the slice: the
//! forest is never materialized as nodes, it is recovered purely from array
//! positions and a small stack of heap orders.
//!
//! The build phase grows the forest one element at a time while keeping the
//! heap roots ascending left to right, so the rightmost root is always the
//! current maximum. The drain phase then repeatedly finalizes that maximum
//! in place and re-stabilizes the two child heaps it exposes.

mod forest;
mod leonardo;
mod shape;

use std::cmp::Ordering;
use std::mem::size_of;

use crate::shape::ForestShape;

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place
/// (i.e., does not allocate beyond a stack of *O*(log(*n*)) heap orders), and
/// *O*(*n* \* log(*n*)) worst-case. Already-sorted input is handled in
/// *O*(*n*) comparisons.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// smoothsort_rs::sort(&mut v);
/// assert_eq!(v, [-5, -3, 1, 2, 4]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    smoothsort(v, |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function, but might not preserve the
/// order of equal elements.
///
/// The comparator function must define a total ordering for the elements in
/// the slice. If the ordering is not total, the order of the elements is
/// unspecified.
///
/// For example, while [`f64`] doesn't implement [`Ord`] because `NaN != NaN`,
/// we can use `partial_cmp` as our sort function when we know the slice
/// doesn't contain a `NaN`.
///
/// If `compare` panics mid-sort, the slice is left in a valid but unspecified
/// permutation of its input: every element is still present exactly once, but
/// no ordering may be assumed.
///
/// # Examples
///
/// ```
/// let mut v = [5, 4, 1, 3, 2];
/// smoothsort_rs::sort_by(&mut v, |a, b| b.cmp(a));
/// assert_eq!(v, [5, 4, 3, 2, 1]);
/// ```
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    smoothsort(v, |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts the slice with a key extraction function, but might not preserve the
/// order of equal elements.
///
/// The key is recomputed on every comparison, so it should be cheap to
/// extract. This is the entry point for element types without a natural
/// order of their own.
///
/// # Examples
///
/// ```
/// let mut v = [-5i32, 4, 1, -3, 2];
/// smoothsort_rs::sort_by_key(&mut v, |k| k.abs());
/// assert_eq!(v, [1, 2, -3, 4, -5]);
/// ```
#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    smoothsort(v, |a, b| f(a).lt(&f(b)));
}

fn smoothsort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if size_of::<T>() == 0 {
        return;
    }

    if v.len() < 2 {
        return;
    }

    let mut shape = ForestShape::for_len(v.len());
    forest::heapify(v, &mut shape, &mut is_less);
    forest::drain(v, &mut shape, &mut is_less);
}
