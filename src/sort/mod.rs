//! In-place reordering: sorting, selection, partitioning, deduplication and merging.

use core::cmp::Ordering;

use crate::elem::{Elements, ElementsMut};

mod heapsort;
mod merge;
mod partition;
mod pivot;
mod quicksort;
mod select;
mod smallsort;
mod unique;

pub use merge::{inplace_merge, inplace_merge_by, merge, merge_by};
pub use partition::{is_partitioned, partition};
pub use select::{nth_element, nth_element_by};
pub use unique::{unique, unique_by};

// Inputs of up to this length are handed straight to insertion sort.
const SMALL_INPUT: usize = 20;

/// Sorts `v`, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place
/// (i.e., does not allocate), and *O*(*n* \* log(*n*)) worst-case.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// seq_algo::sort(&mut v[..]);
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
#[inline]
pub fn sort<S>(v: &mut S)
where
    S: ElementsMut + ?Sized,
    S::Elem: Ord,
{
    sort_by(v, |a, b| a.cmp(b));
}

/// Sorts `v` with a comparator function, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place
/// (i.e., does not allocate), and *O*(*n* \* log(*n*)) worst-case.
///
/// The comparator function must define a total ordering for the elements. If the ordering is
/// not total, the order of the elements is unspecified, but `v` still holds the same elements
/// afterwards and the call terminates.
///
/// # Current implementation
///
/// Introsort: quicksort around a median-of-three pivot, a Tukey ninther for longer windows,
/// finished with insertion sort on short windows. Windows whose pivot equals the pivot of the
/// enclosing partition are split into equal and greater elements, which makes inputs with many
/// duplicates cheap. After `2 * log2(len)` partitioning steps the remaining window is
/// heapsorted.
///
/// # Examples
///
/// ```
/// let mut v = [5, 4, 1, 3, 2];
/// seq_algo::sort_by(&mut v[..], |a, b| a.cmp(b));
/// assert!(v == [1, 2, 3, 4, 5]);
///
/// // reverse sorting
/// seq_algo::sort_by(&mut v[..], |a, b| b.cmp(a));
/// assert!(v == [5, 4, 3, 2, 1]);
/// ```
pub fn sort_by<S, F>(v: &mut S, mut compare: F)
where
    S: ElementsMut + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    let len = v.len();

    if len < 2 {
        return;
    }

    let mut is_less = |a: &S::Elem, b: &S::Elem| compare(a, b) == Ordering::Less;

    if len <= SMALL_INPUT {
        smallsort::insertion_sort_shift_left(v, 0, len, 1, &mut is_less);
        return;
    }

    // Limit the number of imbalanced partitions to `2 * floor(log2(len))`.
    // The binary OR by one is used to eliminate the zero-check in the logarithm.
    let limit = 2 * (len | 1).ilog2();
    quicksort::quicksort(v, 0, len, false, limit, &mut is_less);
}

/// Sorts `v` with heapsort. Unstable, in-place, *O*(*n* \* log(*n*)) in every case.
pub fn heapsort_by<S, F>(v: &mut S, mut compare: F)
where
    S: ElementsMut + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    heapsort::heapsort(v, 0, len, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v` with insertion sort. Stable, in-place, *O*(*n*^2) worst-case and *O*(*n*) on
/// sorted input.
pub fn insertion_sort_by<S, F>(v: &mut S, mut compare: F)
where
    S: ElementsMut + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    smallsort::insertion_sort_shift_left(v, 0, len, 1, &mut |a, b| {
        compare(a, b) == Ordering::Less
    });
}

/// `true` if no element of `v` is smaller than its predecessor.
#[inline]
pub fn is_sorted<S>(v: &S) -> bool
where
    S: Elements + ?Sized,
    S::Elem: Ord,
{
    is_sorted_by(v, |a, b| a.cmp(b))
}

/// `true` if no element of `v` is smaller than its predecessor under `compare`.
#[inline]
pub fn is_sorted_by<S, F>(v: &S, compare: F) -> bool
where
    S: Elements + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    is_sorted_until_by(v, compare) == v.len()
}

/// Length of the longest sorted prefix of `v` under `compare`.
pub fn is_sorted_until_by<S, F>(v: &S, mut compare: F) -> usize
where
    S: Elements + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    let len = v.len();
    (1..len)
        .find(|&i| compare(v.get(i), v.get(i - 1)) == Ordering::Less)
        .unwrap_or(len)
}
