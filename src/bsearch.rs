//! Binary search over sequences sorted by a comparator.
//!
//! All functions assume `v` is sorted by `compare` (or partitioned by `pred`). On unsorted input
//! they return some index in `0..=len` without panicking.

use core::cmp::Ordering;
use core::ops::Range;

use crate::elem::Elements;

/// First index whose element is not less than `value`, `v.len()` if there is none.
pub fn lower_bound<S, F>(v: &S, value: &S::Elem, mut compare: F) -> usize
where
    S: Elements + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    partition_point(v, |elem| compare(elem, value) == Ordering::Less)
}

/// First index whose element is greater than `value`, `v.len()` if there is none.
pub fn upper_bound<S, F>(v: &S, value: &S::Elem, mut compare: F) -> usize
where
    S: Elements + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    partition_point(v, |elem| compare(value, elem) != Ordering::Less)
}

/// `true` if `v` holds an element equivalent to `value`.
pub fn binary_search<S, F>(v: &S, value: &S::Elem, mut compare: F) -> bool
where
    S: Elements + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    let i = lower_bound(v, value, &mut compare);
    i < v.len() && compare(value, v.get(i)) != Ordering::Less
}

/// The range of elements equivalent to `value`. Empty, positioned at the insertion point, if
/// there are none.
pub fn equal_range<S, F>(v: &S, value: &S::Elem, mut compare: F) -> Range<usize>
where
    S: Elements + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    let start = lower_bound(v, value, &mut compare);
    let end = upper_bound(v, value, &mut compare);
    start..end
}

/// Index of the first element for which `pred` is false, given that `pred` holds for a prefix
/// of `v` and fails for the rest.
pub fn partition_point<S, P>(v: &S, mut pred: P) -> usize
where
    S: Elements + ?Sized,
    P: FnMut(&S::Elem) -> bool,
{
    let mut base = 0;
    let mut size = v.len();

    while size > 0 {
        let half = size / 2;
        let mid = base + half;
        if pred(v.get(mid)) {
            base = mid + 1;
            size -= half + 1;
        } else {
            size = half;
        }
    }

    base
}
