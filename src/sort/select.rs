use core::cmp::{self, Ordering};

use crate::elem::ElementsMut;
use crate::sort::pivot::{break_patterns, choose_pivot};
use crate::sort::quicksort::{partition, partition_equal};
use crate::sort::smallsort::insertion_sort_shift_left;

// For windows of up to this length it's probably faster to simply sort them.
const MAX_INSERTION: usize = 10;

/// Reorders `v` such that the element at `n` is the one that would be there if `v` were fully
/// sorted, see [`nth_element_by`].
#[inline]
pub fn nth_element<S>(v: &mut S, n: usize)
where
    S: ElementsMut + ?Sized,
    S::Elem: Ord,
{
    nth_element_by(v, n, |a, b| a.cmp(b));
}

/// Reorders `v` such that the element at `n` is the one that would be there if `v` were sorted by
/// `compare`.
///
/// Afterwards no element before `n` is greater than `v[n]` and no element after `n` is smaller.
/// Nothing is guaranteed about the order within either side.
///
/// Runs in *O*(*n*) worst-case: a quickselect with the same pivot choice as
/// [`sort_by`](crate::sort_by) that falls back to median-of-medians selection after too many
/// imbalanced partitions. An empty `v` or `n >= v.len()` leaves `v` untouched.
pub fn nth_element_by<S, F>(v: &mut S, n: usize, mut compare: F)
where
    S: ElementsMut + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    let len = v.len();
    if n >= len {
        return;
    }

    let mut is_less = |a: &S::Elem, b: &S::Elem| compare(a, b) == Ordering::Less;

    if n == len - 1 {
        // Find max element and place it in the last position.
        let max_idx = max_index(v, &mut is_less);
        v.swap(max_idx, n);
    } else if n == 0 {
        // Find min element and place it in the first position.
        let min_idx = min_index(v, &mut is_less);
        v.swap(min_idx, n);
    } else {
        select_loop(v, 0, len, n, &mut is_less);
    }
}

fn select_loop<S, F>(v: &mut S, mut lo: usize, mut hi: usize, index: usize, is_less: &mut F)
where
    S: ElementsMut + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> bool,
{
    // Limit the amount of iterations and fall back to deterministic selection to ensure O(n)
    // worst case running time. This limit needs to be constant, because using `ilog2(len)` like
    // in `sort` would result in O(n log n) time complexity.
    let mut limit = 16;

    // True if the last partitioning was reasonably balanced.
    let mut was_balanced = true;

    // True if `v[lo - 1]` is a pivot no greater than any element of the window.
    let mut has_ancestor = false;

    loop {
        let len = hi - lo;

        if len <= MAX_INSERTION {
            if len > 1 {
                insertion_sort_shift_left(v, lo, hi, 1, is_less);
            }
            return;
        }

        if limit == 0 {
            median_of_medians(v, lo, hi, index, is_less);
            return;
        }

        // If the last partitioning was imbalanced, try breaking patterns in the window by
        // shuffling some elements around. Hopefully we'll choose a better pivot this time.
        if !was_balanced {
            break_patterns(v, lo, hi);
            limit -= 1;
        }

        let pivot = choose_pivot(v, lo, hi, is_less);

        // If the chosen pivot is equal to the enclosing pivot, then it's the smallest element in
        // the window. Split off the run of elements equal to it.
        if has_ancestor && !is_less(v.get(lo - 1), v.get(pivot)) {
            let mid = partition_equal(v, lo, hi, pivot, is_less);

            // If we've passed our index, then we're good.
            if mid > index {
                return;
            }

            // Otherwise, continue with the elements greater than the pivot.
            lo = mid;
            continue;
        }

        let mid = partition(v, lo, hi, pivot, is_less);
        was_balanced = cmp::min(mid - lo, hi - mid) >= len / 8;

        if mid < index {
            lo = mid + 1;
            has_ancestor = true;
        } else if mid > index {
            hi = mid;
        } else {
            // If mid == index, then we're done, since partition() guaranteed that all elements
            // after mid are greater than or equal to mid.
            return;
        }
    }
}

/// Deterministic selection of `index` within `v[lo..hi]` in guaranteed O(n) time.
///
/// Classic median-of-medians: the medians of groups of five are gathered at the front of the
/// window, their median is selected recursively and used as the pivot.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn median_of_medians<S, F>(v: &mut S, mut lo: usize, mut hi: usize, index: usize, is_less: &mut F)
where
    S: ElementsMut + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> bool,
{
    debug_assert!(lo <= index && index < hi);

    loop {
        let len = hi - lo;

        if len <= MAX_INSERTION {
            if len > 1 {
                insertion_sort_shift_left(v, lo, hi, 1, is_less);
            }
            return;
        }

        // Move the median of every full group of five to the front of the window. Group `g` sends
        // its median to `lo + g`, which lies in an already processed group.
        let groups = len / 5;
        for g in 0..groups {
            let start = lo + g * 5;
            insertion_sort_shift_left(v, start, start + 5, 1, is_less);
            v.swap(lo + g, start + 2);
        }

        let pivot = lo + groups / 2;
        median_of_medians(v, lo, lo + groups, pivot, is_less);

        let mid = partition(v, lo, hi, pivot, is_less);

        if mid > index {
            hi = mid;
        } else if mid == index {
            return;
        } else {
            // Peel off the elements equal to the pivot, otherwise a window full of duplicates
            // would only shrink by one element per round.
            let end = partition_equal(v, mid, hi, mid, is_less);
            if index < end {
                return;
            }
            lo = end;
        }
    }
}

/// Index of the minimum element, the first one if there are several.
fn min_index<S, F>(v: &S, is_less: &mut F) -> usize
where
    S: ElementsMut + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> bool,
{
    (1..v.len()).fold(0, |acc, i| if is_less(v.get(i), v.get(acc)) { i } else { acc })
}

/// Index of the maximum element, the last one if there are several.
fn max_index<S, F>(v: &S, is_less: &mut F) -> usize
where
    S: ElementsMut + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> bool,
{
    (1..v.len()).fold(0, |acc, i| if is_less(v.get(i), v.get(acc)) { acc } else { i })
}
