use crate::elem::ElementsMut;
use crate::sort::heapsort::heapsort;
use crate::sort::pivot::choose_pivot;
use crate::sort::smallsort::insertion_sort_shift_left;

/// Windows of this length or shorter are finished with insertion sort.
pub(crate) const SMALL_SORT_THRESHOLD: usize = 16;

/// Sorts `v[lo..hi]` recursively.
///
/// If `has_ancestor` is true, `v[lo - 1]` is the pivot of an enclosing partition and no element
/// of the window is smaller than it.
///
/// `limit` is the number of allowed partitioning steps before switching to `heapsort`. If zero,
/// this function will immediately switch to heapsort.
pub(crate) fn quicksort<S, F>(
    v: &mut S,
    mut lo: usize,
    mut hi: usize,
    mut has_ancestor: bool,
    mut limit: u32,
    is_less: &mut F,
) where
    S: ElementsMut + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> bool,
{
    loop {
        let len = hi - lo;

        if len <= SMALL_SORT_THRESHOLD {
            if len >= 2 {
                insertion_sort_shift_left(v, lo, hi, 1, is_less);
            }
            return;
        }

        // If too many bad pivot choices were made, simply fall back to heapsort in order to
        // guarantee `O(n * log(n))` worst-case.
        if limit == 0 {
            heapsort(v, lo, hi, is_less);
            return;
        }

        limit -= 1;

        let pivot = choose_pivot(v, lo, hi, is_less);

        // If the chosen pivot is equal to the enclosing pivot, then it's the smallest element in
        // the window. Partition the window into elements equal to and elements greater than the
        // pivot. This case is usually hit when the input contains many duplicate elements.
        if has_ancestor && !is_less(v.get(lo - 1), v.get(pivot)) {
            lo = partition_equal(v, lo, hi, pivot, is_less);
            continue;
        }

        let mid = partition(v, lo, hi, pivot, is_less);

        // Recurse into the shorter side and loop on the longer one, this bounds the stack depth
        // by `log2(len)`.
        if mid - lo < hi - (mid + 1) {
            quicksort(v, lo, mid, has_ancestor, limit, is_less);
            lo = mid + 1;
            has_ancestor = true;
        } else {
            quicksort(v, mid + 1, hi, true, limit, is_less);
            hi = mid;
        }
    }
}

/// Partitions `v[lo..hi]` into elements smaller than `v[pivot]`, followed by the pivot, followed
/// by elements greater than or equal to it.
///
/// Returns the final index of the pivot.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn partition<S, F>(v: &mut S, lo: usize, hi: usize, pivot: usize, is_less: &mut F) -> usize
where
    S: ElementsMut + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> bool,
{
    // Place the pivot at the beginning of the window, it stays there while the rest is
    // partitioned.
    v.swap(lo, pivot);

    let mut l = lo + 1;
    let mut r = hi;

    loop {
        // Find the first element greater than or equal to the pivot.
        while l < r && is_less(v.get(l), v.get(lo)) {
            l += 1;
        }

        // Find the last element smaller that the pivot.
        while l < r && !is_less(v.get(r - 1), v.get(lo)) {
            r -= 1;
        }

        // Are we done?
        if l >= r {
            break;
        }

        // Swap the found pair of out-of-order elements.
        r -= 1;
        v.swap(l, r);
        l += 1;
    }

    // Place the pivot between the two partitions.
    let mid = l - 1;
    v.swap(lo, mid);

    mid
}

/// Partitions `v[lo..hi]` into elements equal to `v[pivot]` followed by elements greater than
/// `v[pivot]`.
///
/// Returns the end of the equal run. It is assumed that the window does not contain elements
/// smaller than the pivot.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn partition_equal<S, F>(
    v: &mut S,
    lo: usize,
    hi: usize,
    pivot: usize,
    is_less: &mut F,
) -> usize
where
    S: ElementsMut + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> bool,
{
    v.swap(lo, pivot);

    let mut l = lo + 1;
    let mut r = hi;

    loop {
        // Find the first element greater than the pivot.
        while l < r && !is_less(v.get(lo), v.get(l)) {
            l += 1;
        }

        // Find the last element equal to the pivot.
        while l < r && is_less(v.get(lo), v.get(r - 1)) {
            r -= 1;
        }

        // Are we done?
        if l >= r {
            break;
        }

        // Swap the found pair of out-of-order elements.
        r -= 1;
        v.swap(l, r);
        l += 1;
    }

    l
}
