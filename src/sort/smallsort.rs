use crate::elem::ElementsMut;

/// Sorts `v[lo..hi]` assuming `v[lo..lo + offset]` is already sorted.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn insertion_sort_shift_left<S, F>(
    v: &mut S,
    lo: usize,
    hi: usize,
    offset: usize,
    is_less: &mut F,
) where
    S: ElementsMut + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> bool,
{
    // Using assert here improves performance.
    assert!(offset != 0 && lo + offset <= hi);

    // Shift each element of the unsorted region v[lo + offset..hi] as far left as is needed to
    // make v[lo..hi] sorted.
    for i in lo + offset..hi {
        insert_tail(v, lo, i, is_less);
    }
}

/// Inserts `v[tail]` into the sorted run `v[lo..tail]`.
///
/// Equal elements are never passed over, which keeps insertion sort stable.
fn insert_tail<S, F>(v: &mut S, lo: usize, tail: usize, is_less: &mut F)
where
    S: ElementsMut + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> bool,
{
    let mut j = tail;
    while j > lo && is_less(v.get(j), v.get(j - 1)) {
        v.swap(j, j - 1);
        j -= 1;
    }
}
