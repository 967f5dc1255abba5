use crate::elem::ElementsMut;

/// Sorts `v[lo..hi]` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
pub(crate) fn heapsort<S, F>(v: &mut S, lo: usize, hi: usize, is_less: &mut F)
where
    S: ElementsMut + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> bool,
{
    let len = hi - lo;

    // Build the heap in linear time.
    for node in (0..len / 2).rev() {
        sift_down(v, lo, len, node, is_less);
    }

    // Pop maximal elements from the heap.
    for end in (1..len).rev() {
        v.swap(lo, lo + end);
        sift_down(v, lo, end, 0, is_less);
    }
}

/// Restores the heap invariant `parent >= child` below `node` in the heap `v[base..base + len]`.
fn sift_down<S, F>(v: &mut S, base: usize, len: usize, mut node: usize, is_less: &mut F)
where
    S: ElementsMut + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> bool,
{
    loop {
        // Children of `node`.
        let mut child = 2 * node + 1;
        if child >= len {
            break;
        }

        // Choose the greater child.
        if child + 1 < len && is_less(v.get(base + child), v.get(base + child + 1)) {
            child += 1;
        }

        // Stop if the invariant holds at `node`.
        if !is_less(v.get(base + node), v.get(base + child)) {
            break;
        }

        // Swap `node` with the greater child, move one step down, and continue sifting.
        v.swap(base + node, base + child);
        node = child;
    }
}
