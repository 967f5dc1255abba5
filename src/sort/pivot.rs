use core::mem;

use crate::elem::ElementsMut;

// Minimum window length to use the ninther instead of the simple median-of-three.
const SHORTEST_NINTHER: usize = 50;

/// Chooses a pivot in `v[lo..hi]` and returns its index.
///
/// Looks at the quartile positions, widened to a Tukey ninther for longer windows. Only indices
/// are shuffled, the elements stay where they are. Requires `hi - lo >= 8`.
pub(crate) fn choose_pivot<S, F>(v: &S, lo: usize, hi: usize, is_less: &mut F) -> usize
where
    S: ElementsMut + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> bool,
{
    let len = hi - lo;
    debug_assert!(len >= 8);

    // Three indices near which we are going to choose a pivot.
    let mut a = lo + len / 4;
    let mut b = lo + len / 4 * 2;
    let mut c = lo + len / 4 * 3;

    if len >= SHORTEST_NINTHER {
        // Find medians in the neighborhoods of `a`, `b`, and `c`.
        a = median_idx(v, a - 1, a, a + 1, is_less);
        b = median_idx(v, b - 1, b, b + 1, is_less);
        c = median_idx(v, c - 1, c, c + 1, is_less);
    }

    median_idx(v, a, b, c, is_less)
}

/// Returns the index pointing to the median of the 3 elements `v[a]`, `v[b]` and `v[c]`.
pub(crate) fn median_idx<S, F>(v: &S, mut a: usize, b: usize, mut c: usize, is_less: &mut F) -> usize
where
    S: ElementsMut + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> bool,
{
    if is_less(v.get(c), v.get(a)) {
        mem::swap(&mut a, &mut c);
    }
    if is_less(v.get(c), v.get(b)) {
        return c;
    }
    if is_less(v.get(b), v.get(a)) {
        return a;
    }
    b
}

/// Scatters some elements of `v[lo..hi]` around in an attempt to break patterns that might cause
/// imbalanced partitions.
#[cold]
pub(crate) fn break_patterns<S>(v: &mut S, lo: usize, hi: usize)
where
    S: ElementsMut + ?Sized,
{
    let len = hi - lo;
    if len < 8 {
        return;
    }

    // Pseudorandom number generator from the "Xorshift RNGs" paper by George Marsaglia.
    let mut random = len as u32;
    let mut gen_u32 = || {
        random ^= random << 13;
        random ^= random >> 17;
        random ^= random << 5;
        random
    };
    let mut gen_usize = || {
        if usize::BITS <= 32 {
            gen_u32() as usize
        } else {
            (((gen_u32() as u64) << 32) | (gen_u32() as u64)) as usize
        }
    };

    // Take random numbers modulo this number.
    let modulus = len.next_power_of_two();

    // Some pivot candidates will be in the nearby of this index. Let's randomize them.
    let pos = len / 4 * 2;

    for i in 0..3 {
        // Generate a random number modulo `len`. To avoid a costly modulo, first take it modulo a
        // power of two, then decrease by `len` until it fits into the range `[0, len - 1]`.
        let mut other = gen_usize() & (modulus - 1);

        // `other` is guaranteed to be less than `2 * len`.
        if other >= len {
            other -= len;
        }

        v.swap(lo + pos - 1 + i, lo + other);
    }
}
