use core::cmp::Ordering;

use crate::elem::{rotate, Elements, ElementsMut, ElementsWrite};

/// Merges the sorted sequences `a` and `b` into `out`, see [`merge_by`].
#[inline]
pub fn merge<A, B, O>(a: &A, b: &B, out: &mut O) -> usize
where
    A: Elements + ?Sized,
    B: Elements<Elem = A::Elem> + ?Sized,
    O: ElementsWrite<Elem = A::Elem> + ?Sized,
    A::Elem: Ord,
{
    merge_by(a, b, out, |x, y| x.cmp(y))
}

/// Merges the sequences `a` and `b`, both sorted by `compare`, into the front of `out`.
///
/// The merge is stable: of two equivalent elements the one from `a` is written first. Returns the
/// number of elements written, always `a.len() + b.len()`.
///
/// # Panics
///
/// Panics if `out` is shorter than `a.len() + b.len()`.
pub fn merge_by<A, B, O, F>(a: &A, b: &B, out: &mut O, mut compare: F) -> usize
where
    A: Elements + ?Sized,
    B: Elements<Elem = A::Elem> + ?Sized,
    O: ElementsWrite<Elem = A::Elem> + ?Sized,
    F: FnMut(&A::Elem, &A::Elem) -> Ordering,
{
    let (len_a, len_b) = (a.len(), b.len());
    let required = len_a + len_b;
    if out.len() < required {
        panic!(
            "merge output holds {} elements but {} are required",
            out.len(),
            required
        );
    }

    let (mut i, mut j, mut k) = (0, 0, 0);

    while i < len_a && j < len_b {
        // Only take from `b` if it is strictly smaller, this keeps the merge stable.
        if compare(b.get(j), a.get(i)) == Ordering::Less {
            out.write(k, b.get(j));
            j += 1;
        } else {
            out.write(k, a.get(i));
            i += 1;
        }
        k += 1;
    }

    for i in i..len_a {
        out.write(k, a.get(i));
        k += 1;
    }

    for j in j..len_b {
        out.write(k, b.get(j));
        k += 1;
    }

    k
}

/// Merges the sorted runs `v[..middle]` and `v[middle..]` in place, see [`inplace_merge_by`].
#[inline]
pub fn inplace_merge<S>(v: &mut S, middle: usize)
where
    S: ElementsMut + ?Sized,
    S::Elem: Ord,
{
    inplace_merge_by(v, middle, |a, b| a.cmp(b));
}

/// Merges the consecutive runs `v[..middle]` and `v[middle..]`, both sorted by `compare`, into
/// one sorted run.
///
/// Stable like [`merge_by`]. No auxiliary buffer is used: the runs are split around a binary
/// searched cut and the inner blocks rotated, recursing into the shorter half and looping on the
/// longer one, so the stack depth is *O*(log(*n*)). A `middle` of zero or at or past the end
/// leaves `v` untouched.
pub fn inplace_merge_by<S, F>(v: &mut S, middle: usize, mut compare: F)
where
    S: ElementsMut + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    let len = v.len();
    if middle == 0 || middle >= len {
        return;
    }

    let mut is_less = |a: &S::Elem, b: &S::Elem| compare(a, b) == Ordering::Less;
    merge_without_buffer(v, 0, middle, len, &mut is_less);
}

#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn merge_without_buffer<S, F>(
    v: &mut S,
    mut lo: usize,
    mut mid: usize,
    mut hi: usize,
    is_less: &mut F,
) where
    S: ElementsMut + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> bool,
{
    loop {
        let left_len = mid - lo;
        let right_len = hi - mid;

        if left_len == 0 || right_len == 0 {
            return;
        }

        // Already in order, nothing to do.
        if !is_less(v.get(mid), v.get(mid - 1)) {
            return;
        }

        if left_len + right_len == 2 {
            v.swap(lo, mid);
            return;
        }

        // Cut the longer run in half and find the matching cut in the other run. Elements of the
        // right run equal to the left cut stay right of it, elements of the left run equal to
        // the right cut stay left of it. Both choices preserve stability.
        let (left_cut, right_cut) = if left_len > right_len {
            let left_cut = lo + left_len / 2;
            (left_cut, lower_bound_in(v, mid, hi, left_cut, is_less))
        } else {
            let right_cut = mid + right_len / 2;
            (upper_bound_in(v, lo, mid, right_cut, is_less), right_cut)
        };

        rotate(v, left_cut, mid - left_cut, right_cut - mid);
        let new_mid = left_cut + (right_cut - mid);

        // Recurse into the shorter side and loop on the longer one.
        if new_mid - lo < hi - new_mid {
            merge_without_buffer(v, lo, left_cut, new_mid, is_less);
            lo = new_mid;
            mid = right_cut;
        } else {
            merge_without_buffer(v, new_mid, right_cut, hi, is_less);
            hi = new_mid;
            mid = left_cut;
        }
    }
}

/// First index in `v[lo..hi]` whose element is not less than `v[key]`.
fn lower_bound_in<S, F>(v: &S, mut lo: usize, mut hi: usize, key: usize, is_less: &mut F) -> usize
where
    S: ElementsMut + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> bool,
{
    while lo < hi {
        let m = lo + (hi - lo) / 2;
        if is_less(v.get(m), v.get(key)) {
            lo = m + 1;
        } else {
            hi = m;
        }
    }
    lo
}

/// First index in `v[lo..hi]` whose element is greater than `v[key]`.
fn upper_bound_in<S, F>(v: &S, mut lo: usize, mut hi: usize, key: usize, is_less: &mut F) -> usize
where
    S: ElementsMut + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> bool,
{
    while lo < hi {
        let m = lo + (hi - lo) / 2;
        if is_less(v.get(key), v.get(m)) {
            hi = m;
        } else {
            lo = m + 1;
        }
    }
    lo
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_into_output() {
        let a = [1, 3, 5, 7];
        let b = [2, 3, 4, 8, 9];
        let mut out = [0; 10];

        let n = merge(&a[..], &b[..], &mut out[..]);
        assert_eq!(n, 9);
        assert_eq!(out, [1, 2, 3, 3, 4, 5, 7, 8, 9, 0]);
    }

    #[test]
    fn merge_empty_sides() {
        let a: [i32; 0] = [];
        let b = [1, 2];
        let mut out = [0; 2];
        assert_eq!(merge(&a[..], &b[..], &mut out[..]), 2);
        assert_eq!(out, [1, 2]);
        assert_eq!(merge(&b[..], &a[..], &mut out[..]), 2);
        assert_eq!(merge(&a[..], &a[..], &mut out[..0]), 0);
    }

    #[test]
    #[should_panic]
    fn merge_output_too_small() {
        let mut out = [0; 2];
        merge(&[1, 2][..], &[3][..], &mut out[..]);
    }

    #[test]
    fn merge_is_stable() {
        let a = [(1, 'a'), (2, 'a'), (2, 'b')];
        let b = [(1, 'x'), (2, 'x')];
        let mut out = [(0, ' '); 5];

        merge_by(&a[..], &b[..], &mut out[..], |x, y| x.0.cmp(&y.0));
        assert_eq!(out, [(1, 'a'), (1, 'x'), (2, 'a'), (2, 'b'), (2, 'x')]);
    }

    #[test]
    fn inplace_merge_runs() {
        let mut v = [1, 4, 6, 9, 2, 3, 5, 7, 8, 10];
        inplace_merge(&mut v[..], 4);
        assert_eq!(v, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);

        let mut v = [5, 6, 7, 1, 2];
        inplace_merge(&mut v[..], 3);
        assert_eq!(v, [1, 2, 5, 6, 7]);
    }

    #[test]
    fn inplace_merge_noop_bounds() {
        let mut v = [3, 1, 2];
        inplace_merge(&mut v[..], 0);
        inplace_merge(&mut v[..], 3);
        inplace_merge(&mut v[..], 7);
        assert_eq!(v, [3, 1, 2]);
    }

    #[test]
    fn inplace_merge_is_stable() {
        let mut v = [(1, 'a'), (3, 'a'), (3, 'b'), (1, 'x'), (3, 'x'), (4, 'x')];
        inplace_merge_by(&mut v[..], 3, |x, y| x.0.cmp(&y.0));
        assert_eq!(
            v,
            [(1, 'a'), (1, 'x'), (3, 'a'), (3, 'b'), (3, 'x'), (4, 'x')]
        );
    }
}
