//! Linear scans that classify elements with a comparator or predicate.
//!
//! All scans stop at the first index that decides the result, except the counting functions
//! which always visit every element.

use core::cmp::{self, Ordering};

use crate::elem::Elements;

/// Index of the first element equivalent to `value`, or `None`.
pub fn find<S, F>(v: &S, value: &S::Elem, mut compare: F) -> Option<usize>
where
    S: Elements + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    (0..v.len()).find(|&i| compare(v.get(i), value) == Ordering::Equal)
}

/// Index of the first element satisfying `pred`, or `None`.
pub fn find_if<S, P>(v: &S, mut pred: P) -> Option<usize>
where
    S: Elements + ?Sized,
    P: FnMut(&S::Elem) -> bool,
{
    (0..v.len()).find(|&i| pred(v.get(i)))
}

/// Index of the first element failing `pred`, or `None`.
pub fn find_if_not<S, P>(v: &S, mut pred: P) -> Option<usize>
where
    S: Elements + ?Sized,
    P: FnMut(&S::Elem) -> bool,
{
    (0..v.len()).find(|&i| !pred(v.get(i)))
}

/// Number of elements equivalent to `value`.
pub fn count<S, F>(v: &S, value: &S::Elem, mut compare: F) -> usize
where
    S: Elements + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    (0..v.len())
        .filter(|&i| compare(v.get(i), value) == Ordering::Equal)
        .count()
}

/// Number of elements satisfying `pred`.
pub fn count_if<S, P>(v: &S, mut pred: P) -> usize
where
    S: Elements + ?Sized,
    P: FnMut(&S::Elem) -> bool,
{
    (0..v.len()).filter(|&i| pred(v.get(i))).count()
}

/// `true` if every element satisfies `pred`. Vacuously `true` for an empty sequence.
pub fn all_of<S, P>(v: &S, mut pred: P) -> bool
where
    S: Elements + ?Sized,
    P: FnMut(&S::Elem) -> bool,
{
    (0..v.len()).all(|i| pred(v.get(i)))
}

/// `true` if at least one element satisfies `pred`.
pub fn any_of<S, P>(v: &S, mut pred: P) -> bool
where
    S: Elements + ?Sized,
    P: FnMut(&S::Elem) -> bool,
{
    (0..v.len()).any(|i| pred(v.get(i)))
}

/// `true` if no element satisfies `pred`.
pub fn none_of<S, P>(v: &S, pred: P) -> bool
where
    S: Elements + ?Sized,
    P: FnMut(&S::Elem) -> bool,
{
    !any_of(v, pred)
}

/// First index at which `a` and `b` disagree under `compare`.
///
/// If one sequence is a prefix of the other the result is the shorter length.
pub fn mismatch<A, B, F>(a: &A, b: &B, mut compare: F) -> usize
where
    A: Elements + ?Sized,
    B: Elements + ?Sized,
    F: FnMut(&A::Elem, &B::Elem) -> Ordering,
{
    let len = cmp::min(a.len(), b.len());

    (0..len)
        .find(|&i| compare(a.get(i), b.get(i)) != Ordering::Equal)
        .unwrap_or(len)
}

/// `true` if `a` and `b` have the same length and are pairwise equivalent.
pub fn equal<A, B, F>(a: &A, b: &B, compare: F) -> bool
where
    A: Elements + ?Sized,
    B: Elements + ?Sized,
    F: FnMut(&A::Elem, &B::Elem) -> Ordering,
{
    a.len() == b.len() && mismatch(a, b, compare) == a.len()
}

/// Index of the first smallest element, `None` if `v` is empty.
pub fn min_element<S, F>(v: &S, mut compare: F) -> Option<usize>
where
    S: Elements + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    (0..v.len()).reduce(|best, i| {
        if compare(v.get(i), v.get(best)) == Ordering::Less {
            i
        } else {
            best
        }
    })
}

/// Index of the first largest element, `None` if `v` is empty.
pub fn max_element<S, F>(v: &S, mut compare: F) -> Option<usize>
where
    S: Elements + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    (0..v.len()).reduce(|best, i| {
        if compare(v.get(best), v.get(i)) == Ordering::Less {
            i
        } else {
            best
        }
    })
}
