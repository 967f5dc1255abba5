//! Folds and element-wise mapping with a caller-owned accumulator.

use core::cmp;

use crate::elem::{Elements, ElementsMut};

/// Folds `v` from the front, threading the accumulator through `op` by value.
pub fn accumulate<S, A, F>(v: &S, init: A, mut op: F) -> A
where
    S: Elements + ?Sized,
    F: FnMut(A, &S::Elem) -> A,
{
    (0..v.len()).fold(init, |acc, i| op(acc, v.get(i)))
}

/// Folds `v` from the front into an accumulator that `op` mutates in place.
///
/// Handy for accumulators that are unsized or expensive to move, such as a byte buffer.
pub fn reduce<S, A, F>(v: &S, acc: &mut A, mut op: F)
where
    S: Elements + ?Sized,
    A: ?Sized,
    F: FnMut(&mut A, &S::Elem),
{
    for i in 0..v.len() {
        op(acc, v.get(i));
    }
}

/// Calls `op(src[i], dst[i])` for every index both sequences share and returns how many that
/// were.
pub fn transform<S, D, F>(src: &S, dst: &mut D, mut op: F) -> usize
where
    S: Elements + ?Sized,
    D: ElementsMut + ?Sized,
    F: FnMut(&S::Elem, &mut D::Elem),
{
    let len = cmp::min(src.len(), dst.len());
    for i in 0..len {
        op(src.get(i), dst.get_mut(i));
    }
    len
}
