use crate::elem::{Elements, ElementsMut};

/// Reorders `v` so that every element satisfying `pred` precedes every element that does not.
///
/// Returns the partition point, the index of the first element for which `pred` is false, or
/// `v.len()` if there is none. Uses a two-pointer swap scheme: *O*(*n*) time, *O*(1) space, each
/// element is classified exactly once. The relative order within either group is not preserved.
pub fn partition<S, P>(v: &mut S, mut pred: P) -> usize
where
    S: ElementsMut + ?Sized,
    P: FnMut(&S::Elem) -> bool,
{
    let mut l = 0;
    let mut r = v.len();

    loop {
        // Find the first element failing the predicate.
        loop {
            if l == r {
                return l;
            }
            if !pred(v.get(l)) {
                break;
            }
            l += 1;
        }

        // Find the last element satisfying the predicate. `v[l]` is already known to fail it.
        loop {
            r -= 1;
            if l == r {
                return l;
            }
            if pred(v.get(r)) {
                break;
            }
        }

        v.swap(l, r);
        l += 1;
    }
}

/// `true` if every element satisfying `pred` precedes every element that does not.
pub fn is_partitioned<S, P>(v: &S, mut pred: P) -> bool
where
    S: Elements + ?Sized,
    P: FnMut(&S::Elem) -> bool,
{
    let len = v.len();
    let mut i = 0;
    while i < len && pred(v.get(i)) {
        i += 1;
    }
    while i < len {
        if pred(v.get(i)) {
            return false;
        }
        i += 1;
    }
    true
}
