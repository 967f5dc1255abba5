use core::cmp::Ordering;

use crate::elem::ElementsMut;

/// Collapses runs of equal consecutive elements, see [`unique_by`].
#[inline]
pub fn unique<S>(v: &mut S) -> usize
where
    S: ElementsMut + ?Sized,
    S::Elem: Ord,
{
    unique_by(v, |a, b| a.cmp(b))
}

/// Collapses every run of consecutive elements equivalent under `compare` to its first member.
///
/// The kept elements are moved to the front of `v` in their original order and their count is
/// returned. Each candidate is compared against the last kept element. The elements past the
/// returned count are the removed duplicates in unspecified order; they are moved, never
/// dropped or overwritten.
pub fn unique_by<S, F>(v: &mut S, mut compare: F) -> usize
where
    S: ElementsMut + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return len;
    }

    let mut write = 1;
    for read in 1..len {
        if compare(v.get(write - 1), v.get(read)) != Ordering::Equal {
            v.swap(write, read);
            write += 1;
        }
    }

    write
}
