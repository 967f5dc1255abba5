use core::cmp::Ordering;

use crate::elem::Elements;

/// `true` if `b` is a rearrangement of `a`, treating elements as interchangeable when `compare`
/// reports them equivalent.
///
/// Sequences of different lengths are never permutations of each other. The common prefix is
/// skipped first. On the remainder every equivalence class of `a` is visited once, at its first
/// member, and its occurrences are counted in both sequences. *O*(*n*^2) comparisons, no
/// allocation.
pub fn is_permutation<A, B, F>(a: &A, b: &B, mut compare: F) -> bool
where
    A: Elements + ?Sized,
    B: Elements<Elem = A::Elem> + ?Sized,
    F: FnMut(&A::Elem, &A::Elem) -> Ordering,
{
    let len = a.len();
    if len != b.len() {
        return false;
    }

    let mut eq = |x: &A::Elem, y: &A::Elem| compare(x, y) == Ordering::Equal;

    let start = (0..len)
        .find(|&i| !eq(a.get(i), b.get(i)))
        .unwrap_or(len);

    for i in start..len {
        let x = a.get(i);

        // Already counted at an earlier member of the same class.
        if (start..i).any(|j| eq(a.get(j), x)) {
            continue;
        }

        let in_b = (start..len).filter(|&j| eq(x, b.get(j))).count();
        if in_b == 0 {
            return false;
        }

        let in_a = 1 + (i + 1..len).filter(|&j| eq(x, a.get(j))).count();
        if in_a != in_b {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rearrangements() {
        let a = [1, 2, 3, 2, 1];

        assert!(is_permutation(&a[..], &[2, 1, 1, 3, 2][..], i32::cmp));
        assert!(is_permutation(&a[..], &a[..], i32::cmp));
        assert!(!is_permutation(&a[..], &[1, 2, 3, 2, 2][..], i32::cmp));
        assert!(!is_permutation(&a[..], &[1, 2, 3, 2][..], i32::cmp));
        assert!(is_permutation(&[] as &[i32], &[] as &[i32], i32::cmp));
    }

    #[test]
    fn classes_by_comparator() {
        // Equivalent when equal modulo 10.
        let by_digit = |x: &i32, y: &i32| (x % 10).cmp(&(y % 10));

        assert!(is_permutation(&[11, 22, 33][..], &[3, 1, 2][..], by_digit));
        assert!(!is_permutation(&[11, 21, 33][..], &[3, 1, 2][..], by_digit));
    }

    #[test]
    fn symmetric() {
        let a = [4, 4, 5, 6];
        let b = [6, 5, 4, 5];

        assert_eq!(
            is_permutation(&a[..], &b[..], i32::cmp),
            is_permutation(&b[..], &a[..], i32::cmp)
        );
        assert!(!is_permutation(&a[..], &b[..], i32::cmp));
    }
}
