//! Searching for subsequences, runs and element sets.

use core::cmp::Ordering;

use crate::elem::Elements;

/// Start of the first occurrence of `needle` in `haystack`, `None` if it does not occur.
///
/// An empty `needle` matches at `Some(0)`. Naive *O*(*n* \* *m*) scan.
pub fn search<H, N, F>(haystack: &H, needle: &N, mut compare: F) -> Option<usize>
where
    H: Elements + ?Sized,
    N: Elements<Elem = H::Elem> + ?Sized,
    F: FnMut(&H::Elem, &H::Elem) -> Ordering,
{
    let (n, m) = (haystack.len(), needle.len());
    if m > n {
        return None;
    }

    (0..=n - m).find(|&start| matches_at(haystack, needle, start, &mut compare))
}

/// Start of the last occurrence of `needle` in `haystack`.
///
/// Unlike [`search`], an empty `needle` never matches and yields `None`.
pub fn find_end<H, N, F>(haystack: &H, needle: &N, mut compare: F) -> Option<usize>
where
    H: Elements + ?Sized,
    N: Elements<Elem = H::Elem> + ?Sized,
    F: FnMut(&H::Elem, &H::Elem) -> Ordering,
{
    let (n, m) = (haystack.len(), needle.len());
    if m == 0 || m > n {
        return None;
    }

    (0..=n - m)
        .rev()
        .find(|&start| matches_at(haystack, needle, start, &mut compare))
}

fn matches_at<H, N, F>(haystack: &H, needle: &N, start: usize, compare: &mut F) -> bool
where
    H: Elements + ?Sized,
    N: Elements<Elem = H::Elem> + ?Sized,
    F: FnMut(&H::Elem, &H::Elem) -> Ordering,
{
    (0..needle.len()).all(|i| compare(haystack.get(start + i), needle.get(i)) == Ordering::Equal)
}

/// Start of the first run of `count` consecutive elements equivalent to `value`.
///
/// A `count` of zero matches at `Some(0)`, even on an empty sequence.
pub fn search_n<S, F>(v: &S, count: usize, value: &S::Elem, mut compare: F) -> Option<usize>
where
    S: Elements + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    if count == 0 {
        return Some(0);
    }

    let len = v.len();
    let mut run_start = 0;
    let mut run_len = 0;

    for i in 0..len {
        // Not enough elements left to complete a run starting here.
        if run_len == 0 && len - i < count {
            return None;
        }

        if compare(v.get(i), value) == Ordering::Equal {
            if run_len == 0 {
                run_start = i;
            }
            run_len += 1;
            if run_len == count {
                return Some(run_start);
            }
        } else {
            run_len = 0;
        }
    }

    None
}

/// Index of the first element of `v` equivalent to any element of `set`.
pub fn find_first_of<S, T, F>(v: &S, set: &T, mut compare: F) -> Option<usize>
where
    S: Elements + ?Sized,
    T: Elements<Elem = S::Elem> + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    (0..v.len()).find(|&i| (0..set.len()).any(|j| compare(v.get(i), set.get(j)) == Ordering::Equal))
}

/// First index `i` such that `v[i]` and `v[i + 1]` are equivalent.
pub fn adjacent_find<S, F>(v: &S, mut compare: F) -> Option<usize>
where
    S: Elements + ?Sized,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    (1..v.len())
        .find(|&i| compare(v.get(i - 1), v.get(i)) == Ordering::Equal)
        .map(|i| i - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subsequences() {
        let v = [1, 2, 3, 1, 2, 3, 4];

        assert_eq!(search(&v[..], &[2, 3][..], i32::cmp), Some(1));
        assert_eq!(find_end(&v[..], &[2, 3][..], i32::cmp), Some(4));
        assert_eq!(search(&v[..], &[3, 4][..], i32::cmp), Some(5));
        assert_eq!(search(&v[..], &[4, 1][..], i32::cmp), None);
        assert_eq!(find_end(&v[..], &[4, 1][..], i32::cmp), None);
        assert_eq!(search(&v[..2], &v[..], i32::cmp), None);
    }

    #[test]
    fn empty_needle() {
        let v = [1, 2];
        let empty: [i32; 0] = [];

        assert_eq!(search(&v[..], &empty[..], i32::cmp), Some(0));
        assert_eq!(search(&empty[..], &empty[..], i32::cmp), Some(0));
        assert_eq!(find_end(&v[..], &empty[..], i32::cmp), None);
    }

    #[test]
    fn runs() {
        let v = [1, 2, 2, 2, 3];

        assert_eq!(search_n(&v[..], 3, &2, i32::cmp), Some(1));
        assert_eq!(search_n(&v[..], 1, &3, i32::cmp), Some(4));
        assert_eq!(search_n(&v[..], 4, &2, i32::cmp), None);
        assert_eq!(search_n(&v[..], 0, &7, i32::cmp), Some(0));
        assert_eq!(search_n(&[] as &[i32], 0, &7, i32::cmp), Some(0));
        assert_eq!(search_n(&[] as &[i32], 1, &7, i32::cmp), None);

        let v = [2, 2, 1, 2, 2, 2];
        assert_eq!(search_n(&v[..], 3, &2, i32::cmp), Some(3));
    }

    #[test]
    fn first_of_and_adjacent() {
        let v = [5, 7, 9, 7, 7];

        assert_eq!(find_first_of(&v[..], &[9, 7][..], i32::cmp), Some(1));
        assert_eq!(find_first_of(&v[..], &[1, 2][..], i32::cmp), None);
        assert_eq!(find_first_of(&v[..], &[] as &[i32], i32::cmp), None);

        assert_eq!(adjacent_find(&v[..], i32::cmp), Some(3));
        assert_eq!(adjacent_find(&v[..3], i32::cmp), None);
        assert_eq!(adjacent_find(&[1] as &[i32], i32::cmp), None);
    }
}
