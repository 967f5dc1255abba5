//! Contract-checked entry points over byte spans.
//!
//! The generic functions accept [`ElemSlice`] and [`ElemBuf`] directly. The wrappers here add
//! the checks a call over several buffers needs: matching element sizes, probe values that are
//! exactly one element long, large enough outputs and in-range positions. A violation is
//! reported as an [`Error`] before any element is touched; otherwise the result is that of the
//! generic function.

use core::cmp::Ordering;

use crate::elem::{ElemBuf, ElemSlice, Elements};
use crate::error::{Error, Result};

fn check_pair(left: usize, right: usize) -> Result<()> {
    if left != right {
        return Err(Error::ElementSizeMismatch { left, right });
    }
    Ok(())
}

fn check_value(value: &[u8], size: usize) -> Result<()> {
    if value.len() != size {
        return Err(Error::ValueSizeMismatch {
            value: value.len(),
            size,
        });
    }
    Ok(())
}

/// Checked [`merge_by`](crate::merge_by).
pub fn merge<F>(a: ElemSlice<'_>, b: ElemSlice<'_>, out: &mut ElemBuf<'_>, compare: F) -> Result<usize>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    check_pair(a.elem_size(), b.elem_size())?;
    check_pair(a.elem_size(), out.elem_size())?;

    let required = a.len() + b.len();
    if out.len() < required {
        return Err(Error::OutputTooSmall {
            required,
            available: out.len(),
        });
    }

    Ok(crate::sort::merge_by(&a, &b, out, compare))
}

/// Checked [`inplace_merge_by`](crate::inplace_merge_by). A `middle` equal to the length is
/// accepted and does nothing.
pub fn inplace_merge<F>(buf: &mut ElemBuf<'_>, middle: usize, compare: F) -> Result<()>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    let len = buf.len();
    if middle > len {
        return Err(Error::IndexOutOfBounds { index: middle, len });
    }

    crate::sort::inplace_merge_by(buf, middle, compare);
    Ok(())
}

/// Checked [`nth_element_by`](crate::nth_element_by). A rank equal to the length is accepted
/// and does nothing.
pub fn nth_element<F>(buf: &mut ElemBuf<'_>, n: usize, compare: F) -> Result<()>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    let len = buf.len();
    if n > len {
        return Err(Error::IndexOutOfBounds { index: n, len });
    }

    crate::sort::nth_element_by(buf, n, compare);
    Ok(())
}

/// Checked [`equal`](crate::equal).
pub fn equal<F>(a: ElemSlice<'_>, b: ElemSlice<'_>, compare: F) -> Result<bool>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    check_pair(a.elem_size(), b.elem_size())?;
    Ok(crate::find::equal(&a, &b, compare))
}

/// Checked [`mismatch`](crate::mismatch).
pub fn mismatch<F>(a: ElemSlice<'_>, b: ElemSlice<'_>, compare: F) -> Result<usize>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    check_pair(a.elem_size(), b.elem_size())?;
    Ok(crate::find::mismatch(&a, &b, compare))
}

/// Checked [`is_permutation`](crate::is_permutation).
pub fn is_permutation<F>(a: ElemSlice<'_>, b: ElemSlice<'_>, compare: F) -> Result<bool>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    check_pair(a.elem_size(), b.elem_size())?;
    Ok(crate::permutation::is_permutation(&a, &b, compare))
}

/// Checked [`search`](crate::search).
pub fn search<F>(haystack: ElemSlice<'_>, needle: ElemSlice<'_>, compare: F) -> Result<Option<usize>>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    check_pair(haystack.elem_size(), needle.elem_size())?;
    Ok(crate::search::search(&haystack, &needle, compare))
}

/// Checked [`find_end`](crate::find_end).
pub fn find_end<F>(haystack: ElemSlice<'_>, needle: ElemSlice<'_>, compare: F) -> Result<Option<usize>>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    check_pair(haystack.elem_size(), needle.elem_size())?;
    Ok(crate::search::find_end(&haystack, &needle, compare))
}

/// Checked [`find_first_of`](crate::find_first_of).
pub fn find_first_of<F>(v: ElemSlice<'_>, set: ElemSlice<'_>, compare: F) -> Result<Option<usize>>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    check_pair(v.elem_size(), set.elem_size())?;
    Ok(crate::search::find_first_of(&v, &set, compare))
}

/// Checked [`find`](crate::find).
pub fn find<F>(v: ElemSlice<'_>, value: &[u8], compare: F) -> Result<Option<usize>>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    check_value(value, v.elem_size())?;
    Ok(crate::find::find(&v, value, compare))
}

/// Checked [`count`](crate::count).
pub fn count<F>(v: ElemSlice<'_>, value: &[u8], compare: F) -> Result<usize>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    check_value(value, v.elem_size())?;
    Ok(crate::find::count(&v, value, compare))
}

/// Checked [`search_n`](crate::search_n).
pub fn search_n<F>(v: ElemSlice<'_>, count: usize, value: &[u8], compare: F) -> Result<Option<usize>>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    check_value(value, v.elem_size())?;
    Ok(crate::search::search_n(&v, count, value, compare))
}

/// Checked [`lower_bound`](crate::lower_bound).
pub fn lower_bound<F>(v: ElemSlice<'_>, value: &[u8], compare: F) -> Result<usize>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    check_value(value, v.elem_size())?;
    Ok(crate::bsearch::lower_bound(&v, value, compare))
}

/// Checked [`upper_bound`](crate::upper_bound).
pub fn upper_bound<F>(v: ElemSlice<'_>, value: &[u8], compare: F) -> Result<usize>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    check_value(value, v.elem_size())?;
    Ok(crate::bsearch::upper_bound(&v, value, compare))
}

/// Checked [`binary_search`](crate::binary_search).
pub fn binary_search<F>(v: ElemSlice<'_>, value: &[u8], compare: F) -> Result<bool>
where
    F: FnMut(&[u8], &[u8]) -> Ordering,
{
    check_value(value, v.elem_size())?;
    Ok(crate::bsearch::binary_search(&v, value, compare))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn le_u16(a: &[u8], b: &[u8]) -> Ordering {
        u16::from_le_bytes([a[0], a[1]]).cmp(&u16::from_le_bytes([b[0], b[1]]))
    }

    fn lex(a: &[u8], b: &[u8]) -> Ordering {
        a.cmp(b)
    }

    fn words(values: &[u16]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    #[test]
    fn merge_checks_sizes_and_output() {
        let a = words(&[1, 4]);
        let b = words(&[2, 3]);
        let a = ElemSlice::new(&a, 2).unwrap();
        let b = ElemSlice::new(&b, 2).unwrap();

        let mut small = [0u8; 6];
        let mut out = ElemBuf::new(&mut small, 2).unwrap();
        assert_eq!(
            merge(a, b, &mut out, le_u16),
            Err(Error::OutputTooSmall {
                required: 4,
                available: 3
            })
        );

        let mut wide = [0u8; 8];
        let mut out = ElemBuf::new(&mut wide, 4).unwrap();
        assert_eq!(
            merge(a, b, &mut out, le_u16),
            Err(Error::ElementSizeMismatch { left: 2, right: 4 })
        );

        let mut exact = [0u8; 8];
        let mut out = ElemBuf::new(&mut exact, 2).unwrap();
        assert_eq!(merge(a, b, &mut out, le_u16), Ok(4));
        assert_eq!(out.as_bytes(), &words(&[1, 2, 3, 4])[..]);
    }

    #[test]
    fn probe_value_length() {
        let bytes = words(&[1, 2, 2, 7]);
        let v = ElemSlice::new(&bytes, 2).unwrap();

        assert_eq!(
            find(v, &[2], le_u16),
            Err(Error::ValueSizeMismatch { value: 1, size: 2 })
        );
        assert_eq!(find(v, &2u16.to_le_bytes(), le_u16), Ok(Some(1)));
        assert_eq!(count(v, &2u16.to_le_bytes(), le_u16), Ok(2));
        assert_eq!(lower_bound(v, &2u16.to_le_bytes(), le_u16), Ok(1));
        assert_eq!(upper_bound(v, &2u16.to_le_bytes(), le_u16), Ok(3));
        assert_eq!(binary_search(v, &5u16.to_le_bytes(), le_u16), Ok(false));
        assert_eq!(search_n(v, 2, &2u16.to_le_bytes(), le_u16), Ok(Some(1)));
    }

    #[test]
    fn positions_past_the_end() {
        let mut bytes = words(&[3, 1, 2]);
        let mut buf = ElemBuf::new(&mut bytes, 2).unwrap();

        assert_eq!(
            nth_element(&mut buf, 4, le_u16),
            Err(Error::IndexOutOfBounds { index: 4, len: 3 })
        );
        assert_eq!(nth_element(&mut buf, 3, le_u16), Ok(()));
        assert_eq!(
            inplace_merge(&mut buf, 9, le_u16),
            Err(Error::IndexOutOfBounds { index: 9, len: 3 })
        );
        assert_eq!(buf.as_bytes(), &words(&[3, 1, 2])[..]);

        assert_eq!(inplace_merge(&mut buf, 1, le_u16), Ok(()));
        assert_eq!(buf.as_bytes(), &words(&[1, 2, 3])[..]);
    }

    #[test]
    fn paired_sizes() {
        let narrow = [1u8, 2, 3, 4];
        let wide = [1u8, 2, 3, 4];
        let a = ElemSlice::new(&narrow, 1).unwrap();
        let b = ElemSlice::new(&wide, 2).unwrap();
        let mismatch_err = Err(Error::ElementSizeMismatch { left: 1, right: 2 });

        assert_eq!(equal(a, b, lex), mismatch_err);
        assert_eq!(is_permutation(a, b, lex), mismatch_err);
        assert_eq!(search(a, b, lex), Err(Error::ElementSizeMismatch { left: 1, right: 2 }));
        assert_eq!(
            find_end(b, a, lex),
            Err(Error::ElementSizeMismatch { left: 2, right: 1 })
        );

        let c = ElemSlice::new(&wide[..2], 1).unwrap();
        assert_eq!(search(a, c, lex), Ok(Some(0)));
        assert_eq!(find_end(a, c, lex), Ok(Some(0)));
        assert_eq!(find_first_of(a, c, lex), Ok(Some(0)));
        assert_eq!(mismatch(a, c, lex), Ok(2));
    }
}
