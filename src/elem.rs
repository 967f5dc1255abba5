//! Element access for the algorithms in this crate.
//!
//! Every algorithm reads, exchanges and writes elements exclusively through the [`Elements`]
//! family of traits. Typed slices implement them directly, [`ElemSlice`] and [`ElemBuf`] carve a
//! byte buffer into fixed-size elements so the same algorithms run over type-erased data.

use core::cmp;
use core::ops::Range;

use crate::error::{Error, Result};

/// Read access to a contiguous sequence of elements.
pub trait Elements {
    type Elem: ?Sized;

    fn len(&self) -> usize;

    /// Returns the element at `index`. Panics if `index >= len()`.
    fn get(&self, index: usize) -> &Self::Elem;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-place rearrangement of a sequence.
pub trait ElementsMut: Elements {
    fn get_mut(&mut self, index: usize) -> &mut Self::Elem;

    /// Exchanges the elements at `a` and `b`. `a == b` leaves the sequence untouched.
    fn swap(&mut self, a: usize, b: usize);
}

/// Overwriting an element with a copy of another one, used when an algorithm emits into a
/// separate output sequence.
pub trait ElementsWrite: Elements {
    fn write(&mut self, index: usize, src: &Self::Elem);
}

impl<T> Elements for [T] {
    type Elem = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> ElementsMut for [T] {
    #[inline]
    fn get_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

impl<T: Clone> ElementsWrite for [T] {
    #[inline]
    fn write(&mut self, index: usize, src: &T) {
        self[index].clone_from(src);
    }
}

impl<T> Elements for Vec<T> {
    type Elem = T;

    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn get(&self, index: usize) -> &T {
        &self[index]
    }
}

impl<T> ElementsMut for Vec<T> {
    #[inline]
    fn get_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

impl<T: Clone> ElementsWrite for Vec<T> {
    #[inline]
    fn write(&mut self, index: usize, src: &T) {
        self[index].clone_from(src);
    }
}

// --- Byte spans ---

/// Size of the stack temporary used by [`swap_bytes`]. Larger elements are exchanged in chunks
/// of this size.
const SWAP_CHUNK: usize = 64;

/// Byte range occupied by element `index` in a buffer of `size`-byte elements.
#[inline]
pub fn address_of(index: usize, size: usize) -> Range<usize> {
    let start = index * size;
    start..start + size
}

/// Exchanges the `size`-byte elements `a` and `b` of `bytes`.
///
/// The bytes travel through a fixed stack buffer, so no allocation happens regardless of the
/// element size. Both windows are element aligned, so they are either identical or disjoint.
pub fn swap_bytes(bytes: &mut [u8], a: usize, b: usize, size: usize) {
    if a == b {
        return;
    }

    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    let lo_start = lo * size;
    let hi_start = hi * size;
    debug_assert!(hi_start + size <= bytes.len());

    let mut tmp = [0u8; SWAP_CHUNK];
    let mut done = 0;
    while done < size {
        let n = cmp::min(SWAP_CHUNK, size - done);
        let x = lo_start + done;
        let y = hi_start + done;

        tmp[..n].copy_from_slice(&bytes[x..x + n]);
        bytes.copy_within(y..y + n, x);
        bytes[y..y + n].copy_from_slice(&tmp[..n]);

        done += n;
    }
}

fn check_extent(len: usize, size: usize) -> Result<()> {
    if size == 0 {
        if len == 0 {
            Ok(())
        } else {
            Err(Error::ZeroElementSize { len })
        }
    } else if len % size != 0 {
        Err(Error::RaggedBuffer { len, size })
    } else {
        Ok(())
    }
}

/// A read-only byte buffer viewed as `bytes.len() / size` elements of `size` bytes each.
#[derive(Copy, Clone, Debug)]
pub struct ElemSlice<'a> {
    bytes: &'a [u8],
    size: usize,
}

impl<'a> ElemSlice<'a> {
    /// Fails if `bytes` is not a whole number of `size`-byte elements.
    pub fn new(bytes: &'a [u8], size: usize) -> Result<Self> {
        check_extent(bytes.len(), size)?;
        Ok(Self { bytes, size })
    }

    pub fn elem_size(&self) -> usize {
        self.size
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Byte range of element `index` within [`as_bytes`](Self::as_bytes).
    pub fn address_of(&self, index: usize) -> Range<usize> {
        address_of(index, self.size)
    }
}

impl Elements for ElemSlice<'_> {
    type Elem = [u8];

    #[inline]
    fn len(&self) -> usize {
        if self.size == 0 {
            0
        } else {
            self.bytes.len() / self.size
        }
    }

    #[inline]
    fn get(&self, index: usize) -> &[u8] {
        &self.bytes[address_of(index, self.size)]
    }
}

/// A mutable byte buffer viewed as `bytes.len() / size` elements of `size` bytes each.
#[derive(Debug)]
pub struct ElemBuf<'a> {
    bytes: &'a mut [u8],
    size: usize,
}

impl<'a> ElemBuf<'a> {
    /// Fails if `bytes` is not a whole number of `size`-byte elements.
    pub fn new(bytes: &'a mut [u8], size: usize) -> Result<Self> {
        check_extent(bytes.len(), size)?;
        Ok(Self { bytes, size })
    }

    pub fn elem_size(&self) -> usize {
        self.size
    }

    pub fn as_bytes(&self) -> &[u8] {
        &*self.bytes
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut *self.bytes
    }

    /// Byte range of element `index` within [`as_bytes`](Self::as_bytes).
    pub fn address_of(&self, index: usize) -> Range<usize> {
        address_of(index, self.size)
    }

    /// Read-only view of the same elements.
    pub fn as_elem_slice(&self) -> ElemSlice<'_> {
        ElemSlice {
            bytes: &*self.bytes,
            size: self.size,
        }
    }
}

impl Elements for ElemBuf<'_> {
    type Elem = [u8];

    #[inline]
    fn len(&self) -> usize {
        if self.size == 0 {
            0
        } else {
            self.bytes.len() / self.size
        }
    }

    #[inline]
    fn get(&self, index: usize) -> &[u8] {
        &self.bytes[address_of(index, self.size)]
    }
}

impl ElementsMut for ElemBuf<'_> {
    #[inline]
    fn get_mut(&mut self, index: usize) -> &mut [u8] {
        &mut self.bytes[address_of(index, self.size)]
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        swap_bytes(self.bytes, a, b, self.size);
    }
}

impl ElementsWrite for ElemBuf<'_> {
    /// Panics if `src` is not exactly one element long.
    #[inline]
    fn write(&mut self, index: usize, src: &[u8]) {
        self.bytes[address_of(index, self.size)].copy_from_slice(src);
    }
}

// --- Block helpers ---

/// Swaps the `n` element blocks starting at `a` and `b`, which must not overlap.
pub fn swap_blocks<S>(v: &mut S, a: usize, b: usize, n: usize)
where
    S: ElementsMut + ?Sized,
{
    for i in 0..n {
        v.swap(a + i, b + i);
    }
}

/// Rotates `v[start..start + left_len + right_len]` so that the `right_len` block moves in front
/// of the `left_len` block, using only element swaps.
pub fn rotate<S>(v: &mut S, mut start: usize, mut left_len: usize, mut right_len: usize)
where
    S: ElementsMut + ?Sized,
{
    while left_len > 0 && right_len > 0 {
        if left_len <= right_len {
            swap_blocks(v, start, start + left_len, left_len);
            start += left_len;
            right_len -= left_len;
        } else {
            swap_blocks(v, start + left_len - right_len, start + left_len, right_len);
            left_len -= right_len;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_small_elements() {
        let mut bytes = [1u8, 2, 3, 4, 5, 6];
        swap_bytes(&mut bytes, 0, 2, 2);
        assert_eq!(bytes, [5, 6, 3, 4, 1, 2]);

        swap_bytes(&mut bytes, 1, 1, 2);
        assert_eq!(bytes, [5, 6, 3, 4, 1, 2]);
    }

    #[test]
    fn swap_elements_larger_than_chunk() {
        let size = SWAP_CHUNK * 2 + 7;
        let mut bytes: Vec<u8> = (0..size).map(|_| 0xAA).chain((0..size).map(|_| 0x55)).collect();
        swap_bytes(&mut bytes, 1, 0, size);

        assert!(bytes[..size].iter().all(|&b| b == 0x55));
        assert!(bytes[size..].iter().all(|&b| b == 0xAA));
    }

    #[test]
    fn extents_are_checked() {
        let bytes = [0u8; 10];
        assert_eq!(
            ElemSlice::new(&bytes, 4).unwrap_err(),
            Error::RaggedBuffer { len: 10, size: 4 }
        );
        assert_eq!(
            ElemSlice::new(&bytes, 0).unwrap_err(),
            Error::ZeroElementSize { len: 10 }
        );

        let empty = ElemSlice::new(&[], 0).unwrap();
        assert_eq!(empty.len(), 0);

        let view = ElemSlice::new(&bytes, 5).unwrap();
        assert_eq!(view.len(), 2);
        assert_eq!(view.address_of(1), 5..10);
    }

    #[test]
    fn buf_swap_and_write() {
        let mut bytes = *b"aabbcc";
        let mut buf = ElemBuf::new(&mut bytes, 2).unwrap();
        buf.swap(0, 2);
        buf.write(1, b"zz");
        assert_eq!(buf.get(0), b"cc");
        assert_eq!(buf.as_bytes(), b"cczzaa");
    }

    #[test]
    fn rotate_blocks() {
        let mut v: Vec<i32> = (0..10).collect();
        rotate(&mut v, 2, 3, 5);
        assert_eq!(v, [0, 1, 5, 6, 7, 8, 9, 2, 3, 4]);

        let mut v: Vec<i32> = (0..7).collect();
        rotate(&mut v, 0, 5, 2);
        assert_eq!(v, [5, 6, 0, 1, 2, 3, 4]);

        let mut v: Vec<i32> = (0..4).collect();
        rotate(&mut v, 0, 0, 4);
        assert_eq!(v, [0, 1, 2, 3]);
    }
}
