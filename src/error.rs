use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// A buffer contract violated at the byte-span boundary.
///
/// Typed slices cannot express these mistakes, so only [`ElemSlice`](crate::ElemSlice),
/// [`ElemBuf`](crate::ElemBuf) and the [`raw`](crate::raw) entry points report them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A non-empty buffer was described with an element size of zero.
    #[error("element size is zero but the buffer holds {len} bytes")]
    ZeroElementSize { len: usize },
    /// The buffer length is not a multiple of the element size.
    #[error("buffer of {len} bytes is not a whole number of {size}-byte elements")]
    RaggedBuffer { len: usize, size: usize },
    /// Two buffers passed to the same call use different element sizes.
    #[error("paired buffers disagree on element size ({left} vs {right} bytes)")]
    ElementSizeMismatch { left: usize, right: usize },
    /// A probe value is not exactly one element long.
    #[error("value of {value} bytes does not match the element size of {size} bytes")]
    ValueSizeMismatch { value: usize, size: usize },
    /// An output buffer cannot hold every element the call produces.
    #[error("output holds {available} elements but {required} are required")]
    OutputTooSmall { required: usize, available: usize },
    /// A rank or split point lies past the end of the buffer.
    #[error("index {index} out of range for buffer of {len} elements")]
    IndexOutOfBounds { index: usize, len: usize },
}
