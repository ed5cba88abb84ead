//! Storage strategies for materializing operators.
//!
//! Operators that need every element at once (sorting, reversing, the right
//! side of a join) drain their upstream into a [`Buffer`]. The default is
//! [`Vec`]; with the `smallvec` feature, `SmallVec<[T; N]>` keeps short
//! inputs inline.

use std::ops::DerefMut;

/// A growable, owned store of elements used for materialization.
///
/// # Examples
///
/// ```rust
/// use sequencing::adapter::Buffer;
///
/// fn fill<B: Buffer<u8>>(values: &[u8]) -> B {
///     let mut buffer = B::with_capacity(values.len());
///     buffer.extend(values.iter().copied());
///     buffer
/// }
///
/// let buffer: Vec<u8> = fill(&[3, 1, 2]);
/// assert_eq!(buffer.len(), 3);
/// ```
pub trait Buffer<T>: Extend<T> + DerefMut<Target = [T]> + IntoIterator<Item = T> {
    /// Creates an empty buffer able to hold `capacity` elements without
    /// growing.
    fn with_capacity(capacity: usize) -> Self;

    /// Creates a buffer holding every element of `values`.
    ///
    /// `capacity` is a hint; the buffer grows past it as needed.
    fn collect_from<I>(capacity: usize, values: I) -> Self
    where
        Self: Sized,
        I: IntoIterator<Item = T>,
    {
        let mut buffer = Self::with_capacity(capacity);
        buffer.extend(values);
        tracing::trace!(
            elements = buffer.len(),
            capacity_hint = capacity,
            "materialized sequence"
        );
        buffer
    }
}

impl<T> Buffer<T> for Vec<T> {
    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }
}

#[cfg(feature = "smallvec")]
impl<A: smallvec::Array> Buffer<A::Item> for smallvec::SmallVec<A> {
    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }
}
