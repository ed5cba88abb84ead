//! Deferred, move-only sequence transforms.
//!
//! An [`Operation`] wraps a function that consumes a sequence and returns a
//! new sequence or a scalar. Nothing happens until the operation is applied:
//!
//! - `sequence | operation`
//! - `sequence.pipe(operation)`
//! - `operation.apply(sequence)`
//!
//! All three consume the sequence.

use std::fmt;
use std::ops::BitOr;

use crate::generator::Sequence;

/// A deferred transform applied to a sequence.
///
/// `Operation<F>` is move-only: it is used at most once, by the sequence it
/// is applied to.
///
/// # Type Parameters
///
/// * `F` - The transform, a `FnOnce(Sequence<'a, T>) -> R`
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// // A custom operation: keep every other element
/// fn every_other<'a, T: 'a>() -> Operation<impl FnOnce(Sequence<'a, T>) -> Sequence<'a, T>> {
///     Operation::new(|upstream: Sequence<'a, T>| {
///         Sequence::new(move |sink| async move {
///             for (index, element) in upstream.enumerate() {
///                 if index % 2 == 0 {
///                     sink.put(element).await;
///                 }
///             }
///         })
///     })
/// }
///
/// let kept: Vec<i32> = (range(0, 7) | every_other()).collect();
/// assert_eq!(kept, vec![0, 2, 4, 6]);
/// ```
#[must_use = "operations do nothing until applied to a sequence"]
pub struct Operation<F> {
    transform: F,
}

impl<F> Operation<F> {
    /// Wraps a transform.
    #[inline]
    pub const fn new(transform: F) -> Self {
        Self { transform }
    }

    /// Applies the transform to `input`, consuming both.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequencing::prelude::*;
    ///
    /// assert_eq!(count().apply(range(0, 4)), 4);
    /// ```
    #[inline]
    pub fn apply<I, R>(self, input: I) -> R
    where
        F: FnOnce(I) -> R,
    {
        (self.transform)(input)
    }

    /// Builds an operation that applies `self` and then `next`.
    ///
    /// `(sequence | first.then(second))` is equivalent to
    /// `(sequence | first) | second`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequencing::prelude::*;
    ///
    /// let even_count = where_(|value: &i32| value % 2 == 0).then(count());
    /// assert_eq!(range(0, 10) | even_count, 5);
    /// ```
    pub fn then<I, R, G, S>(self, next: Operation<G>) -> Operation<impl FnOnce(I) -> S>
    where
        F: FnOnce(I) -> R,
        G: FnOnce(R) -> S,
    {
        let first = self.transform;
        let second = next.transform;
        Operation::new(move |input| second(first(input)))
    }

    /// Returns the wrapped transform.
    #[inline]
    pub fn into_inner(self) -> F {
        self.transform
    }
}

/// An operation that returns its input unchanged.
///
/// The unit of [`Operation::then`] in both positions.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let unchanged: Vec<i32> = (range(0, 3) | identity()).collect();
/// assert_eq!(unchanged, vec![0, 1, 2]);
/// ```
pub fn identity<I>() -> Operation<impl FnOnce(I) -> I> {
    Operation::new(|input| input)
}

impl<'a, T, F, R> BitOr<Operation<F>> for Sequence<'a, T>
where
    F: FnOnce(Self) -> R,
{
    type Output = R;

    #[inline]
    fn bitor(self, operation: Operation<F>) -> Self::Output {
        operation.apply(self)
    }
}

impl<F> fmt::Debug for Operation<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Operation").finish_non_exhaustive()
    }
}
