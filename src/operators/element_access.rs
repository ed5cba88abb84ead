//! Element access operators: pick one element, or ask about membership.
//!
//! Each accessor has three forms: the plain one fails with a
//! [`SequenceError`], the `_or` form returns a caller-supplied fallback, and
//! the `_or_default` form returns `T::default()`.

use crate::compose::Operation;
use crate::error::{Result, SequenceError};
use crate::generator::Sequence;

/// Returns the first element.
///
/// Pulls exactly one element; the rest of the sequence is never produced.
///
/// # Errors
///
/// Returns [`SequenceError::Empty`] if the sequence has no elements.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// assert_eq!(range(5, 1_000_000) | first(), Ok(5));
/// ```
pub fn first<'a, T>() -> Operation<impl FnOnce(Sequence<'a, T>) -> Result<T>> {
    Operation::new(|mut upstream: Sequence<'a, T>| {
        upstream
            .next()
            .ok_or(SequenceError::Empty { operation: "first" })
    })
}

/// Returns the first element, or `fallback` if there is none.
pub fn first_or<'a, T>(fallback: T) -> Operation<impl FnOnce(Sequence<'a, T>) -> T> {
    Operation::new(move |mut upstream: Sequence<'a, T>| upstream.next().unwrap_or(fallback))
}

/// Returns the first element, or `T::default()` if there is none.
pub fn first_or_default<'a, T>() -> Operation<impl FnOnce(Sequence<'a, T>) -> T>
where
    T: Default,
{
    Operation::new(|mut upstream: Sequence<'a, T>| upstream.next().unwrap_or_default())
}

/// Returns the last element, draining the sequence.
///
/// # Errors
///
/// Returns [`SequenceError::Empty`] if the sequence has no elements.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// assert_eq!(range(0, 4) | last(), Ok(3));
/// ```
pub fn last<'a, T>() -> Operation<impl FnOnce(Sequence<'a, T>) -> Result<T>> {
    Operation::new(|upstream: Sequence<'a, T>| {
        upstream
            .last()
            .ok_or(SequenceError::Empty { operation: "last" })
    })
}

/// Returns the last element, or `fallback` if there is none.
pub fn last_or<'a, T>(fallback: T) -> Operation<impl FnOnce(Sequence<'a, T>) -> T> {
    Operation::new(move |upstream: Sequence<'a, T>| upstream.last().unwrap_or(fallback))
}

/// Returns the last element, or `T::default()` if there is none.
pub fn last_or_default<'a, T>() -> Operation<impl FnOnce(Sequence<'a, T>) -> T>
where
    T: Default,
{
    Operation::new(|upstream: Sequence<'a, T>| upstream.last().unwrap_or_default())
}

/// Returns the only element.
///
/// Pulls at most two elements.
///
/// # Errors
///
/// Returns [`SequenceError::Empty`] if the sequence has no elements and
/// [`SequenceError::MultipleElements`] if it has more than one.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// assert_eq!(from(vec!["only"]) | single(), Ok("only"));
/// assert_eq!(range(0, 2) | single(), Err(SequenceError::MultipleElements));
/// ```
pub fn single<'a, T>() -> Operation<impl FnOnce(Sequence<'a, T>) -> Result<T>> {
    Operation::new(|mut upstream: Sequence<'a, T>| {
        let only = upstream
            .next()
            .ok_or(SequenceError::Empty { operation: "single" })?;
        match upstream.next() {
            Some(_) => Err(SequenceError::MultipleElements),
            None => Ok(only),
        }
    })
}

/// Returns the only element, or `fallback` if there are zero or several.
pub fn single_or<'a, T>(fallback: T) -> Operation<impl FnOnce(Sequence<'a, T>) -> T> {
    Operation::new(move |upstream: Sequence<'a, T>| single().apply(upstream).unwrap_or(fallback))
}

/// Returns the only element, or `T::default()` if there are zero or several.
pub fn single_or_default<'a, T>() -> Operation<impl FnOnce(Sequence<'a, T>) -> T>
where
    T: Default,
{
    Operation::new(|upstream: Sequence<'a, T>| single().apply(upstream).unwrap_or_default())
}

/// Returns the element at zero-based position `index`.
///
/// Pulls `index + 1` elements, or the whole sequence if it is shorter.
///
/// # Errors
///
/// Returns [`SequenceError::IndexOutOfRange`] if the sequence has `index`
/// elements or fewer.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// assert_eq!(from(vec!['a', 'b', 'c']) | element_at(1), Ok('b'));
/// assert_eq!(
///     from(vec!['a']) | element_at(3),
///     Err(SequenceError::IndexOutOfRange { index: 3, length: 1 })
/// );
/// ```
pub fn element_at<'a, T>(index: usize) -> Operation<impl FnOnce(Sequence<'a, T>) -> Result<T>> {
    Operation::new(move |upstream: Sequence<'a, T>| {
        let mut length = 0;
        for element in upstream {
            if length == index {
                return Ok(element);
            }
            length += 1;
        }
        tracing::debug!(index, length, "element_at walked past the end");
        Err(SequenceError::IndexOutOfRange { index, length })
    })
}

/// Returns the element at `index`, or `fallback` if the sequence is too short.
pub fn element_at_or<'a, T>(
    index: usize,
    fallback: T,
) -> Operation<impl FnOnce(Sequence<'a, T>) -> T> {
    Operation::new(move |mut upstream: Sequence<'a, T>| upstream.nth(index).unwrap_or(fallback))
}

/// Returns the element at `index`, or `T::default()` if the sequence is too
/// short.
pub fn element_at_or_default<'a, T>(
    index: usize,
) -> Operation<impl FnOnce(Sequence<'a, T>) -> T>
where
    T: Default,
{
    Operation::new(move |mut upstream: Sequence<'a, T>| upstream.nth(index).unwrap_or_default())
}

/// Returns `true` if some element equals `value`.
///
/// Stops pulling at the first match.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// assert!(range(0, 10) | contains(7));
/// assert!(!(range(0, 10) | contains(10)));
/// ```
pub fn contains<'a, T>(value: T) -> Operation<impl FnOnce(Sequence<'a, T>) -> bool>
where
    T: PartialEq,
{
    Operation::new(move |mut upstream: Sequence<'a, T>| upstream.any(|element| element == value))
}

/// Returns `true` if the sequence produces no elements.
///
/// Pulls at most one element.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// assert!(Sequence::<u8>::empty() | is_empty());
/// assert!(!(range(0, 1) | is_empty()));
/// ```
pub fn is_empty<'a, T>() -> Operation<impl FnOnce(Sequence<'a, T>) -> bool> {
    Operation::new(|mut upstream: Sequence<'a, T>| upstream.is_empty())
}
