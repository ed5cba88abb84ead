//! Aggregate operators: reduce a whole sequence to one value.
//!
//! Every operator here drains its upstream (or, for `inner_product`, both
//! operands up to the shorter one).

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul};

use num_traits::One;

use super::natural_order;
use crate::compose::Operation;
use crate::error::{Result, SequenceError};
use crate::generator::Sequence;

/// Counts the elements of a sequence.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// assert_eq!(range(0, 7) | count(), 7);
/// ```
pub fn count<'a, T>() -> Operation<impl FnOnce(Sequence<'a, T>) -> usize> {
    Operation::new(|upstream: Sequence<'a, T>| upstream.count())
}

/// Counts the elements satisfying `predicate`.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let words = from(vec!["apple", "avocado", "banana"]);
/// assert_eq!(words | count_if(|word: &&str| word.starts_with('a')), 2);
/// ```
pub fn count_if<'a, T, P>(mut predicate: P) -> Operation<impl FnOnce(Sequence<'a, T>) -> usize>
where
    P: FnMut(&T) -> bool,
{
    Operation::new(move |upstream: Sequence<'a, T>| {
        upstream.filter(|element| predicate(element)).count()
    })
}

/// Returns the largest element.
///
/// When several elements are equally large, the first one wins.
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
/// assert_eq!(from(vec![3, 9, 4]) | max(), Ok(9));
/// assert!((Sequence::<i32>::empty() | max()).is_err());
/// ```
pub fn max<'a, T>() -> Operation<impl FnOnce(Sequence<'a, T>) -> Result<T>>
where
    T: PartialOrd,
{
    max_by(natural_order::<T>)
}

/// Returns the largest element according to `compare`.
///
/// When several elements are equally large, the first one wins.
///
/// # Errors
///
/// Returns [`SequenceError::Empty`] if the sequence has no elements.
pub fn max_by<'a, T, C>(mut compare: C) -> Operation<impl FnOnce(Sequence<'a, T>) -> Result<T>>
where
    C: FnMut(&T, &T) -> Ordering,
{
    Operation::new(move |mut upstream: Sequence<'a, T>| {
        let mut largest = upstream
            .next()
            .ok_or(SequenceError::Empty { operation: "max" })?;
        for element in upstream {
            if compare(&largest, &element) == Ordering::Less {
                largest = element;
            }
        }
        Ok(largest)
    })
}

/// Returns the smallest element.
///
/// When several elements are equally small, the first one wins.
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
/// assert_eq!(from(vec![3.5, -1.0, 4.0]) | min(), Ok(-1.0));
/// ```
pub fn min<'a, T>() -> Operation<impl FnOnce(Sequence<'a, T>) -> Result<T>>
where
    T: PartialOrd,
{
    min_by(natural_order::<T>)
}

/// Returns the smallest element according to `compare`.
///
/// When several elements are equally small, the first one wins.
///
/// # Errors
///
/// Returns [`SequenceError::Empty`] if the sequence has no elements.
pub fn min_by<'a, T, C>(mut compare: C) -> Operation<impl FnOnce(Sequence<'a, T>) -> Result<T>>
where
    C: FnMut(&T, &T) -> Ordering,
{
    Operation::new(move |mut upstream: Sequence<'a, T>| {
        let mut smallest = upstream
            .next()
            .ok_or(SequenceError::Empty { operation: "min" })?;
        for element in upstream {
            if compare(&element, &smallest) == Ordering::Less {
                smallest = element;
            }
        }
        Ok(smallest)
    })
}

/// Returns the smallest and the largest element in one pass.
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
/// assert_eq!(from(vec![4, 1, 8, 3]) | minmax(), Ok((1, 8)));
/// ```
pub fn minmax<'a, T>() -> Operation<impl FnOnce(Sequence<'a, T>) -> Result<(T, T)>>
where
    T: PartialOrd + Clone,
{
    minmax_by(natural_order::<T>)
}

/// Returns the smallest and the largest element according to `compare`.
///
/// Each element after the first is checked against the running minimum
/// first; only if it does not replace the minimum is it checked against the
/// running maximum. An element that replaces the minimum therefore never
/// replaces the maximum in the same step.
///
/// # Errors
///
/// Returns [`SequenceError::Empty`] if the sequence has no elements.
pub fn minmax_by<'a, T, C>(
    mut compare: C,
) -> Operation<impl FnOnce(Sequence<'a, T>) -> Result<(T, T)>>
where
    T: Clone,
    C: FnMut(&T, &T) -> Ordering,
{
    Operation::new(move |mut upstream: Sequence<'a, T>| {
        let head = upstream
            .next()
            .ok_or(SequenceError::Empty { operation: "minmax" })?;
        let mut smallest = head.clone();
        let mut largest = head;
        for element in upstream {
            if compare(&element, &smallest) == Ordering::Less {
                smallest = element;
            } else if compare(&largest, &element) == Ordering::Less {
                largest = element;
            }
        }
        Ok((smallest, largest))
    })
}

/// Adds up the elements, starting from `T::default()`.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// assert_eq!(range(1, 5) | sum(), 10);
/// ```
pub fn sum<'a, T>() -> Operation<impl FnOnce(Sequence<'a, T>) -> T>
where
    T: Default + Add<Output = T>,
{
    sum_with(T::default(), |total: T, element: T| total + element)
}

/// Folds the elements into `initial` with `add`.
///
/// The accumulator type may differ from the element type.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let words = from(vec!["lazy", "seq"]);
/// let joined = words | sum_with(String::from(">"), |mut total: String, word: &str| {
///     total.push_str(word);
///     total
/// });
/// assert_eq!(joined, ">lazyseq");
/// ```
pub fn sum_with<'a, T, A, F>(initial: A, add: F) -> Operation<impl FnOnce(Sequence<'a, T>) -> A>
where
    F: FnMut(A, T) -> A,
{
    Operation::new(move |upstream: Sequence<'a, T>| upstream.fold(initial, add))
}

/// Returns the arithmetic mean of the elements.
///
/// The divisor is counted in the element type: it starts at one and grows
/// by one for every element after the first, so integer sequences average
/// with integer division.
///
/// # Errors
///
/// Returns [`SequenceError::EmptyAverage`] if the sequence has no elements.
///
/// # Panics
///
/// Panics on overflow (in builds with overflow checks) when the element
/// count or the total does not fit in `T`. Averaging 300 `u8` values
/// overflows the divisor even if every value is zero; widen the elements
/// with `select` first.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// assert_eq!(from(vec![1.0, 2.0, 6.0]) | avg(), Ok(3.0));
/// assert_eq!(from(vec![1, 2]) | avg(), Ok(1));
/// ```
pub fn avg<'a, T>() -> Operation<impl FnOnce(Sequence<'a, T>) -> Result<T>>
where
    T: One + Add<Output = T> + Div<Output = T>,
{
    avg_with(|total: T, element: T| total + element, |total: T, divisor: T| {
        total / divisor
    })
}

/// Returns `divide(sum, count)` where both are built in the element type.
///
/// `add` combines the running total with each element after the first;
/// `divide` receives the total and the element count.
///
/// # Errors
///
/// Returns [`SequenceError::EmptyAverage`] if the sequence has no elements.
///
/// # Panics
///
/// The count is kept in `T` with `+`, so it panics (with overflow checks
/// enabled) once the sequence holds more elements than `T` can count.
pub fn avg_with<'a, T, A, D, R>(
    mut add: A,
    divide: D,
) -> Operation<impl FnOnce(Sequence<'a, T>) -> Result<R>>
where
    T: One + Add<Output = T>,
    A: FnMut(T, T) -> T,
    D: FnOnce(T, T) -> R,
{
    Operation::new(move |mut upstream: Sequence<'a, T>| {
        let mut total = upstream.next().ok_or(SequenceError::EmptyAverage)?;
        let mut divisor = T::one();
        for element in upstream {
            total = add(total, element);
            divisor = divisor + T::one();
        }
        Ok(divide(total, divisor))
    })
}

/// Sums the pairwise products of this sequence and `rhs`.
///
/// Pairs are formed in lock step; the longer operand's tail is ignored.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let weights = from(vec![3.0, 2.0, 1.0]);
/// assert_eq!(from(vec![1.0, 2.0, 3.0]) | inner_product(weights, 0.0), 10.0);
/// ```
pub fn inner_product<'a, T, U, R>(
    rhs: Sequence<'a, U>,
    initial: R,
) -> Operation<impl FnOnce(Sequence<'a, T>) -> R>
where
    T: Mul<U, Output = R>,
    R: Add<Output = R>,
{
    inner_product_with(
        rhs,
        initial,
        |total: R, product: R| total + product,
        |left: T, right: U| left * right,
    )
}

/// Folds the pairwise `multiply` results of this sequence and `rhs` with `add`.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// // Count positions where both sequences agree
/// let matches = from(vec!['a', 'b', 'c'])
///     | inner_product_with(
///         from(vec!['a', 'x', 'c', 'd']),
///         0,
///         |total: usize, same: bool| total + usize::from(same),
///         |left: char, right: char| left == right,
///     );
/// assert_eq!(matches, 2);
/// ```
pub fn inner_product_with<'a, T, U, R, M, A, F>(
    rhs: Sequence<'a, U>,
    initial: R,
    mut add: A,
    mut multiply: F,
) -> Operation<impl FnOnce(Sequence<'a, T>) -> R>
where
    A: FnMut(R, M) -> R,
    F: FnMut(T, U) -> M,
{
    Operation::new(move |upstream: Sequence<'a, T>| {
        upstream
            .zip(rhs)
            .fold(initial, |total, (left, right)| add(total, multiply(left, right)))
    })
}
