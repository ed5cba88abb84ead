//! Concatenation and merge-based set algebra.
//!
//! The set operators treat both operands as sorted multisets and make one
//! linear pass over them with a [`MergeJoin`]. An element occurring `m`
//! times on the left and `n` times on the right is emitted:
//!
//! | operator               | times          |
//! |------------------------|----------------|
//! | `union_with`           | `max(m, n)`    |
//! | `intersect_with`       | `min(m, n)`    |
//! | `except`               | `max(m - n, 0)`|
//! | `symmetric_difference` | `\|m - n\|`    |
//!
//! When a left and a right element compare equal, the left one is emitted.
//!
//! Both operands must be sorted by the comparator in use (ascending
//! `PartialOrd` for the plain forms). This is not checked and nothing is
//! sorted implicitly; unsorted input gives unspecified output.

use std::cmp::Ordering;

use super::natural_order;
use crate::adapter::{MergeJoin, Merged};
use crate::compose::Operation;
use crate::generator::Sequence;

/// Emits every element of this sequence, then every element of `rhs`.
///
/// `rhs` is not pulled until this sequence is exhausted.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let joined: Vec<i32> = (range(0, 2) | concat(range(5, 7))).collect();
/// assert_eq!(joined, vec![0, 1, 5, 6]);
/// ```
pub fn concat<'a, T>(
    rhs: Sequence<'a, T>,
) -> Operation<impl FnOnce(Sequence<'a, T>) -> Sequence<'a, T>>
where
    T: 'a,
{
    Operation::new(move |upstream: Sequence<'a, T>| {
        Sequence::new(move |sink| async move {
            sink.put_all(upstream).await;
            sink.put_all(rhs).await;
        })
    })
}

/// Merges two sorted sequences, keeping each element as often as the side
/// holding more of it.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let merged: Vec<i32> = (from(vec![1, 1, 4]) | union_with(from(vec![1, 3]))).collect();
/// assert_eq!(merged, vec![1, 1, 3, 4]);
/// ```
pub fn union_with<'a, T>(
    rhs: Sequence<'a, T>,
) -> Operation<impl FnOnce(Sequence<'a, T>) -> Sequence<'a, T>>
where
    T: PartialOrd + 'a,
{
    union_with_by(rhs, natural_order::<T>)
}

/// [`union_with`] for operands sorted by `compare`.
pub fn union_with_by<'a, T, C>(
    rhs: Sequence<'a, T>,
    compare: C,
) -> Operation<impl FnOnce(Sequence<'a, T>) -> Sequence<'a, T>>
where
    T: 'a,
    C: FnMut(&T, &T) -> Ordering + 'a,
{
    Operation::new(move |upstream: Sequence<'a, T>| {
        Sequence::new(move |sink| async move {
            for step in MergeJoin::new(upstream, rhs, compare) {
                sink.put(step.into_preferred()).await;
            }
        })
    })
}

/// Keeps the elements both sorted sequences share.
///
/// Stops pulling as soon as either side is exhausted.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let shared: Vec<i32> = (range(7, 15) | intersect_with(range(0, 10))).collect();
/// assert_eq!(shared, vec![7, 8, 9]);
/// ```
pub fn intersect_with<'a, T>(
    rhs: Sequence<'a, T>,
) -> Operation<impl FnOnce(Sequence<'a, T>) -> Sequence<'a, T>>
where
    T: PartialOrd + 'a,
{
    intersect_with_by(rhs, natural_order::<T>)
}

/// [`intersect_with`] for operands sorted by `compare`.
pub fn intersect_with_by<'a, T, C>(
    rhs: Sequence<'a, T>,
    compare: C,
) -> Operation<impl FnOnce(Sequence<'a, T>) -> Sequence<'a, T>>
where
    T: 'a,
    C: FnMut(&T, &T) -> Ordering + 'a,
{
    Operation::new(move |upstream: Sequence<'a, T>| {
        Sequence::new(move |sink| async move {
            let mut merge = MergeJoin::new(upstream, rhs, compare);
            while !merge.right_exhausted() && !merge.left_exhausted() {
                if let Some(Merged::Both(value, _)) = merge.next() {
                    sink.put(value).await;
                }
            }
        })
    })
}

/// Keeps the elements of this sorted sequence that `rhs` does not cancel.
///
/// Stops pulling as soon as the left side is exhausted.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let odds = range_step(1, 15, 2).unwrap();
/// let evens: Vec<i32> = (range(0, 15) | except(odds)).collect();
/// assert_eq!(evens, vec![0, 2, 4, 6, 8, 10, 12, 14]);
/// ```
pub fn except<'a, T>(
    rhs: Sequence<'a, T>,
) -> Operation<impl FnOnce(Sequence<'a, T>) -> Sequence<'a, T>>
where
    T: PartialOrd + 'a,
{
    except_by(rhs, natural_order::<T>)
}

/// [`except`] for operands sorted by `compare`.
pub fn except_by<'a, T, C>(
    rhs: Sequence<'a, T>,
    compare: C,
) -> Operation<impl FnOnce(Sequence<'a, T>) -> Sequence<'a, T>>
where
    T: 'a,
    C: FnMut(&T, &T) -> Ordering + 'a,
{
    Operation::new(move |upstream: Sequence<'a, T>| {
        Sequence::new(move |sink| async move {
            let mut merge = MergeJoin::new(upstream, rhs, compare);
            while !merge.left_exhausted() {
                if let Some(Merged::Left(value)) = merge.next() {
                    sink.put(value).await;
                }
            }
        })
    })
}

/// Keeps the elements found on one side more often than on the other.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let unique: Vec<i32> =
///     (from(vec![1, 2, 2, 5]) | symmetric_difference(from(vec![2, 3, 5]))).collect();
/// assert_eq!(unique, vec![1, 2, 3]);
/// ```
pub fn symmetric_difference<'a, T>(
    rhs: Sequence<'a, T>,
) -> Operation<impl FnOnce(Sequence<'a, T>) -> Sequence<'a, T>>
where
    T: PartialOrd + 'a,
{
    symmetric_difference_by(rhs, natural_order::<T>)
}

/// [`symmetric_difference`] for operands sorted by `compare`.
pub fn symmetric_difference_by<'a, T, C>(
    rhs: Sequence<'a, T>,
    compare: C,
) -> Operation<impl FnOnce(Sequence<'a, T>) -> Sequence<'a, T>>
where
    T: 'a,
    C: FnMut(&T, &T) -> Ordering + 'a,
{
    Operation::new(move |upstream: Sequence<'a, T>| {
        Sequence::new(move |sink| async move {
            for step in MergeJoin::new(upstream, rhs, compare) {
                match step {
                    Merged::Left(value) | Merged::Right(value) => sink.put(value).await,
                    Merged::Both(..) => {}
                }
            }
        })
    })
}
