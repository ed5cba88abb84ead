//! Reordering operators.
//!
//! Sorting and reversing need every element before the first one can be
//! emitted, so these operators materialize their upstream into a
//! [`Buffer`] on the first pull. `reserve` is a capacity hint for that
//! buffer; the `_in` forms choose the buffer type.

use std::cmp::Ordering;

use super::natural_order;
use crate::adapter::Buffer;
use crate::compose::Operation;
use crate::generator::Sequence;

/// Sorts the elements in ascending order.
///
/// The sort is stable. Incomparable elements (such as `NaN`) are treated as
/// equal to everything, which makes the resulting order unspecified.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let sorted: Vec<i32> = (from(vec![3, 1, 2]) | sort(3)).collect();
/// assert_eq!(sorted, vec![1, 2, 3]);
/// ```
pub fn sort<'a, T>(reserve: usize) -> Operation<impl FnOnce(Sequence<'a, T>) -> Sequence<'a, T>>
where
    T: PartialOrd + 'a,
{
    sort_by(reserve, natural_order::<T>)
}

/// Sorts the elements with `compare`; the sort is stable.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let descending: Vec<i32> =
///     (range(0, 4) | sort_by(0, |left: &i32, right: &i32| right.cmp(left))).collect();
/// assert_eq!(descending, vec![3, 2, 1, 0]);
/// ```
pub fn sort_by<'a, T, C>(
    reserve: usize,
    compare: C,
) -> Operation<impl FnOnce(Sequence<'a, T>) -> Sequence<'a, T>>
where
    T: 'a,
    C: FnMut(&T, &T) -> Ordering + 'a,
{
    sort_by_in::<Vec<T>, T, C>(reserve, compare)
}

/// Sorts the elements by the key `key` extracts; the sort is stable.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let words = from(vec!["ccc", "a", "bb", "d"]);
/// let by_length: Vec<&str> = (words | sort_by_key(4, |word: &&str| word.len())).collect();
/// assert_eq!(by_length, vec!["a", "d", "bb", "ccc"]);
/// ```
pub fn sort_by_key<'a, T, K, F>(
    reserve: usize,
    mut key: F,
) -> Operation<impl FnOnce(Sequence<'a, T>) -> Sequence<'a, T>>
where
    T: 'a,
    K: PartialOrd,
    F: FnMut(&T) -> K + 'a,
{
    sort_by(reserve, move |left: &T, right: &T| natural_order(&key(left), &key(right)))
}

/// Sorts the elements with `compare`, materializing into a `B`.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let sorted: Vec<u8> = (from(vec![2_u8, 0, 1])
///     | sort_by_in::<Vec<u8>, _, _>(3, |left: &u8, right: &u8| left.cmp(right)))
///     .collect();
/// assert_eq!(sorted, vec![0, 1, 2]);
/// ```
pub fn sort_by_in<'a, B, T, C>(
    reserve: usize,
    compare: C,
) -> Operation<impl FnOnce(Sequence<'a, T>) -> Sequence<'a, T>>
where
    B: Buffer<T> + 'a,
    T: 'a,
    C: FnMut(&T, &T) -> Ordering + 'a,
{
    Operation::new(move |upstream: Sequence<'a, T>| {
        Sequence::new(move |sink| async move {
            let mut buffer = B::collect_from(reserve, upstream);
            buffer.sort_by(compare);
            sink.put_all(buffer).await;
        })
    })
}

/// Emits the elements in reverse order.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let backwards: Vec<char> = (from("abc".chars()) | reverse(3)).collect();
/// assert_eq!(backwards, vec!['c', 'b', 'a']);
/// ```
pub fn reverse<'a, T>(reserve: usize) -> Operation<impl FnOnce(Sequence<'a, T>) -> Sequence<'a, T>>
where
    T: 'a,
{
    reverse_in::<Vec<T>, T>(reserve)
}

/// Emits the elements in reverse order, materializing into a `B`.
pub fn reverse_in<'a, B, T>(
    reserve: usize,
) -> Operation<impl FnOnce(Sequence<'a, T>) -> Sequence<'a, T>>
where
    B: Buffer<T> + 'a,
    B::IntoIter: DoubleEndedIterator,
    T: 'a,
{
    Operation::new(move |upstream: Sequence<'a, T>| {
        Sequence::new(move |sink| async move {
            let buffer = B::collect_from(reserve, upstream);
            sink.put_all(buffer.into_iter().rev()).await;
        })
    })
}
