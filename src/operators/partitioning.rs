//! Partitioning operators: keep a prefix, drop a prefix, or cut a page.
//!
//! None of these materialize. `take` and `take_while` stop pulling as soon
//! as their answer is known, which makes them safe on infinite producers.

use crate::compose::Operation;
use crate::generator::Sequence;

/// Emits at most the first `count` elements.
///
/// The upstream is asked for an element only while fewer than `count` have
/// been emitted, so `take(0)` never pulls.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let naturals = Sequence::new(|sink| async move {
///     let mut value = 0_u64;
///     loop {
///         sink.put(value).await;
///         value += 1;
///     }
/// });
/// let prefix: Vec<u64> = (naturals | take(3)).collect();
/// assert_eq!(prefix, vec![0, 1, 2]);
/// ```
pub fn take<'a, T>(count: usize) -> Operation<impl FnOnce(Sequence<'a, T>) -> Sequence<'a, T>>
where
    T: 'a,
{
    Operation::new(move |mut upstream: Sequence<'a, T>| {
        Sequence::new(move |sink| async move {
            let mut remaining = count;
            while remaining > 0 {
                let Some(element) = upstream.next() else {
                    break;
                };
                remaining -= 1;
                sink.put(element).await;
            }
        })
    })
}

/// Emits elements while `predicate` holds, then stops.
///
/// The first failing element is pulled (to test it) but not emitted.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let small: Vec<i32> = (from(vec![1, 2, 7, 3]) | take_while(|value: &i32| *value < 5)).collect();
/// assert_eq!(small, vec![1, 2]);
/// ```
pub fn take_while<'a, T, P>(
    mut predicate: P,
) -> Operation<impl FnOnce(Sequence<'a, T>) -> Sequence<'a, T>>
where
    T: 'a,
    P: FnMut(&T) -> bool + 'a,
{
    Operation::new(move |upstream: Sequence<'a, T>| {
        Sequence::new(move |sink| async move {
            for element in upstream {
                if !predicate(&element) {
                    break;
                }
                sink.put(element).await;
            }
        })
    })
}

/// Drops the first `count` elements and emits the rest.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let tail: Vec<i32> = (range(0, 5) | skip(3)).collect();
/// assert_eq!(tail, vec![3, 4]);
/// ```
pub fn skip<'a, T>(count: usize) -> Operation<impl FnOnce(Sequence<'a, T>) -> Sequence<'a, T>>
where
    T: 'a,
{
    Operation::new(move |upstream: Sequence<'a, T>| {
        Sequence::new(move |sink| async move {
            for (position, element) in upstream.enumerate() {
                if position >= count {
                    sink.put(element).await;
                }
            }
        })
    })
}

/// Drops elements while `predicate` holds, then emits everything after.
///
/// Once an element fails the predicate it is emitted and the predicate is
/// never called again.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let rest: Vec<i32> = (from(vec![1, 2, 7, 3]) | skip_while(|value: &i32| *value < 5)).collect();
/// assert_eq!(rest, vec![7, 3]);
/// ```
pub fn skip_while<'a, T, P>(
    mut predicate: P,
) -> Operation<impl FnOnce(Sequence<'a, T>) -> Sequence<'a, T>>
where
    T: 'a,
    P: FnMut(&T) -> bool + 'a,
{
    Operation::new(move |upstream: Sequence<'a, T>| {
        Sequence::new(move |sink| async move {
            let mut skipping = true;
            for element in upstream {
                if skipping && predicate(&element) {
                    continue;
                }
                skipping = false;
                sink.put(element).await;
            }
        })
    })
}

/// Emits the `index`-th page of `size` elements (pages count from zero).
///
/// Equivalent to `skip(index * size)` followed by `take(size)`, run as a
/// single producer. The offset saturates instead of overflowing, and like
/// [`take`] the upstream is not pulled once the page is full.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let second_page: Vec<i32> = (range(0, 10) | page(1, 4)).collect();
/// assert_eq!(second_page, vec![4, 5, 6, 7]);
/// ```
pub fn page<'a, T>(
    index: usize,
    size: usize,
) -> Operation<impl FnOnce(Sequence<'a, T>) -> Sequence<'a, T>>
where
    T: 'a,
{
    Operation::new(move |mut upstream: Sequence<'a, T>| {
        Sequence::new(move |sink| async move {
            if size == 0 {
                return;
            }
            let mut offset = index.saturating_mul(size);
            while offset > 0 {
                if upstream.next().is_none() {
                    return;
                }
                offset -= 1;
            }
            let mut remaining = size;
            while remaining > 0 {
                let Some(element) = upstream.next() else {
                    break;
                };
                remaining -= 1;
                sink.put(element).await;
            }
        })
    })
}
