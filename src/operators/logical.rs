//! Quantifiers over a sequence.

use crate::compose::Operation;
use crate::generator::Sequence;

/// Returns `true` if some element satisfies `predicate`.
///
/// Stops pulling at the first match; an empty sequence yields `false`.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// assert!(range(0, 10) | any(|value: &i32| *value > 8));
/// ```
pub fn any<'a, T, P>(mut predicate: P) -> Operation<impl FnOnce(Sequence<'a, T>) -> bool>
where
    P: FnMut(&T) -> bool,
{
    Operation::new(move |mut upstream: Sequence<'a, T>| {
        upstream.any(|element| predicate(&element))
    })
}

/// Returns `true` if every element satisfies `predicate`.
///
/// Stops pulling at the first failure; an empty sequence yields `true`.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// assert!(range(0, 10) | all(|value: &i32| *value < 10));
/// assert!(Sequence::<i32>::empty() | all(|_: &i32| false));
/// ```
pub fn all<'a, T, P>(mut predicate: P) -> Operation<impl FnOnce(Sequence<'a, T>) -> bool>
where
    P: FnMut(&T) -> bool,
{
    Operation::new(move |mut upstream: Sequence<'a, T>| {
        upstream.all(|element| predicate(&element))
    })
}

/// Returns `true` if no element satisfies `predicate`.
///
/// Stops pulling at the first match; an empty sequence yields `true`.
pub fn none<'a, T, P>(predicate: P) -> Operation<impl FnOnce(Sequence<'a, T>) -> bool>
where
    P: FnMut(&T) -> bool,
{
    any(predicate).then(Operation::new(|found: bool| !found))
}
