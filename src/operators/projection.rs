//! Projection operators: map, flatten, join, and drain with a side effect.

use crate::adapter::Buffer;
use crate::compose::Operation;
use crate::generator::Sequence;

/// Emits `project(element)` for every element.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let squares: Vec<i32> = (range(1, 4) | select(|value: i32| value * value)).collect();
/// assert_eq!(squares, vec![1, 4, 9]);
/// ```
pub fn select<'a, T, U, F>(
    mut project: F,
) -> Operation<impl FnOnce(Sequence<'a, T>) -> Sequence<'a, U>>
where
    T: 'a,
    U: 'a,
    F: FnMut(T) -> U + 'a,
{
    Operation::new(move |upstream: Sequence<'a, T>| {
        Sequence::new(move |sink| async move {
            for element in upstream {
                sink.put(project(element)).await;
            }
        })
    })
}

/// Maps every element to a collection and emits the collections' elements
/// in order.
///
/// Each inner collection is traversed only as far as the consumer pulls.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let expanded: Vec<i32> =
///     (range(1, 4) | select_many(|value: i32| std::iter::repeat_n(value, value as usize))).collect();
/// assert_eq!(expanded, vec![1, 2, 2, 3, 3, 3]);
/// ```
pub fn select_many<'a, T, U, I, F>(
    mut project: F,
) -> Operation<impl FnOnce(Sequence<'a, T>) -> Sequence<'a, U>>
where
    T: 'a,
    U: 'a,
    I: IntoIterator<Item = U> + 'a,
    F: FnMut(T) -> I + 'a,
{
    Operation::new(move |upstream: Sequence<'a, T>| {
        Sequence::new(move |sink| async move {
            for element in upstream {
                sink.put_all(project(element)).await;
            }
        })
    })
}

/// Inner-joins this sequence with `right` on equal keys.
///
/// For each left element, in order, every matching right element is
/// combined in right order. `right` is materialized on the first pull.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let people = from(vec![(1, "ada"), (2, "brian")]);
/// let pets = from(vec![(2, "rex"), (1, "tom"), (2, "kit")]);
/// let owned: Vec<String> = (people
///     | join(
///         pets,
///         |person: &(i32, &str)| person.0,
///         |pet: &(i32, &str)| pet.0,
///         |person: &(i32, &str), pet: &(i32, &str)| format!("{}:{}", person.1, pet.1),
///     ))
///     .collect();
/// assert_eq!(owned, vec!["ada:tom", "brian:rex", "brian:kit"]);
/// ```
pub fn join<'a, L, R, KL, KR, FL, FR, C, O>(
    right: Sequence<'a, R>,
    key_left: FL,
    key_right: FR,
    combine: C,
) -> Operation<impl FnOnce(Sequence<'a, L>) -> Sequence<'a, O>>
where
    L: 'a,
    R: 'a,
    KL: PartialEq<KR> + 'a,
    KR: 'a,
    O: 'a,
    FL: FnMut(&L) -> KL + 'a,
    FR: FnMut(&R) -> KR + 'a,
    C: FnMut(&L, &R) -> O + 'a,
{
    join_by(
        right,
        key_left,
        key_right,
        combine,
        |left: &KL, right: &KR| left == right,
        0,
    )
}

/// Inner-joins this sequence with `right`, matching keys with `equals`.
///
/// `reserve` is a capacity hint for the materialized right side.
pub fn join_by<'a, L, R, KL, KR, FL, FR, C, E, O>(
    right: Sequence<'a, R>,
    mut key_left: FL,
    mut key_right: FR,
    mut combine: C,
    mut equals: E,
    reserve: usize,
) -> Operation<impl FnOnce(Sequence<'a, L>) -> Sequence<'a, O>>
where
    L: 'a,
    R: 'a,
    KL: 'a,
    KR: 'a,
    O: 'a,
    FL: FnMut(&L) -> KL + 'a,
    FR: FnMut(&R) -> KR + 'a,
    C: FnMut(&L, &R) -> O + 'a,
    E: FnMut(&KL, &KR) -> bool + 'a,
{
    Operation::new(move |upstream: Sequence<'a, L>| {
        Sequence::new(move |sink| async move {
            let right: Vec<R> = Buffer::collect_from(reserve, right);
            for left in upstream {
                let left_key = key_left(&left);
                for candidate in &right {
                    if equals(&left_key, &key_right(candidate)) {
                        sink.put(combine(&left, candidate)).await;
                    }
                }
            }
        })
    })
}

/// Calls `action` on every element, draining the sequence.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let mut seen = Vec::new();
/// range(0, 3).pipe(for_each(|value: i32| seen.push(value)));
/// assert_eq!(seen, vec![0, 1, 2]);
/// ```
pub fn for_each<'a, T, F>(action: F) -> Operation<impl FnOnce(Sequence<'a, T>)>
where
    F: FnMut(T),
{
    Operation::new(move |upstream: Sequence<'a, T>| upstream.for_each(action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn values<'a, T: 'a>(elements: Vec<T>) -> Sequence<'a, T> {
        Sequence::new(|sink| async move { sink.put_all(elements).await })
    }

    #[rstest]
    fn test_select_changes_type() {
        let rendered: Vec<String> =
            (values(vec![1, 2]) | select(|value: i32| value.to_string())).collect();
        assert_eq!(rendered, vec!["1", "2"]);
    }

    #[rstest]
    fn test_select_many_pulls_lazily() {
        let projected = Cell::new(0);
        let counter = &projected;
        let mut flattened = values(vec![2, 3])
            | select_many(move |value: i32| {
                counter.set(counter.get() + 1);
                vec![value; 2]
            });
        assert_eq!(flattened.next(), Some(2));
        assert_eq!(flattened.next(), Some(2));
        assert_eq!(projected.get(), 1);
        assert_eq!(flattened.next(), Some(3));
        assert_eq!(projected.get(), 2);
    }

    #[rstest]
    fn test_select_many_skips_empty_groups() {
        let flattened: Vec<i32> =
            (values(vec![0, 2, 0]) | select_many(|value: i32| 0..value)).collect();
        assert_eq!(flattened, vec![0, 1]);
    }

    #[rstest]
    fn test_join_without_matches_is_empty() {
        let joined = values(vec![1, 2])
            | join(
                values(vec![3, 4]),
                |left: &i32| *left,
                |right: &i32| *right,
                |left: &i32, right: &i32| left + right,
            );
        assert_eq!(joined.count(), 0);
    }

    #[rstest]
    fn test_join_pairs_every_match_in_order() {
        let joined: Vec<(char, char)> = (values(vec![('a', 1), ('b', 1)])
            | join(
                values(vec![('x', 1), ('y', 1)]),
                |left: &(char, i32)| left.1,
                |right: &(char, i32)| right.1,
                |left: &(char, i32), right: &(char, i32)| (left.0, right.0),
            ))
        .collect();
        assert_eq!(joined, vec![('a', 'x'), ('a', 'y'), ('b', 'x'), ('b', 'y')]);
    }

    #[rstest]
    fn test_join_by_custom_equality() {
        let joined: Vec<(i32, i32)> = (values(vec![10, 21])
            | join_by(
                values(vec![1, 2, 3]),
                |left: &i32| *left,
                |right: &i32| *right,
                |left: &i32, right: &i32| (*left, *right),
                |left: &i32, right: &i32| left % 10 == *right,
                3,
            ))
        .collect();
        assert_eq!(joined, vec![(21, 1)]);
    }

    #[rstest]
    fn test_join_materializes_right_on_first_pull() {
        let started = Cell::new(false);
        let flag = &started;
        let right = Sequence::new(move |sink| async move {
            flag.set(true);
            sink.put(1).await;
        });
        let mut joined = values(vec![1])
            | join(
                right,
                |left: &i32| *left,
                |right: &i32| *right,
                |left: &i32, _: &i32| *left,
            );
        assert!(!started.get());
        assert_eq!(joined.next(), Some(1));
        assert!(started.get());
    }

    #[rstest]
    fn test_for_each_visits_in_order() {
        let mut visited = Vec::new();
        values(vec!['x', 'y']).pipe(for_each(|value: char| visited.push(value)));
        assert_eq!(visited, vec!['x', 'y']);
    }
}
