#![cfg(feature = "operators")]
//! Property-based tests for operator laws.
//!
//! This module verifies, over generated inputs:
//!
//! - **Range**: `range(0, n)` has `n` elements and the k-th is `k * delta`
//! - **Take**: `take(n) | count()` is `min(n, length)`
//! - **Restriction**: everything `where_(p)` keeps satisfies `p`
//! - **Concat**: lengths add up and the left side comes first
//! - **Sort**: output is ordered, a permutation, and stable
//! - **Set algebra**: agreement with multiset counting on sorted input
//! - **Agreement with `std`**: operators match the equivalent iterator chain

use std::collections::BTreeMap;

use proptest::prelude::*;
use sequencing::prelude::*;

fn multiset(values: &[i32]) -> BTreeMap<i32, usize> {
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(*value).or_insert(0) += 1;
    }
    counts
}

fn sorted(mut values: Vec<i32>) -> Vec<i32> {
    values.sort_unstable();
    values
}

// =============================================================================
// Construction Laws
// =============================================================================

proptest! {
    /// `range(0, n) | count()` == n
    #[test]
    fn prop_range_count(length in 0_i32..500) {
        prop_assert_eq!(range(0, length) | count(), usize::try_from(length).unwrap());
    }

    /// The k-th element of `range_step(0, n, delta)` is `k * delta`
    #[test]
    fn prop_range_step_elements(finish in 0_i32..500, delta in 1_i32..20) {
        let values: Vec<i32> = range_step(0, finish, delta).unwrap().collect();
        for (index, value) in values.iter().enumerate() {
            prop_assert_eq!(*value, i32::try_from(index).unwrap() * delta);
            prop_assert!(*value < finish);
        }
        prop_assert_eq!(values.len(), usize::try_from((finish + delta - 1) / delta).unwrap());
    }

    /// Descending ranges mirror ascending ones
    #[test]
    fn prop_range_descending_mirrors_ascending(start in -200_i32..200, length in 0_i32..200) {
        let mut up: Vec<i32> = range(start - length + 1, start + 1).collect();
        up.reverse();
        let down: Vec<i32> = range(start, start - length).collect();
        prop_assert_eq!(up, down);
    }
}

// =============================================================================
// Partitioning and Restriction Laws
// =============================================================================

proptest! {
    /// `take(n) | count()` == min(n, length)
    #[test]
    fn prop_take_count(values in prop::collection::vec(any::<i32>(), 0..50), count_limit in 0_usize..80) {
        let expected = count_limit.min(values.len());
        prop_assert_eq!(from(values) | take(count_limit) | count(), expected);
    }

    /// `page(index, size)` skips `index * size` elements and keeps `size`
    #[test]
    fn prop_page_matches_skip_take(values in prop::collection::vec(any::<i32>(), 0..50), index in 0_usize..10, size in 0_usize..10) {
        let paged: Vec<i32> = (from(values.clone()) | page(index, size)).collect();
        let expected: Vec<i32> = values.into_iter().skip(index * size).take(size).collect();
        prop_assert_eq!(paged, expected);
    }

    /// `where_(p) | all(p)` always holds
    #[test]
    fn prop_where_then_all(values in prop::collection::vec(any::<i32>(), 0..50), divisor in 1_i32..7) {
        let kept = from(values) | where_(move |value: &i32| value % divisor == 0);
        prop_assert!(kept | all(move |value: &i32| value % divisor == 0));
    }

    /// `take_while` and `skip_while` split a sequence at the same point
    #[test]
    fn prop_take_while_skip_while_partition(values in prop::collection::vec(0_i32..10, 0..50), pivot in 0_i32..10) {
        let head: Vec<i32> = (from(values.clone()) | take_while(move |value: &i32| *value < pivot)).collect();
        let tail: Vec<i32> = (from(values.clone()) | skip_while(move |value: &i32| *value < pivot)).collect();
        prop_assert_eq!([head, tail].concat(), values);
    }
}

// =============================================================================
// Concat and Ordering Laws
// =============================================================================

proptest! {
    /// Lengths add and the left side precedes the right side
    #[test]
    fn prop_concat(left in prop::collection::vec(any::<i32>(), 0..30), right in prop::collection::vec(any::<i32>(), 0..30)) {
        let joined: Vec<i32> = (from(left.clone()) | concat(from(right.clone()))).collect();
        prop_assert_eq!(joined.len(), left.len() + right.len());
        prop_assert_eq!(&joined[..left.len()], left.as_slice());
        prop_assert_eq!(&joined[left.len()..], right.as_slice());
    }

    /// `sort` output is ascending and a permutation of its input
    #[test]
    fn prop_sort_orders_and_permutes(values in prop::collection::vec(any::<i32>(), 0..60)) {
        let result: Vec<i32> = (from(values.clone()) | sort(values.len())).collect();
        prop_assert!(result.windows(2).all(|pair| pair[0] <= pair[1]));
        prop_assert_eq!(multiset(&result), multiset(&values));
    }

    /// Equal keys keep their input order
    #[test]
    fn prop_sort_by_key_is_stable(keys in prop::collection::vec(0_u8..4, 0..60)) {
        let tagged: Vec<(u8, usize)> = keys.into_iter().enumerate().map(|(tag, key)| (key, tag)).collect();
        let result: Vec<(u8, usize)> = (from(tagged) | sort_by_key(0, |pair: &(u8, usize)| pair.0)).collect();
        prop_assert!(result.windows(2).all(|pair| pair[0].0 < pair[1].0 || (pair[0].0 == pair[1].0 && pair[0].1 < pair[1].1)));
    }

    /// Reversing twice restores the input
    #[test]
    fn prop_reverse_involution(values in prop::collection::vec(any::<i32>(), 0..60)) {
        let restored: Vec<i32> = (from(values.clone()) | reverse(0) | reverse(0)).collect();
        prop_assert_eq!(restored, values);
    }
}

// =============================================================================
// Set Algebra Laws
// =============================================================================

proptest! {
    /// Union, intersection, difference, and symmetric difference emit each
    /// element max(m, n), min(m, n), max(m - n, 0), and |m - n| times
    #[test]
    fn prop_set_algebra_multiset_counts(left in prop::collection::vec(0_i32..8, 0..30), right in prop::collection::vec(0_i32..8, 0..30)) {
        let (left, right) = (sorted(left), sorted(right));
        let (left_counts, right_counts) = (multiset(&left), multiset(&right));

        let union: Vec<i32> = (from(left.clone()) | union_with(from(right.clone()))).collect();
        let intersection: Vec<i32> = (from(left.clone()) | intersect_with(from(right.clone()))).collect();
        let difference: Vec<i32> = (from(left.clone()) | except(from(right.clone()))).collect();
        let symmetric: Vec<i32> = (from(left) | symmetric_difference(from(right))).collect();

        let (union_counts, intersection_counts) = (multiset(&union), multiset(&intersection));
        let (difference_counts, symmetric_counts) = (multiset(&difference), multiset(&symmetric));
        for element in 0..8 {
            let occurrences = |counts: &BTreeMap<i32, usize>| counts.get(&element).copied().unwrap_or(0);
            let (in_left, in_right) = (occurrences(&left_counts), occurrences(&right_counts));
            prop_assert_eq!(occurrences(&union_counts), in_left.max(in_right));
            prop_assert_eq!(occurrences(&intersection_counts), in_left.min(in_right));
            prop_assert_eq!(occurrences(&difference_counts), in_left.saturating_sub(in_right));
            prop_assert_eq!(occurrences(&symmetric_counts), in_left.abs_diff(in_right));
        }
        prop_assert!(union.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}

// =============================================================================
// Agreement with std iterators
// =============================================================================

proptest! {
    /// A filter-map-sum query agrees with the iterator chain
    #[test]
    fn prop_query_matches_iterator_chain(values in prop::collection::vec(-1000_i64..1000, 0..60)) {
        let expected: i64 = values.iter().filter(|value| **value > 0).map(|value| value * 3).sum();
        let actual = from(values) | where_(|value: &i64| *value > 0) | select(|value: i64| value * 3) | sum();
        prop_assert_eq!(actual, expected);
    }

    /// `max`/`min` agree with `Iterator::max`/`Iterator::min`
    #[test]
    fn prop_extrema_match_iterator(values in prop::collection::vec(any::<i32>(), 1..60)) {
        prop_assert_eq!(from(values.clone()) | max(), Ok(*values.iter().max().unwrap()));
        prop_assert_eq!(from(values.clone()) | min(), Ok(*values.iter().min().unwrap()));
        let (smallest, largest) = (from(values.clone()) | minmax()).unwrap();
        prop_assert_eq!((smallest, largest), (*values.iter().min().unwrap(), *values.iter().max().unwrap()));
    }

    /// `element_at(i)` agrees with `nth(i)`
    #[test]
    fn prop_element_at_matches_nth(values in prop::collection::vec(any::<u16>(), 0..20), index in 0_usize..25) {
        let expected = values.get(index).copied();
        prop_assert_eq!((from(values) | element_at(index)).ok(), expected);
    }

    /// `zip_with` stops at the shorter operand
    #[test]
    fn prop_zip_length(left in 0_usize..40, right in 0_usize..40) {
        let zipped = generate(|| 'l', left) | zip_with(generate(|| 'r', right));
        prop_assert_eq!(zipped | count(), left.min(right));
    }

    /// `pairwise` yields floor(n / 2) pairs, plus one with a captured remainder
    #[test]
    fn prop_pairwise_length(length in 0_usize..40) {
        let ignored = generate(|| 1_u8, length) | pairwise(PairwiseCapture::IgnoreRemainder) | count();
        let captured = generate(|| 1_u8, length) | pairwise(PairwiseCapture::UseRemainder) | count();
        prop_assert_eq!(ignored, length / 2);
        prop_assert_eq!(captured, length.div_ceil(2));
    }
}
