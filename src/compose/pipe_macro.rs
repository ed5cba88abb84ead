//! The `pipe!` macro for left-to-right operation application.
//!
//! This module provides the [`pipe!`] macro which applies operations
//! from left to right, following the data flow of a query.

/// Pipes a sequence through a series of operations from left to right.
///
/// `pipe!(s, f, g, h)` is equivalent to `s | f | g | h`.
///
/// Each operation consumes the result of the one before it. The last
/// operation may return a scalar.
///
/// # Syntax
///
/// - `pipe!(s)` - Returns `s` unchanged
/// - `pipe!(s, f)` - Returns `s | f`
/// - `pipe!(s, f, g, ...)` - Returns `s | f | g | ...`
///
/// # Examples
///
/// ## Filter then count
///
/// ```
/// use sequencing::prelude::*;
///
/// let evens = pipe!(range(0, 10), where_(|value: &i32| value % 2 == 0), count());
/// assert_eq!(evens, 5);
/// ```
///
/// ## Sequence to sequence
///
/// ```
/// use sequencing::prelude::*;
///
/// let labels: Vec<String> = pipe!(
///     from(vec![3, 1, 2]),
///     sort(0),
///     select(|value: i32| format!("#{value}"))
/// )
/// .collect();
/// assert_eq!(labels, vec!["#1", "#2", "#3"]);
/// ```
#[macro_export]
macro_rules! pipe {
    // Sequence only: return as is
    ($sequence:expr) => {
        $sequence
    };

    // Single operation: apply it
    ($sequence:expr, $operation:expr $(,)?) => {
        $crate::compose::Operation::apply($operation, $sequence)
    };

    // Multiple operations: apply left to right recursively
    ($sequence:expr, $operation:expr, $($remaining_operations:expr),+ $(,)?) => {
        $crate::pipe!(
            $crate::compose::Operation::apply($operation, $sequence),
            $($remaining_operations),+
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::compose::Operation;
    use crate::generator::Sequence;

    fn digits() -> Sequence<'static, u32> {
        Sequence::new(|sink| async move { sink.put_all(0..10).await })
    }

    #[test]
    fn test_pipe_sequence_only() {
        let result: Vec<u32> = pipe!(digits()).collect();
        assert_eq!(result.len(), 10);
    }

    #[test]
    fn test_pipe_single() {
        let length = Operation::new(|sequence: Sequence<'static, u32>| sequence.count());
        assert_eq!(pipe!(digits(), length), 10);
    }

    #[test]
    fn test_pipe_two() {
        let halve = Operation::new(|sequence: Sequence<'static, u32>| {
            Sequence::new(move |sink| async move {
                for value in sequence {
                    sink.put(value / 2).await;
                }
            })
        });
        let total = Operation::new(|sequence: Sequence<'static, u32>| sequence.sum::<u32>());
        // 0+0+1+1+2+2+3+3+4+4 = 20
        assert_eq!(pipe!(digits(), halve, total), 20);
    }
}
