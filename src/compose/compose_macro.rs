//! The `compose!` macro for operation composition.
//!
//! This module provides the [`compose!`] macro which composes operations
//! from right to left, following the mathematical notation for function composition.

/// Composes operations from right to left.
///
/// `compose!(f, g, h)` builds one operation that applies `h`, then `g`, then
/// `f`. It is the mirror image of chaining with
/// [`Operation::then`](crate::compose::Operation::then):
/// `compose!(f, g) == g.then(f)`.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity(), f) == f`
/// - **Right Identity**: `compose!(f, identity()) == f`
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Returns `g.then(f)`
/// - `compose!(f, g, h, ...)` - Composes any number of operations
///
/// # Examples
///
/// ```
/// use sequencing::prelude::*;
///
/// // Count the squares of the odd numbers below 10 that exceed 10
/// let query = compose!(
///     count(),
///     where_(|square: &i32| *square > 10),
///     select(|value: i32| value * value),
///     where_(|value: &i32| value % 2 == 1)
/// );
/// assert_eq!(range(0, 10) | query, 3);
/// ```
#[macro_export]
macro_rules! compose {
    // Single operation: identity composition
    ($operation:expr) => {
        $operation
    };

    // Two operations: compose!(f, g) applies g first
    ($outer_operation:expr, $inner_operation:expr $(,)?) => {
        $crate::compose::Operation::then($inner_operation, $outer_operation)
    };

    // Three or more operations: compose!(f, g, h, ...) = compose!(f, compose!(g, h, ...))
    ($outer_operation:expr, $($remaining_operations:expr),+ $(,)?) => {
        $crate::compose::Operation::then(
            $crate::compose!($($remaining_operations),+),
            $outer_operation,
        )
    };
}
