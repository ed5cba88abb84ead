//! The composition protocol.
//!
//! Every operator in this crate is an [`Operation`]: a deferred, move-only
//! transform from a sequence to a new sequence or to a scalar. This module
//! provides the wrapper and the ways to apply and combine it.
//!
//! # Overview
//!
//! - [`Operation`]: wraps a `FnOnce(Sequence<'a, T>) -> R`
//! - `sequence | operation`: applies the operation, consuming the sequence
//! - [`Operation::then`]: left-to-right composition of two operations
//! - [`identity`]: the operation that changes nothing
//! - [`pipe!`]: applies operations to a sequence left to right
//! - [`compose!`]: composes operations right to left
//!
//! # Examples
//!
//! ## Pipeline (left-to-right)
//!
//! ```
//! use sequencing::prelude::*;
//!
//! let total = range(1, 11)
//!     | where_(|value: &i32| value % 3 == 0)
//!     | select(|value: i32| value * 10)
//!     | sum();
//! assert_eq!(total, 180); // (3 + 6 + 9) * 10
//! ```
//!
//! ## Reusable queries
//!
//! ```
//! use sequencing::prelude::*;
//!
//! let top_three = sort_by(0, |left: &i32, right: &i32| right.cmp(left)).then(take(3));
//! let best: Vec<i32> = (from(vec![5, 9, 1, 7, 3]) | top_three).collect();
//! assert_eq!(best, vec![9, 7, 5]);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `f.then(g).then(h) == f.then(g.then(h))`
//! - **Left Identity**: `identity().then(f) == f`
//! - **Right Identity**: `f.then(identity()) == f`

mod compose_macro;
mod operation;
mod pipe_macro;

pub use operation::{Operation, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::pipe;
