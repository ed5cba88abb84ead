//! # sequencing
//!
//! Lazy, single-pass sequences written as imperative producers and queried
//! with composable operators.
//!
//! ## Overview
//!
//! A [`Sequence`](generator::Sequence) wraps a producer: an `async` body that
//! pushes values one at a time into a [`Sink`](generator::Sink). The
//! consumer pulls the sequence like any other iterator, and each pull runs
//! the producer just far enough to emit the next value. No threads are
//! involved.
//!
//! On top of that engine sits a catalog of LINQ-style operators:
//!
//! - **Generator**: `Sequence`, `Sink`, and the suspend/resume machinery
//! - **Composition**: `Operation`, the `|` pipe, `pipe!` and `compose!`
//! - **Adapters**: the sorted-merge co-scan and materialization buffers
//! - **Operators**: filtering, projection, ordering, set algebra,
//!   aggregation, element access, and construction
//! - **Errors**: `SequenceError` for operators that can fail on their input
//!
//! ## Feature Flags
//!
//! - `operators`: the operator catalog (enabled by default)
//! - `smallvec`: `Buffer` support for `smallvec::SmallVec`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use sequencing::prelude::*;
//!
//! let fibonacci = Sequence::new(|sink| async move {
//!     let (mut current, mut next) = (0_u64, 1_u64);
//!     loop {
//!         sink.put(current).await;
//!         (current, next) = (next, current + next);
//!     }
//! });
//!
//! let even_terms: Vec<u64> = (fibonacci
//!     | where_(|value: &u64| value % 2 == 0)
//!     | take(5))
//!     .collect();
//! assert_eq!(even_terms, vec![0, 2, 8, 34, 144]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the sequence type, the composition protocol, the error type,
/// and (with the `operators` feature) every operator.
///
/// # Usage
///
/// ```rust
/// use sequencing::prelude::*;
/// ```
pub mod prelude {
    pub use crate::adapter::Buffer;
    pub use crate::compose::*;
    pub use crate::error::{ErrorKind, SequenceError};
    pub use crate::generator::{Sequence, Sink};

    #[cfg(feature = "operators")]
    pub use crate::operators::*;
}

pub mod adapter;
pub mod compose;
pub mod error;
pub mod generator;

#[cfg(feature = "operators")]
pub mod operators;
