//! Bridges between sequences and per-element algorithms.
//!
//! The pull side needs no adapter: [`Sequence`](crate::generator::Sequence)
//! is an [`Iterator`], so every standard iterator algorithm consumes it
//! directly. On the push side, [`Sink::put_all`](crate::generator::Sink::put_all)
//! forwards any iterator into a producer's sink element by element.
//!
//! This module adds the two pieces the operator catalog builds on:
//!
//! - [`MergeJoin`]: a linear co-scan over two sorted inputs
//! - [`Buffer`]: the storage used when an operator must materialize
//!
//! # Examples
//!
//! ```rust
//! use sequencing::adapter::{MergeJoin, Merged};
//!
//! // Elements present in exactly one of two sorted inputs
//! let unique: Vec<i32> = MergeJoin::new(vec![1, 2, 4], vec![2, 3], |l: &i32, r: &i32| l.cmp(r))
//!     .filter_map(|step| match step {
//!         Merged::Left(value) | Merged::Right(value) => Some(value),
//!         Merged::Both(..) => None,
//!     })
//!     .collect();
//! assert_eq!(unique, vec![1, 3, 4]);
//! ```

mod buffer;
mod merge;

pub use buffer::Buffer;
pub use merge::{MergeJoin, Merged};
