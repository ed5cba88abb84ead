//! The operator catalog.
//!
//! Every operator is a free function returning an
//! [`Operation`](crate::compose::Operation), applied with `|`:
//!
//! ```rust
//! use sequencing::prelude::*;
//!
//! let names = from(vec!["carol", "al", "bea", "dan"]);
//! let short: Vec<&str> = (names
//!     | where_(|name: &&str| name.len() <= 3)
//!     | sort(4))
//!     .collect();
//! assert_eq!(short, vec!["al", "bea", "dan"]);
//! ```
//!
//! # Families
//!
//! - **Construction**: [`from`], [`range`], [`range_step`], [`generate`],
//!   [`zip_with`], [`pairwise`], [`sequence_equal`]
//! - **Aggregate**: [`count`], [`max`], [`min`], [`minmax`], [`sum`],
//!   [`avg`], [`inner_product`]
//! - **Element access**: [`first`], [`last`], [`single`], [`element_at`],
//!   [`contains`], [`is_empty`]
//! - **Logical**: [`any`], [`all`], [`none`]
//! - **Ordering**: [`sort`], [`reverse`] and their variants
//! - **Partitioning**: [`take`], [`take_while`], [`skip`], [`skip_while`],
//!   [`page`]
//! - **Projection**: [`select`], [`select_many`], [`join`], [`for_each`]
//! - **Restriction**: [`where_`]
//! - **Set algebra**: [`concat`], [`union_with`], [`intersect_with`],
//!   [`except`], [`symmetric_difference`]
//!
//! Operators that return a sequence are lazy: nothing is pulled from the
//! upstream until the result is pulled. Operators that return a scalar run
//! immediately.
//!
//! Closures passed to operators usually need their parameter types written
//! out, since the element type is only known once the operation meets its
//! sequence.

mod aggregate;
mod construction;
mod element_access;
mod logical;
mod ordering;
mod partitioning;
mod projection;
mod restriction;
mod set_operations;

use std::cmp::Ordering;

pub use aggregate::{
    avg, avg_with, count, count_if, inner_product, inner_product_with, max, max_by, min, min_by,
    minmax, minmax_by, sum, sum_with,
};
pub use construction::{
    PairwiseCapture, Step, from, generate, pairwise, range, range_step, sequence_equal, zip_with,
};
pub use element_access::{
    contains, element_at, element_at_or, element_at_or_default, first, first_or, first_or_default,
    is_empty, last, last_or, last_or_default, single, single_or, single_or_default,
};
pub use logical::{all, any, none};
pub use ordering::{reverse, reverse_in, sort, sort_by, sort_by_in, sort_by_key};
pub use partitioning::{page, skip, skip_while, take, take_while};
pub use projection::{for_each, join, join_by, select, select_many};
pub use restriction::where_;
pub use set_operations::{
    concat, except, except_by, intersect_with, intersect_with_by, symmetric_difference,
    symmetric_difference_by, union_with, union_with_by,
};

/// Orders by `PartialOrd`, treating incomparable values as equal.
pub(crate) fn natural_order<T: PartialOrd>(left: &T, right: &T) -> Ordering {
    left.partial_cmp(right).unwrap_or(Ordering::Equal)
}
