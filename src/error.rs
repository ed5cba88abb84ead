//! Error types for sequence operators.
//!
//! Scalar operators that can fail on their input (an empty sequence, an index
//! past the end, a non-positive step) report a [`SequenceError`]. Errors fall
//! into two families, exposed through [`ErrorKind`]:
//!
//! - **Range**: a cardinality or index precondition on the sequence itself
//!   was violated (`first` on empty, `single` on two elements, ...).
//! - **Domain**: an argument precondition was violated (a non-positive
//!   `range_step` delta, an average over nothing).
//!
//! Panics raised by user callbacks are not converted; they propagate through
//! the pull that invoked the callback.

use thiserror::Error;

/// The family a [`SequenceError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An empty-sequence, index, or cardinality precondition was violated.
    Range,
    /// An argument precondition was violated.
    Domain,
}

/// Represents errors produced by fallible sequence operators.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let error = Sequence::<i32>::empty() | first();
/// assert_eq!(
///     error,
///     Err(SequenceError::Empty { operation: "first" })
/// );
/// assert_eq!(
///     format!("{}", error.unwrap_err()),
///     "first cannot be computed on an empty sequence"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// The operator needs at least one element.
    #[error("{operation} cannot be computed on an empty sequence")]
    Empty {
        /// The name of the operator that failed.
        operation: &'static str,
    },

    /// `element_at` walked past the end of the sequence.
    #[error(
        "element at index {index} cannot be retrieved because the sequence only has {length} elements"
    )]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of elements the sequence actually produced.
        length: usize,
    },

    /// `single` found a second element.
    #[error("more than one element present in sequence")]
    MultipleElements,

    /// `range_step` was given a delta that is zero, negative, or unordered.
    #[error("delta must be positive")]
    NonPositiveDelta,

    /// `avg` was asked to average no elements.
    #[error("cannot compute average on an empty sequence")]
    EmptyAverage,
}

impl SequenceError {
    /// Returns the family this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Empty { .. } | Self::IndexOutOfRange { .. } | Self::MultipleElements => {
                ErrorKind::Range
            }
            Self::NonPositiveDelta | Self::EmptyAverage => ErrorKind::Domain,
        }
    }

    /// Returns `true` for empty-sequence, index, and cardinality failures.
    #[must_use]
    pub const fn is_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::Range)
    }

    /// Returns `true` for argument precondition failures.
    #[must_use]
    pub const fn is_domain(&self) -> bool {
        matches!(self.kind(), ErrorKind::Domain)
    }
}

/// Result alias used by fallible operators.
pub type Result<T> = std::result::Result<T, SequenceError>;
