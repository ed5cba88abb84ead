//! Linear co-scan over two sorted inputs.
//!
//! [`MergeJoin`] walks two iterators that are each sorted by the same
//! comparator and reports, one step at a time, whether the smaller head came
//! from the left, the right, or both (the heads compared equal). The set
//! algebra operators are filters over these steps.

use std::cmp::Ordering;
use std::fmt;
use std::iter::{FusedIterator, Peekable};

/// One step of a [`MergeJoin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Merged<T> {
    /// The left head was smaller; it was consumed alone.
    Left(T),
    /// The right head was smaller; it was consumed alone.
    Right(T),
    /// The heads compared equal; both were consumed.
    Both(T, T),
}

impl<T> Merged<T> {
    /// Returns the element a union keeps: the left one when both sides match.
    #[inline]
    pub fn into_preferred(self) -> T {
        match self {
            Self::Left(value) | Self::Right(value) | Self::Both(value, _) => value,
        }
    }
}

/// An iterator merging two sorted iterators.
///
/// Both inputs must already be sorted by `compare`. This is not checked; on
/// unsorted input the steps are well-formed but meaningless.
///
/// # Examples
///
/// ```rust
/// use sequencing::adapter::{MergeJoin, Merged};
///
/// let steps: Vec<_> = MergeJoin::new(vec![1, 3, 4], vec![2, 3], |l: &i32, r: &i32| l.cmp(r))
///     .collect();
/// assert_eq!(
///     steps,
///     vec![Merged::Left(1), Merged::Right(2), Merged::Both(3, 3), Merged::Left(4)]
/// );
/// ```
pub struct MergeJoin<L: Iterator, R: Iterator, C> {
    left: Peekable<L>,
    right: Peekable<R>,
    compare: C,
}

impl<T, L, R, C> MergeJoin<L, R, C>
where
    L: Iterator<Item = T>,
    R: Iterator<Item = T>,
    C: FnMut(&T, &T) -> Ordering,
{
    /// Creates a merge over `left` and `right` ordered by `compare`.
    pub fn new<IL, IR>(left: IL, right: IR, compare: C) -> Self
    where
        IL: IntoIterator<IntoIter = L>,
        IR: IntoIterator<IntoIter = R>,
    {
        Self {
            left: left.into_iter().peekable(),
            right: right.into_iter().peekable(),
            compare,
        }
    }

    /// Returns `true` once the left input has no more elements.
    ///
    /// Pulls at most one element from the left input.
    pub fn left_exhausted(&mut self) -> bool {
        self.left.peek().is_none()
    }

    /// Returns `true` once the right input has no more elements.
    ///
    /// Pulls at most one element from the right input.
    pub fn right_exhausted(&mut self) -> bool {
        self.right.peek().is_none()
    }
}

impl<T, L, R, C> Iterator for MergeJoin<L, R, C>
where
    L: Iterator<Item = T>,
    R: Iterator<Item = T>,
    C: FnMut(&T, &T) -> Ordering,
{
    type Item = Merged<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let order = match (self.left.peek(), self.right.peek()) {
            (Some(left), Some(right)) => (self.compare)(left, right),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => return None,
        };
        match order {
            Ordering::Less => self.left.next().map(Merged::Left),
            Ordering::Greater => self.right.next().map(Merged::Right),
            Ordering::Equal => {
                let left = self.left.next()?;
                let right = self.right.next()?;
                Some(Merged::Both(left, right))
            }
        }
    }
}

impl<T, L, R, C> FusedIterator for MergeJoin<L, R, C>
where
    L: FusedIterator<Item = T>,
    R: FusedIterator<Item = T>,
    C: FnMut(&T, &T) -> Ordering,
{
}

impl<L: Iterator, R: Iterator, C> fmt::Debug for MergeJoin<L, R, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("MergeJoin").finish_non_exhaustive()
    }
}
