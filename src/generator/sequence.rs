//! Lazy, single-pass sequences driven by suspended producers.
//!
//! A [`Sequence`] owns a suspended producer body. Pulling an element resumes
//! the body until it either emits through its [`Sink`] or returns. Nothing
//! runs before the first pull, and once the body returns the sequence stays
//! exhausted.
//!
//! # Examples
//!
//! ```rust
//! use sequencing::generator::Sequence;
//! use std::cell::Cell;
//!
//! let started = Cell::new(false);
//! let flag = &started;
//! let mut sequence = Sequence::new(move |sink| async move {
//!     flag.set(true);
//!     for value in 0..3 {
//!         sink.put(value).await;
//!     }
//! });
//!
//! // No producer code has run yet
//! assert!(!started.get());
//!
//! assert_eq!(sequence.next(), Some(0));
//! assert!(started.get());
//! assert_eq!(sequence.collect::<Vec<_>>(), vec![1, 2]);
//! ```

use std::cell::Cell;
use std::fmt;
use std::future::Future;
use std::iter::FusedIterator;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use futures::task::noop_waker_ref;

use super::sink::{Sink, Slot};
use crate::compose::Operation;

/// A boxed producer body.
type Body<'a> = Pin<Box<dyn Future<Output = ()> + 'a>>;

/// A lazily evaluated, single-pass, move-only stream of values.
///
/// `Sequence<'a, T>` is an exclusively owned handle to a suspended producer.
/// It implements [`Iterator`], so every standard iterator algorithm applies
/// directly; operators from [`crate::operators`] are applied with `|`.
///
/// # Type Parameters
///
/// * `'a` - The lifetime of anything the producer borrows
/// * `T` - The element type
///
/// # Ownership
///
/// A sequence is neither `Clone` nor `Send`. Applying an operator consumes
/// it. Dropping a partially consumed sequence drops the suspended producer
/// and its locals without resuming it.
///
/// # Panics
///
/// A panic raised inside the producer propagates out of the pull that
/// resumed it. The sequence is exhausted afterwards.
pub struct Sequence<'a, T> {
    body: Option<Body<'a>>,
    slot: Slot<T>,
    peeked: Option<T>,
}

impl<'a, T> Sequence<'a, T> {
    /// Creates a sequence from a producer.
    ///
    /// The producer receives a [`Sink`] and returns a future that emits
    /// elements with `sink.put(value).await`. The producer is not called
    /// until the first element is pulled.
    ///
    /// The producer must only await its sink (or futures that complete
    /// immediately). A producer that suspends without emitting is treated as
    /// finished.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequencing::generator::Sequence;
    ///
    /// let squares = Sequence::new(|sink| async move {
    ///     for value in 1..=4 {
    ///         sink.put(value * value).await;
    ///     }
    /// });
    /// assert_eq!(squares.collect::<Vec<_>>(), vec![1, 4, 9, 16]);
    /// ```
    pub fn new<P, F>(producer: P) -> Self
    where
        T: 'a,
        P: FnOnce(Sink<T>) -> F + 'a,
        F: Future<Output = ()> + 'a,
    {
        let slot: Slot<T> = Rc::new(Cell::new(None));
        let sink = Sink::new(Rc::clone(&slot));
        let body = async move {
            tracing::trace!("producer started");
            producer(sink).await;
            tracing::trace!("producer completed");
        };
        Self {
            body: Some(Box::pin(body)),
            slot,
            peeked: None,
        }
    }

    /// Creates a sequence that yields nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequencing::generator::Sequence;
    ///
    /// let mut empty = Sequence::<i32>::empty();
    /// assert!(empty.is_empty());
    /// assert_eq!(empty.next(), None);
    /// ```
    #[must_use]
    pub fn empty() -> Self {
        Self {
            body: None,
            slot: Rc::new(Cell::new(None)),
            peeked: None,
        }
    }

    /// Returns `true` if the sequence has no more elements.
    ///
    /// At most one element is pulled to find out. That element is kept and
    /// returned by the next pull, so no value is lost.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequencing::generator::Sequence;
    ///
    /// let mut sequence = Sequence::new(|sink| async move { sink.put('a').await });
    /// assert!(!sequence.is_empty());
    /// assert_eq!(sequence.next(), Some('a'));
    /// assert!(sequence.is_empty());
    /// ```
    pub fn is_empty(&mut self) -> bool {
        if self.peeked.is_none() {
            self.peeked = self.resume();
        }
        self.peeked.is_none()
    }

    /// Returns a borrowing, forward-only view over the remaining elements.
    ///
    /// Elements pulled through the view are gone from the sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequencing::generator::Sequence;
    ///
    /// let mut sequence = Sequence::new(|sink| async move { sink.put_all(1..=4).await });
    /// let head: Vec<i32> = sequence.iter().take(2).collect();
    /// assert_eq!(head, vec![1, 2]);
    /// assert_eq!(sequence.collect::<Vec<_>>(), vec![3, 4]);
    /// ```
    pub const fn iter(&mut self) -> Iter<'_, 'a, T> {
        Iter { sequence: self }
    }

    /// Applies an operation to this sequence, consuming it.
    ///
    /// Equivalent to `self | operation`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequencing::prelude::*;
    ///
    /// let total = range(1, 5).pipe(sum());
    /// assert_eq!(total, 10);
    /// ```
    pub fn pipe<F, R>(self, operation: Operation<F>) -> R
    where
        F: FnOnce(Self) -> R,
    {
        operation.apply(self)
    }

    /// Compares two sequences element by element, consuming both.
    ///
    /// The sequences are equal if every pair compares equal and both run out
    /// at the same length. Comparison stops at the first difference.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequencing::prelude::*;
    ///
    /// assert!(range(0, 3).sequence_eq(from(vec![0, 1, 2])));
    /// assert!(!range(0, 3).sequence_eq(range(0, 4)));
    /// ```
    pub fn sequence_eq<U>(self, other: Sequence<'_, U>) -> bool
    where
        T: PartialEq<U>,
    {
        Iterator::eq(self, other)
    }

    /// Resumes the producer until it emits or finishes.
    fn resume(&mut self) -> Option<T> {
        // Taken out for the duration of the poll: a panicking producer is
        // dropped during unwinding and the sequence stays exhausted.
        let mut body = self.body.take()?;
        let mut context = Context::from_waker(noop_waker_ref());
        match body.as_mut().poll(&mut context) {
            Poll::Ready(()) => self.slot.take(),
            Poll::Pending => {
                let value = self.slot.take();
                if value.is_some() {
                    self.body = Some(body);
                } else {
                    tracing::warn!("producer suspended without emitting; ending sequence");
                }
                value
            }
        }
    }
}

impl<T> Iterator for Sequence<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self.peeked.take() {
            Some(value) => Some(value),
            None => self.resume(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = usize::from(self.peeked.is_some());
        if self.body.is_some() {
            (buffered, None)
        } else {
            (buffered, Some(buffered))
        }
    }
}

impl<T> FusedIterator for Sequence<'_, T> {}

impl<T> Default for Sequence<'_, T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Drop for Sequence<'_, T> {
    fn drop(&mut self) {
        if self.body.is_some() {
            tracing::trace!("dropping sequence with a suspended producer");
        }
    }
}

impl<T> fmt::Debug for Sequence<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Sequence")
            .field("suspended", &self.body.is_some())
            .field("peeked", &self.peeked.is_some())
            .finish_non_exhaustive()
    }
}

/// A borrowing, forward-only view over a [`Sequence`].
///
/// Created by [`Sequence::iter`].
pub struct Iter<'s, 'a, T> {
    sequence: &'s mut Sequence<'a, T>,
}

impl<T> Iterator for Iter<'_, '_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.sequence.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sequence.size_hint()
    }
}

impl<T> FusedIterator for Iter<'_, '_, T> {}

impl<T> fmt::Debug for Iter<'_, '_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Iter").field(&self.sequence).finish()
    }
}

// Single owner, single thread.
static_assertions::assert_not_impl_any!(Sequence<'static, i32>: Clone, Send, Sync);
static_assertions::assert_not_impl_any!(Sink<i32>: Clone, Send, Sync);
static_assertions::assert_impl_all!(Sequence<'static, String>: Iterator, FusedIterator, Default);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::RefCell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[rstest]
    fn test_producer_is_lazy() {
        let calls = Cell::new(0);
        let sequence = Sequence::new(|sink| {
            calls.set(calls.get() + 1);
            async move { sink.put(1).await }
        });
        assert_eq!(calls.get(), 0);
        drop(sequence);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_pull_resumes_one_step_at_a_time() {
        let log = RefCell::new(Vec::new());
        let journal = &log;
        let mut sequence = Sequence::new(move |sink| async move {
            for value in 0..3 {
                journal.borrow_mut().push(format!("produce {value}"));
                sink.put(value).await;
            }
            journal.borrow_mut().push("done".to_string());
        });

        assert_eq!(sequence.next(), Some(0));
        assert_eq!(*log.borrow(), vec!["produce 0"]);
        assert_eq!(sequence.next(), Some(1));
        assert_eq!(*log.borrow(), vec!["produce 0", "produce 1"]);
        assert_eq!(sequence.next(), Some(2));
        assert_eq!(sequence.next(), None);
        assert_eq!(log.borrow().last().map(String::as_str), Some("done"));
    }

    #[rstest]
    fn test_exhausted_sequence_stays_exhausted() {
        let mut sequence = Sequence::new(|sink| async move { sink.put(1).await });
        assert_eq!(sequence.next(), Some(1));
        assert_eq!(sequence.next(), None);
        assert_eq!(sequence.next(), None);
        assert_eq!(sequence.iter().count(), 0);
    }

    #[rstest]
    fn test_is_empty_keeps_peeked_value() {
        let mut sequence = Sequence::new(|sink| async move {
            sink.put(10).await;
            sink.put(20).await;
        });
        assert!(!sequence.is_empty());
        assert!(!sequence.is_empty());
        assert_eq!(sequence.size_hint(), (1, None));
        assert_eq!(sequence.collect::<Vec<_>>(), vec![10, 20]);
    }

    #[rstest]
    fn test_empty_and_default_yield_nothing() {
        let mut empty = Sequence::<u8>::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.size_hint(), (0, Some(0)));
        assert_eq!(Sequence::<u8>::default().count(), 0);
    }

    #[rstest]
    fn test_drop_releases_producer_locals_without_resuming() {
        struct Guard<'g>(&'g Cell<bool>);
        impl Drop for Guard<'_> {
            fn drop(&mut self) {
                self.0.set(true);
            }
        }

        let released = Cell::new(false);
        let resumed_after_first = Cell::new(false);
        let (released_flag, resumed_flag) = (&released, &resumed_after_first);
        let mut sequence = Sequence::new(move |sink| async move {
            let _guard = Guard(released_flag);
            sink.put(1).await;
            resumed_flag.set(true);
            sink.put(2).await;
        });

        assert_eq!(sequence.next(), Some(1));
        assert!(!released.get());
        drop(sequence);
        assert!(released.get());
        assert!(!resumed_after_first.get());
    }

    #[rstest]
    fn test_pending_without_value_ends_sequence() {
        let mut sequence = Sequence::new(|sink| async move {
            sink.put(1).await;
            futures::future::pending::<()>().await;
            sink.put(2).await;
        });
        assert_eq!(sequence.next(), Some(1));
        assert_eq!(sequence.next(), None);
        assert_eq!(sequence.next(), None);
    }

    #[rstest]
    fn test_producer_panic_propagates_and_exhausts() {
        let mut sequence = Sequence::new(|sink| async move {
            sink.put(1).await;
            panic!("producer failure");
        });
        assert_eq!(sequence.next(), Some(1));
        let outcome = catch_unwind(AssertUnwindSafe(|| sequence.next()));
        assert!(outcome.is_err());
        assert_eq!(sequence.next(), None);
    }

    #[rstest]
    fn test_iter_is_a_partial_view() {
        let mut sequence = Sequence::new(|sink| async move { sink.put_all(0..6).await });
        let first: Vec<_> = sequence.iter().take(2).collect();
        let second: Vec<_> = sequence.iter().take(2).collect();
        assert_eq!(first, vec![0, 1]);
        assert_eq!(second, vec![2, 3]);
        assert_eq!(sequence.collect::<Vec<_>>(), vec![4, 5]);
    }

    #[rstest]
    #[case(vec![1, 2, 3], vec![1, 2, 3], true)]
    #[case(vec![1, 2, 3], vec![1, 2], false)]
    #[case(vec![1, 2], vec![1, 2, 3], false)]
    #[case(vec![1, 5, 3], vec![1, 2, 3], false)]
    #[case(vec![], vec![], true)]
    fn test_sequence_eq(#[case] left: Vec<i32>, #[case] right: Vec<i32>, #[case] expected: bool) {
        let left = Sequence::new(|sink| async move { sink.put_all(left).await });
        let right = Sequence::new(|sink| async move { sink.put_all(right).await });
        assert_eq!(left.sequence_eq(right), expected);
    }

    #[rstest]
    fn test_nested_sequences_resume_independently() {
        let inner = Sequence::new(|sink| async move { sink.put_all(1..=3).await });
        let outer = Sequence::new(|sink| async move {
            for value in inner {
                sink.put(value * 10).await;
            }
        });
        assert_eq!(outer.collect::<Vec<_>>(), vec![10, 20, 30]);
    }
}
