//! The producer side of the suspend/resume handoff.
//!
//! A producer receives a [`Sink`] and emits elements with
//! `sink.put(value).await`. Each `put` parks its value in a single shared
//! slot and suspends the producer; the owning [`Sequence`](super::Sequence)
//! takes the value out of the slot and hands it to the consumer. The slot
//! never holds more than one element.

use std::cell::Cell;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

/// The single-element cell shared by a sequence and its producer.
pub(crate) type Slot<T> = Rc<Cell<Option<T>>>;

/// The handle a producer uses to emit elements.
///
/// A `Sink` is created by [`Sequence::new`](super::Sequence::new) and moved
/// into the producer. It cannot be cloned: exactly one producer writes to a
/// sequence.
///
/// # Examples
///
/// ```rust
/// use sequencing::generator::Sequence;
///
/// let sequence = Sequence::new(|sink| async move {
///     sink.put(1).await;
///     sink.put(2).await;
/// });
/// assert_eq!(sequence.collect::<Vec<_>>(), vec![1, 2]);
/// ```
pub struct Sink<T> {
    slot: Slot<T>,
}

impl<T> Sink<T> {
    pub(crate) const fn new(slot: Slot<T>) -> Self {
        Self { slot }
    }

    /// Emits one element and suspends the producer until the next pull.
    ///
    /// The returned future must be awaited; the value only reaches the
    /// consumer when it is polled.
    #[inline]
    pub const fn put(&self, value: T) -> Put<'_, T> {
        Put {
            sink: self,
            value: Some(value),
        }
    }

    /// Emits every element of `values`, in order, suspending once per element.
    ///
    /// This is the bridge from a pull iterator into the sink: it writes
    /// straight through with no intermediate buffering.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sequencing::generator::Sequence;
    ///
    /// let sequence = Sequence::new(|sink| async move {
    ///     sink.put_all(vec![1, 2]).await;
    ///     sink.put(3).await;
    /// });
    /// assert_eq!(sequence.collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub async fn put_all<I>(&self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.put(value).await;
        }
    }
}

impl<T> fmt::Debug for Sink<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Sink").finish_non_exhaustive()
    }
}

/// Future returned by [`Sink::put`].
///
/// The first poll moves the value into the shared slot and returns
/// `Pending`, handing control back to the consumer. The next poll, which
/// happens when the consumer asks for another element, completes.
#[must_use = "a put does nothing unless it is awaited"]
pub struct Put<'s, T> {
    sink: &'s Sink<T>,
    value: Option<T>,
}

// The value is moved out, never pinned in place.
impl<T> Unpin for Put<'_, T> {}

impl<T> Future for Put<'_, T> {
    type Output = ();

    fn poll(self: Pin<&mut Self>, _context: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match this.value.take() {
            Some(value) => {
                this.sink.slot.set(Some(value));
                Poll::Pending
            }
            None => Poll::Ready(()),
        }
    }
}

impl<T> fmt::Debug for Put<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Put")
            .field("pending", &self.value.is_some())
            .finish_non_exhaustive()
    }
}
