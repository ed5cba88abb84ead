//! The lazy-evaluation engine.
//!
//! This module turns an imperative producer ("push each value to a sink")
//! into a pull iterator. The producer is an `async` body; every
//! `sink.put(value).await` suspends it, and every pull on the
//! [`Sequence`] resumes it. The two sides never run at the same time and
//! never leave the current thread.
//!
//! - [`Sequence`]: the owned, single-pass handle to a suspended producer
//! - [`Sink`]: what the producer writes to
//! - [`Iter`]: a borrowing view over a sequence
//!
//! # Examples
//!
//! ```rust
//! use sequencing::generator::Sequence;
//!
//! // An infinite producer is fine as long as the consumer stops pulling
//! let naturals = Sequence::new(|sink| async move {
//!     let mut value = 0_u64;
//!     loop {
//!         sink.put(value).await;
//!         value += 1;
//!     }
//! });
//!
//! let head: Vec<u64> = naturals.take(5).collect();
//! assert_eq!(head, vec![0, 1, 2, 3, 4]);
//! ```

mod sequence;
mod sink;

pub use sequence::{Iter, Sequence};
pub use sink::{Put, Sink};
