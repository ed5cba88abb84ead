//! Sequence sources and operand-combining constructors.
//!
//! `from`, `range`, `range_step`, and `generate` build a sequence out of
//! nothing but their arguments. `zip_with`, `pairwise`, and
//! `sequence_equal` are operations that shape or compare their input
//! element by element.

use num_traits::{One, Zero};

use crate::compose::Operation;
use crate::error::{Result, SequenceError};
use crate::generator::Sequence;

/// Numbers that `range` and `range_step` can progress through.
///
/// `forward` and `backward` return `None` when the step would leave the
/// representable range, which ends the progression.
pub trait Step: Copy + PartialOrd + Zero + One + 'static {
    /// Returns `self + delta`, or `None` on overflow.
    fn forward(self, delta: Self) -> Option<Self>;

    /// Returns `self - delta`, or `None` on overflow.
    fn backward(self, delta: Self) -> Option<Self>;
}

macro_rules! impl_step_for_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Step for $integer {
                #[inline]
                fn forward(self, delta: Self) -> Option<Self> {
                    self.checked_add(delta)
                }

                #[inline]
                fn backward(self, delta: Self) -> Option<Self> {
                    self.checked_sub(delta)
                }
            }
        )*
    };
}

macro_rules! impl_step_for_float {
    ($($float:ty),* $(,)?) => {
        $(
            impl Step for $float {
                #[inline]
                fn forward(self, delta: Self) -> Option<Self> {
                    Some(self + delta)
                }

                #[inline]
                fn backward(self, delta: Self) -> Option<Self> {
                    Some(self - delta)
                }
            }
        )*
    };
}

impl_step_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_step_for_float!(f32, f64);

/// Adapts any iterable into a sequence, preserving its order.
///
/// `source` is not turned into an iterator until the first pull.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let owned: Vec<i32> = from(vec![1, 2]).collect();
/// assert_eq!(owned, vec![1, 2]);
///
/// let backing = [3, 4];
/// let borrowed: Vec<&i32> = from(&backing).collect();
/// assert_eq!(borrowed, vec![&3, &4]);
///
/// let letters: String = from("hey".chars()).collect();
/// assert_eq!(letters, "hey");
/// ```
pub fn from<'a, I>(source: I) -> Sequence<'a, I::Item>
where
    I: IntoIterator + 'a,
    I::Item: 'a,
{
    Sequence::new(move |sink| async move { sink.put_all(source).await })
}

/// The integers (or other [`Step`] values) from `start` up to but excluding
/// `finish`, or down to but excluding `finish` when `finish < start`.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let up: Vec<i32> = range(0, 4).collect();
/// assert_eq!(up, vec![0, 1, 2, 3]);
/// let down: Vec<i32> = range(3, -1).collect();
/// assert_eq!(down, vec![3, 2, 1, 0]);
/// assert_eq!(range(5, 5) | count(), 0);
/// ```
pub fn range<T: Step>(start: T, finish: T) -> Sequence<'static, T> {
    progression(start, finish, T::one())
}

/// Like [`range`], advancing by `delta` each step.
///
/// The direction comes from comparing `start` with `finish`; `delta` itself
/// must be positive. The check happens here, before any element is
/// produced.
///
/// # Errors
///
/// Returns [`SequenceError::NonPositiveDelta`] if `delta` is not greater
/// than zero (including `NaN`).
///
/// A float step too small to change the current value ends the range after
/// that value.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let evens: Vec<u8> = range_step(0, 7, 2)?.collect();
/// assert_eq!(evens, vec![0, 2, 4, 6]);
/// let falling: Vec<f64> = range_step(1.0, 0.0, 0.25)?.collect();
/// assert_eq!(falling, vec![1.0, 0.75, 0.5, 0.25]);
/// assert_eq!(range_step(1, 5, 0).unwrap_err(), SequenceError::NonPositiveDelta);
/// # Ok::<(), SequenceError>(())
/// ```
pub fn range_step<T: Step>(start: T, finish: T, delta: T) -> Result<Sequence<'static, T>> {
    if delta.partial_cmp(&T::zero()) != Some(std::cmp::Ordering::Greater) {
        tracing::debug!("rejected range with a non-positive delta");
        return Err(SequenceError::NonPositiveDelta);
    }
    Ok(progression(start, finish, delta))
}

fn progression<T: Step>(start: T, finish: T, delta: T) -> Sequence<'static, T> {
    Sequence::new(move |sink| async move {
        let mut current = start;
        if start < finish {
            while current < finish {
                sink.put(current).await;
                match current.forward(delta) {
                    Some(next) if next != current => current = next,
                    _ => break,
                }
            }
        } else {
            while current > finish {
                sink.put(current).await;
                match current.backward(delta) {
                    Some(next) if next != current => current = next,
                    _ => break,
                }
            }
        }
    })
}

/// Calls `produce` exactly `count` times, emitting each result.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let mut next = 1;
/// let powers: Vec<u32> = generate(
///     move || {
///         let current = next;
///         next *= 2;
///         current
///     },
///     5,
/// )
/// .collect();
/// assert_eq!(powers, vec![1, 2, 4, 8, 16]);
/// ```
pub fn generate<'a, T, F>(mut produce: F, count: usize) -> Sequence<'a, T>
where
    T: 'a,
    F: FnMut() -> T + 'a,
{
    Sequence::new(move |sink| async move {
        for _ in 0..count {
            sink.put(produce()).await;
        }
    })
}

/// Pairs this sequence with `rhs` in lock step.
///
/// Stops at the shorter operand. Each step pulls the left side first, so
/// when the left side runs out the right side is not asked for another
/// element.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let pairs: Vec<(i32, char)> = (range(0, 5) | zip_with(from("ab".chars()))).collect();
/// assert_eq!(pairs, vec![(0, 'a'), (1, 'b')]);
/// ```
pub fn zip_with<'a, T, U>(
    mut rhs: Sequence<'a, U>,
) -> Operation<impl FnOnce(Sequence<'a, T>) -> Sequence<'a, (T, U)>>
where
    T: 'a,
    U: 'a,
{
    Operation::new(move |mut upstream: Sequence<'a, T>| {
        Sequence::new(move |sink| async move {
            while let Some(left) = upstream.next() {
                let Some(right) = rhs.next() else {
                    break;
                };
                sink.put((left, right)).await;
            }
        })
    })
}

/// What [`pairwise`] does with an unpaired last element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PairwiseCapture {
    /// Pair the last element with `T::default()`.
    UseRemainder,
    /// Drop the last element.
    #[default]
    IgnoreRemainder,
}

/// Groups consecutive elements into non-overlapping pairs.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let pairs: Vec<(char, char)> =
///     (from("beers".chars()) | pairwise(PairwiseCapture::UseRemainder)).collect();
/// assert_eq!(pairs, vec![('b', 'e'), ('e', 'r'), ('s', '\0')]);
/// ```
pub fn pairwise<'a, T>(
    capture: PairwiseCapture,
) -> Operation<impl FnOnce(Sequence<'a, T>) -> Sequence<'a, (T, T)>>
where
    T: Default + 'a,
{
    Operation::new(move |mut upstream: Sequence<'a, T>| {
        Sequence::new(move |sink| async move {
            while let Some(first) = upstream.next() {
                match upstream.next() {
                    Some(second) => sink.put((first, second)).await,
                    None if capture == PairwiseCapture::UseRemainder => {
                        sink.put((first, T::default())).await;
                    }
                    None => {}
                }
            }
        })
    })
}

/// Returns `true` if this sequence and `rhs` have equal elements in the
/// same order and the same length.
///
/// Stops at the first difference.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// assert!(range(0, 3) | sequence_equal(from(vec![0, 1, 2])));
/// assert!(!(range(0, 3) | sequence_equal(range(0, 2))));
/// ```
pub fn sequence_equal<'a, T, U>(
    rhs: Sequence<'a, U>,
) -> Operation<impl FnOnce(Sequence<'a, T>) -> bool>
where
    T: PartialEq<U>,
{
    Operation::new(move |upstream: Sequence<'a, T>| upstream.sequence_eq(rhs))
}
