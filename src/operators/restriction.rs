//! Filtering.

use crate::compose::Operation;
use crate::generator::Sequence;

/// Emits the elements satisfying `predicate`, in order.
///
/// The trailing underscore keeps clear of the `where` keyword.
///
/// # Examples
///
/// ```rust
/// use sequencing::prelude::*;
///
/// let odd: Vec<i32> = (range(0, 8) | where_(|value: &i32| value % 2 == 1)).collect();
/// assert_eq!(odd, vec![1, 3, 5, 7]);
/// ```
pub fn where_<'a, T, P>(
    mut predicate: P,
) -> Operation<impl FnOnce(Sequence<'a, T>) -> Sequence<'a, T>>
where
    T: 'a,
    P: FnMut(&T) -> bool + 'a,
{
    Operation::new(move |upstream: Sequence<'a, T>| {
        Sequence::new(move |sink| async move {
            for element in upstream {
                if predicate(&element) {
                    sink.put(element).await;
                }
            }
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::RefCell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    fn values<'a, T: 'a>(elements: Vec<T>) -> Sequence<'a, T> {
        Sequence::new(|sink| async move { sink.put_all(elements).await })
    }

    #[rstest]
    fn test_where_keeps_order_and_duplicates() {
        let kept: Vec<i32> =
            (values(vec![4, 1, 4, 9, 2]) | where_(|value: &i32| *value > 1)).collect();
        assert_eq!(kept, vec![4, 4, 9, 2]);
    }

    #[rstest]
    fn test_where_interleaves_with_consumer() {
        // the predicate runs only as far as the consumer has pulled
        let tested = RefCell::new(Vec::new());
        let journal = &tested;
        let mut kept = values(vec![1, 2, 3, 4])
            | where_(move |value: &i32| {
                journal.borrow_mut().push(*value);
                value % 2 == 0
            });
        assert_eq!(kept.next(), Some(2));
        assert_eq!(*tested.borrow(), vec![1, 2]);
        assert_eq!(kept.next(), Some(4));
        assert_eq!(*tested.borrow(), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_where_rejecting_everything() {
        assert_eq!((values(vec![1, 2, 3]) | where_(|_: &i32| false)).count(), 0);
    }

    #[rstest]
    fn test_where_predicate_panic_surfaces_at_pull_and_exhausts() {
        let mut kept = values(vec![0, 1, 2, 3, 4])
            | where_(|value: &i32| {
                assert!(*value != 2, "predicate failure");
                true
            });
        assert_eq!(kept.next(), Some(0));
        assert_eq!(kept.next(), Some(1));
        let outcome = catch_unwind(AssertUnwindSafe(|| kept.next()));
        assert!(outcome.is_err());
        assert_eq!(kept.next(), None);
    }
}
