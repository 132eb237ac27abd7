//! Sequence accessors: `first` and `last`, with and without a count.

use super::reduce::fold;

/// Returns the first element, if any.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::first;
///
/// assert_eq!(first(&[1, 2, 3]), Some(&1));
/// assert_eq!(first::<i32>(&[]), None);
/// ```
#[inline]
pub const fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// Returns copies of the first `count` elements (all of them if the sequence
/// is shorter).
///
/// # Examples
///
/// ```rust
/// use underbar::collection::first_n;
///
/// assert_eq!(first_n(&[1, 2, 3], 2), vec![1, 2]);
/// assert_eq!(first_n(&[1, 2, 3], 5), vec![1, 2, 3]);
/// ```
pub fn first_n<T: Clone>(sequence: &[T], count: usize) -> Vec<T> {
    fold(
        sequence,
        |taken: &mut Vec<T>, element| {
            if taken.len() < count {
                taken.push(element.clone());
            }
            None
        },
        Vec::with_capacity(count.min(sequence.len())),
    )
}

/// Returns the last element, if any.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::last;
///
/// assert_eq!(last(&[1, 2, 3]), Some(&3));
/// ```
#[inline]
pub const fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// Returns copies of the last `count` elements (all of them if the sequence
/// is shorter). A count of zero yields an empty vector.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::last_n;
///
/// assert_eq!(last_n(&[1, 2, 3], 2), vec![2, 3]);
/// assert_eq!(last_n(&[1, 2, 3], 0), Vec::<i32>::new());
/// ```
pub fn last_n<T: Clone>(sequence: &[T], count: usize) -> Vec<T> {
    let skip = sequence.len().saturating_sub(count);
    let mut position = 0;
    fold(
        sequence,
        |taken: &mut Vec<T>, element| {
            if position >= skip {
                taken.push(element.clone());
            }
            position += 1;
            None
        },
        Vec::with_capacity(count.min(sequence.len())),
    )
}
