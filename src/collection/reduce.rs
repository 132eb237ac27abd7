//! The reducer: folding a collection into a single accumulated value.
//!
//! Iterators receive the accumulator by mutable reference and return an
//! `Option`:
//!
//! - `Some(next)` replaces the accumulator with `next`;
//! - `None` leaves the accumulator as the iterator left it.
//!
//! The second form lets iterators written for side effects (pushing into a
//! `Vec`, bumping a counter) skip returning anything meaningful.
//!
//! # Examples
//!
//! ```rust
//! use underbar::collection::{fold, reduce};
//!
//! let sum = fold(&[1, 2, 3], |total, number| Some(*total + number), 0);
//! assert_eq!(sum, 6);
//!
//! let evens = fold(&[1, 2, 3, 4], |evens: &mut Vec<i32>, number| {
//!     if number % 2 == 0 {
//!         evens.push(*number);
//!     }
//!     None
//! }, Vec::new());
//! assert_eq!(evens, vec![2, 4]);
//!
//! // Without a seed, the first element is the initial accumulator.
//! assert_eq!(reduce(&[5], |total, number| Some(*total + number * number), None), Some(5));
//! ```

use super::traverse::Collection;

/// Folds `collection` into an accumulator seeded with `initial`.
///
/// Elements are visited in traversal order. An empty collection returns
/// `initial` untouched.
pub fn fold<C, A, F>(collection: &C, mut iterator: F, initial: A) -> A
where
    C: Collection + ?Sized,
    F: FnMut(&mut A, &C::Item) -> Option<A>,
{
    let mut accumulator = initial;
    collection.each(|element, _, _| {
        if let Some(next) = iterator(&mut accumulator, element) {
            accumulator = next;
        }
    });
    accumulator
}

/// Folds `collection` with an optional seed.
///
/// When `initial` is `None`, the first visited element becomes the
/// accumulator and is not passed to `iterator`; folding starts at the second
/// element. `Some(0)` or `Some(false)` are seeds like any other.
///
/// Returns `None` only for an empty collection without a seed.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reduce;
///
/// assert_eq!(reduce(&[1, 2, 3], |total, number| Some(*total + number), None), Some(6));
/// assert_eq!(reduce(&[] as &[i32], |total, number| Some(*total + number), Some(10)), Some(10));
/// assert_eq!(reduce(&[] as &[i32], |total, number| Some(*total + number), None), None);
/// ```
pub fn reduce<C, F>(collection: &C, mut iterator: F, initial: Option<C::Item>) -> Option<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(&mut C::Item, &C::Item) -> Option<C::Item>,
{
    fold(
        collection,
        |accumulator: &mut Option<C::Item>, element| {
            accumulator.as_mut().map_or_else(
                || Some(Some(element.clone())),
                |current| iterator(current, element).map(Some),
            )
        },
        initial,
    )
}
