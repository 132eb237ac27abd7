//! Collection operations derived from the reducer.
//!
//! None of these functions walk a collection themselves: each one is a
//! [`fold`] or [`reduce`](super::reduce) with a purpose-built iterator, or a
//! composition of other derived operations.

use super::reduce::fold;
use super::traverse::{Collection, index_of};
use super::truthy::Truthy;

/// Applies `function` to each element, collecting the results in traversal
/// order.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::map;
///
/// assert_eq!(map(&[1, 2, 3], |value| value * 2), vec![2, 4, 6]);
/// ```
pub fn map<C, U, F>(collection: &C, mut function: F) -> Vec<U>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> U,
{
    fold(
        collection,
        |results: &mut Vec<U>, element| {
            results.push(function(element));
            None
        },
        Vec::with_capacity(collection.count()),
    )
}

/// Keeps the elements for which `predicate` returns a truthy value.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::filter;
///
/// assert_eq!(filter(&[1, 2, 3, 4, 5, 6], |value| value % 2 == 0), vec![2, 4, 6]);
/// ```
pub fn filter<C, R, P>(collection: &C, mut predicate: P) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    R: Truthy,
    P: FnMut(&C::Item) -> R,
{
    fold(
        collection,
        |results: &mut Vec<C::Item>, element| {
            if predicate(element).is_truthy() {
                results.push(element.clone());
            }
            None
        },
        Vec::new(),
    )
}

/// Drops the elements for which `predicate` returns a truthy value.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::reject;
///
/// assert_eq!(reject(&[1, 2, 3, 4, 5, 6], |value| value % 2 == 0), vec![1, 3, 5]);
/// ```
pub fn reject<C, R, P>(collection: &C, mut predicate: P) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    R: Truthy,
    P: FnMut(&C::Item) -> R,
{
    filter(collection, |element| !predicate(element).is_truthy())
}

/// Removes duplicates, keeping the first occurrence of each value.
///
/// Membership is tested with [`index_of`] against the values kept so far,
/// so the cost is quadratic in the number of distinct values.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::uniq;
///
/// assert_eq!(uniq(&[1, 2, 2, 3, 1]), vec![1, 2, 3]);
/// ```
pub fn uniq<T: PartialEq + Clone>(sequence: &[T]) -> Vec<T> {
    fold(
        sequence,
        |results: &mut Vec<T>, element| {
            if index_of(results, element).is_none() {
                results.push(element.clone());
            }
            None
        },
        Vec::new(),
    )
}

/// Returns whether any element equals `target`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::contains;
/// use std::collections::BTreeMap;
///
/// assert!(contains(&[1, 2, 3], &2));
/// assert!(!contains(&BTreeMap::from([("moe", 1)]), &2));
/// ```
pub fn contains<C>(collection: &C, target: &C::Item) -> bool
where
    C: Collection + ?Sized,
    C::Item: PartialEq,
{
    fold(
        collection,
        |was_found, item| {
            if *was_found {
                return None;
            }
            Some(item == target)
        },
        false,
    )
}

/// Returns whether `predicate` is truthy for every element.
///
/// Vacuously `true` for an empty collection.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::every;
///
/// assert!(every(&[2, 4, 6], |value| value % 2 == 0));
/// assert!(!every(&[2, 3, 6], |value| value % 2 == 0));
/// assert!(every(&[] as &[i32], |_| false));
/// ```
pub fn every<C, R, P>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    R: Truthy,
    P: FnMut(&C::Item) -> R,
{
    fold(
        collection,
        |passing, item| {
            if *passing {
                Some(predicate(item).is_truthy())
            } else {
                None
            }
        },
        true,
    )
}

/// Returns whether every element is itself truthy.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::every_truthy;
///
/// assert!(every_truthy(&[1, 2, 3]));
/// assert!(!every_truthy(&[1, 0, 3]));
/// ```
pub fn every_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    every(collection, |item| item.is_truthy())
}

/// Returns whether `predicate` is truthy for at least one element.
///
/// Derived from [`every`]: some element passes exactly when not every
/// element fails. Vacuously `false` for an empty collection.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::some;
///
/// assert!(!some(&[1, 3, 5], |value| value % 2 == 0));
/// assert!(some(&[1, 2, 3], |value| value % 2 == 0));
/// ```
pub fn some<C, R, P>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    R: Truthy,
    P: FnMut(&C::Item) -> R,
{
    !every(collection, |item| !predicate(item).is_truthy())
}

/// Returns whether at least one element is itself truthy.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::some_truthy;
///
/// assert!(some_truthy(&["", "moe"]));
/// assert!(!some_truthy(&[0, 0]));
/// ```
pub fn some_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    some(collection, |item| item.is_truthy())
}
