//! Set-like combinators over sequences: intersection and difference.
//!
//! Both keep the order and the duplicates of the first sequence, and test
//! membership in the others with [`index_of`].

use crate::collection::{every, filter, index_of, some};

/// Keeps the elements of the first sequence that appear in every other
/// sequence.
///
/// The membership check for an element stops at the first sequence that
/// lacks it. With a single sequence, every element is kept; with none, the
/// result is empty.
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::intersection;
///
/// let stooges = ["moe", "curly", "larry"];
/// let leaders = ["moe", "groucho"];
/// assert_eq!(intersection(&[&stooges, &leaders]), vec!["moe"]);
/// ```
pub fn intersection<T: PartialEq + Clone>(sequences: &[&[T]]) -> Vec<T> {
    let Some((leader, others)) = sequences.split_first() else {
        return Vec::new();
    };
    filter(*leader, |element| {
        every(others, |other| index_of(other, element).is_some())
    })
}

/// Keeps the elements of the first sequence that appear in none of the
/// other sequences.
///
/// # Examples
///
/// ```rust
/// use underbar::combinator::difference;
///
/// assert_eq!(difference(&[&[1, 2, 3], &[2]]), vec![1, 3]);
/// assert_eq!(difference(&[&[1, 2, 3, 4], &[2, 30], &[4]]), vec![1, 3]);
/// ```
pub fn difference<T: PartialEq + Clone>(sequences: &[&[T]]) -> Vec<T> {
    let Some((leader, others)) = sequences.split_first() else {
        return Vec::new();
    };
    filter(*leader, |element| {
        !some(others, |other| index_of(other, element).is_some())
    })
}
