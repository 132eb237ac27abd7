//! Combinators over ordered sequences.
//!
//! - [`zip`] / [`zip2`]: group elements by index
//! - [`flatten`] / [`flatten_into`]: flatten [`Nested`] sequences
//! - [`intersection`] / [`difference`]: set-like filtering of the first
//!   sequence against the others
//! - [`shuffle`] / [`shuffle_with`]: random permutations of a copy
//!
//! Functions that take "several sequences" take them as a slice of slices,
//! `&[&[T]]`.
//!
//! # Examples
//!
//! ```rust
//! use underbar::combinator::{difference, flatten, intersection};
//! use underbar::nested;
//!
//! let flat = flatten(&nested![1, [2, [3, [4]], 5]]);
//! assert_eq!(flat, vec![1, 2, 3, 4, 5]);
//!
//! assert_eq!(intersection(&[&flat[..], &[2, 4, 6]]), vec![2, 4]);
//! assert_eq!(difference(&[&flat[..], &[2, 4, 6]]), vec![1, 3, 5]);
//! ```

mod flatten;
mod set;
mod shuffle;
mod zip;

pub use flatten::{Nested, flatten, flatten_into};
pub use set::{difference, intersection};
pub use shuffle::{shuffle, shuffle_with};
pub use zip::{zip, zip2};
