//! Collection traversal and the operations derived from it.
//!
//! This module is layered, leaf first:
//!
//! - [`Collection`] and [`each`]: the traversal engine, the only code aware
//!   of whether a collection is a sequence or a mapping
//! - [`fold`] and [`reduce`]: the reducer, built on `each`
//! - [`map`], [`filter`], [`reject`], [`uniq`], [`contains`], [`every`],
//!   [`some`]: derived operations, built on the reducer
//! - [`pluck`], [`sort_by`], [`invoke`]: record operations
//! - [`extend`], [`defaults`]: shallow merges over mappings
//! - [`first`], [`last`] and their counted forms
//!
//! # Examples
//!
//! ```rust
//! use underbar::collection::{filter, map, reduce};
//!
//! let numbers = vec![1, 2, 3, 4, 5, 6];
//!
//! let evens = filter(&numbers, |value| value % 2 == 0);
//! let squares = map(&evens, |value| value * value);
//! let total = reduce(&squares, |sum, square| Some(*sum + square), None);
//!
//! assert_eq!(total, Some(4 + 16 + 36));
//! ```
//!
//! # Laws
//!
//! - **Traversal order**: every operation visits elements in the order
//!   defined by [`Collection::each`].
//! - **Reducer tolerance**: an iterator returning `None` leaves the
//!   accumulator as it is.
//! - **Derivation**: `reject(c, p) == filter(c, !p)` and
//!   `some(c, p) == !every(c, !p)`.

mod access;
mod derived;
mod error;
mod merge;
mod record;
mod reduce;
mod traverse;
mod truthy;

pub use access::{first, first_n, last, last_n};
pub use derived::{contains, every, every_truthy, filter, map, reject, some, some_truthy, uniq};
pub use error::InvokeError;
pub use merge::{Assign, defaults, extend};
pub use record::{
    Invocation, Lookup, Method, Methods, Property, SortCriterion, invoke, pluck, sort_by,
};
pub use reduce::{fold, reduce};
pub use traverse::{Collection, Shape, each, index_of};
pub use truthy::{Truthy, identity};
