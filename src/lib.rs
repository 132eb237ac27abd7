//! # underbar
//!
//! A functional utility library: collection operations, sequence
//! combinators, and function decorators.
//!
//! ## Overview
//!
//! - **Collections**: one traversal primitive ([`collection::each`]) and one
//!   reducer ([`collection::fold`]), with `map`, `filter`, `every`, `uniq`
//!   and the rest derived from them. Sequences and key/value mappings are
//!   treated uniformly through the [`collection::Collection`] trait.
//! - **Combinators**: `zip`, `flatten`, `intersection`, `difference`,
//!   `shuffle`.
//! - **Decorators**: `once`, `memoize`, `delay`, `throttle`. Timing goes
//!   through a [`scheduler::Scheduler`], either a deterministic virtual
//!   clock or tokio timers.
//!
//! All operations are eager and never mutate their input, except `extend`
//! and `defaults`, which mutate the destination mapping by contract.
//!
//! ## Feature Flags
//!
//! - `collection`: traversal, reducer and derived operations
//! - `combinator`: sequence combinators (uses `rand` for `shuffle`)
//! - `decorator`: function decorators and the virtual scheduler
//! - `async`: the tokio-backed scheduler
//! - `fxhash` / `ahash`: faster hashers for `memoize` caches
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use underbar::prelude::*;
//!
//! let evens = filter(&vec![1, 2, 3, 4, 5, 6], |value| value % 2 == 0);
//! assert_eq!(evens, vec![2, 4, 6]);
//!
//! let total = fold(&evens, |sum, value| Some(*sum + value), 0);
//! assert_eq!(total, 12);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the operations of every enabled module.
///
/// # Usage
///
/// ```rust
/// use underbar::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "combinator")]
    pub use crate::combinator::*;

    #[cfg(feature = "decorator")]
    pub use crate::decorator::*;

    #[cfg(feature = "decorator")]
    pub use crate::scheduler::*;
}

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "combinator")]
pub mod combinator;

#[cfg(feature = "decorator")]
pub mod decorator;

#[cfg(feature = "decorator")]
pub mod scheduler;
