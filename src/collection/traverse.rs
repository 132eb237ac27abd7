//! The traversal engine.
//!
//! [`Collection`] is the only place where the shape of a collection is known.
//! Every other operation in this crate visits elements through
//! [`Collection::each`], either directly or via the reducer.
//!
//! A collection is either an *ordered sequence*, keyed by its `usize` index,
//! or a *keyed mapping*, keyed by its own key type. The shape is a property of
//! the Rust type, so exactly one traversal strategy exists for any value.
//!
//! # Examples
//!
//! ```rust
//! use underbar::collection::{Collection, Shape, each};
//! use std::collections::BTreeMap;
//!
//! let mut visited = Vec::new();
//! each(&vec!["a", "b"], |value, index, _| visited.push((*index, *value)));
//! assert_eq!(visited, vec![(0, "a"), (1, "b")]);
//!
//! let ages = BTreeMap::from([("moe", 30), ("curly", 25)]);
//! let mut names = Vec::new();
//! each(&ages, |_, name, _| names.push(*name));
//! assert_eq!(names, vec!["curly", "moe"]);
//!
//! assert_eq!(<BTreeMap<&str, i32> as Collection>::SHAPE, Shape::Mapping);
//! ```

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;

/// The two shapes a [`Collection`] can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Index-addressable, order-preserving container.
    Sequence,
    /// Key to value associations with unique keys.
    Mapping,
}

/// A container that can be traversed element by element.
///
/// # Associated Types
///
/// - `Key`: the position of an element (`usize` for sequences, the map key
///   for mappings).
/// - `Item`: the element (or mapped value) type.
///
/// # Laws
///
/// - **Completeness**: `each` visits every element exactly once.
/// - **Order**: sequences are visited in index order, mappings in their
///   enumeration order. Two traversals of an unmodified collection visit
///   elements in the same order.
pub trait Collection {
    /// The position type passed to iterators.
    type Key;

    /// The element type.
    type Item;

    /// The shape of this collection type.
    const SHAPE: Shape;

    /// Calls `iterator(value, key, collection)` once per element, in order.
    fn each<'a, F>(&'a self, iterator: F)
    where
        F: FnMut(&'a Self::Item, &Self::Key, &'a Self);

    /// Returns the number of elements.
    fn count(&self) -> usize {
        let mut count = 0;
        self.each(|_, _, _| count += 1);
        count
    }
}

// =============================================================================
// Ordered sequences
// =============================================================================

impl<T> Collection for [T] {
    type Key = usize;
    type Item = T;
    const SHAPE: Shape = Shape::Sequence;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a T, &usize, &'a Self),
    {
        for (index, value) in self.iter().enumerate() {
            iterator(value, &index, self);
        }
    }

    #[inline]
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for Vec<T> {
    type Key = usize;
    type Item = T;
    const SHAPE: Shape = Shape::Sequence;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a T, &usize, &'a Self),
    {
        for (index, value) in self.iter().enumerate() {
            iterator(value, &index, self);
        }
    }

    #[inline]
    fn count(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Key = usize;
    type Item = T;
    const SHAPE: Shape = Shape::Sequence;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a T, &usize, &'a Self),
    {
        for (index, value) in self.iter().enumerate() {
            iterator(value, &index, self);
        }
    }

    #[inline]
    fn count(&self) -> usize {
        N
    }
}

impl<T> Collection for VecDeque<T> {
    type Key = usize;
    type Item = T;
    const SHAPE: Shape = Shape::Sequence;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a T, &usize, &'a Self),
    {
        for (index, value) in self.iter().enumerate() {
            iterator(value, &index, self);
        }
    }

    #[inline]
    fn count(&self) -> usize {
        self.len()
    }
}

// =============================================================================
// Keyed mappings
// =============================================================================

/// Enumerates in ascending key order.
impl<K, V> Collection for BTreeMap<K, V> {
    type Key = K;
    type Item = V;
    const SHAPE: Shape = Shape::Mapping;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a V, &K, &'a Self),
    {
        for (key, value) in self {
            iterator(value, key, self);
        }
    }

    #[inline]
    fn count(&self) -> usize {
        self.len()
    }
}

/// Enumerates in the map's bucket order, which is stable for an unmodified
/// instance but differs between instances.
impl<K, V, S: BuildHasher> Collection for HashMap<K, V, S> {
    type Key = K;
    type Item = V;
    const SHAPE: Shape = Shape::Mapping;

    fn each<'a, F>(&'a self, mut iterator: F)
    where
        F: FnMut(&'a V, &K, &'a Self),
    {
        for (key, value) in self {
            iterator(value, key, self);
        }
    }

    #[inline]
    fn count(&self) -> usize {
        self.len()
    }
}

// =============================================================================
// Free functions
// =============================================================================

/// Calls `iterator(value, key, collection)` for each element of `collection`.
///
/// Nothing is collected; side effects are the iterator's business.
#[inline]
pub fn each<'a, C, F>(collection: &'a C, iterator: F)
where
    C: Collection + ?Sized,
    F: FnMut(&'a C::Item, &C::Key, &'a C),
{
    collection.each(iterator);
}

/// Returns the index of the first element equal to `target`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::index_of;
///
/// assert_eq!(index_of(&[10, 20, 10], &10), Some(0));
/// assert_eq!(index_of(&[10, 20, 10], &30), None);
/// ```
pub fn index_of<T: PartialEq>(sequence: &[T], target: &T) -> Option<usize> {
    let mut result = None;
    sequence.each(|item, index, _| {
        if result.is_none() && item == target {
            result = Some(*index);
        }
    });
    result
}
