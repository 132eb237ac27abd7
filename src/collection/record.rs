//! Operations over collections of records: `pluck`, `sort_by` and `invoke`.
//!
//! A *record* is any element that can look up a property by key
//! ([`Lookup`]) or dispatch a method by name ([`Methods`]). Maps are records
//! keyed by their own key type; vectors and arrays are records keyed by
//! index.
//!
//! # Examples
//!
//! ```rust
//! use underbar::collection::{Property, pluck, sort_by};
//! use std::collections::BTreeMap;
//!
//! let people = vec![
//!     BTreeMap::from([("name", "moe"), ("role", "leader")]),
//!     BTreeMap::from([("name", "curly")]),
//! ];
//!
//! assert_eq!(pluck(&people, "role"), vec![Some("leader"), None]);
//!
//! let sorted = sort_by(&people, Property("name"));
//! assert_eq!(pluck(&sorted, "name"), vec![Some("curly"), Some("moe")]);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::derived::map;
use super::error::InvokeError;
use super::reduce::fold;
use super::traverse::Collection;

// =============================================================================
// Lookup
// =============================================================================

/// A record whose properties can be read by key.
pub trait Lookup<Q: ?Sized> {
    /// The property value type.
    type Value;

    /// Returns the property stored under `key`, if any.
    fn lookup(&self, key: &Q) -> Option<&Self::Value>;
}

impl<K, V, Q> Lookup<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Value = V;

    #[inline]
    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, S, Q> Lookup<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    type Value = V;

    #[inline]
    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<T> Lookup<usize> for Vec<T> {
    type Value = T;

    #[inline]
    fn lookup(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}

impl<T, const N: usize> Lookup<usize> for [T; N] {
    type Value = T;

    #[inline]
    fn lookup(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}

/// Extracts the property `key` from every element.
///
/// Elements without the property yield `None`.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::pluck;
///
/// let rows = vec![vec![1, 2], vec![3]];
/// assert_eq!(pluck(&rows, &1), vec![Some(2), None]);
/// ```
pub fn pluck<C, Q>(collection: &C, key: &Q) -> Vec<Option<<C::Item as Lookup<Q>>::Value>>
where
    C: Collection + ?Sized,
    C::Item: Lookup<Q>,
    <C::Item as Lookup<Q>>::Value: Clone,
    Q: ?Sized,
{
    map(collection, |item| item.lookup(key).cloned())
}

// =============================================================================
// Sorting
// =============================================================================

/// Names a property to sort or select by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property<'k, Q: ?Sized>(pub &'k Q);

/// Decides the relative order of two elements for [`sort_by`].
///
/// Implemented for key functions `FnMut(&T) -> R` (compared by their output)
/// and for [`Property`] (compared by the named property, missing first).
pub trait SortCriterion<T> {
    /// Compares `left` with `right`.
    fn compare(&mut self, left: &T, right: &T) -> Ordering;
}

impl<T, R, F> SortCriterion<T> for F
where
    F: FnMut(&T) -> R,
    R: PartialOrd,
{
    fn compare(&mut self, left: &T, right: &T) -> Ordering {
        let left = self(left);
        let right = self(right);
        rank(&left, &right)
    }
}

impl<T, Q> SortCriterion<T> for Property<'_, Q>
where
    T: Lookup<Q>,
    T::Value: PartialOrd,
    Q: ?Sized,
{
    fn compare(&mut self, left: &T, right: &T) -> Ordering {
        rank(&left.lookup(self.0), &right.lookup(self.0))
    }
}

/// Unordered pairs (such as NaN against anything) count as ties.
fn rank<R: PartialOrd>(left: &R, right: &R) -> Ordering {
    left.partial_cmp(right).unwrap_or(Ordering::Equal)
}

/// Returns a sorted copy of the collection's elements.
///
/// The sort is stable: ties keep their traversal order. Closures used as
/// criteria need an annotated parameter type, and must describe a consistent
/// order (a key that is sometimes NaN does not).
///
/// # Examples
///
/// ```rust
/// use underbar::collection::sort_by;
///
/// let words = ["banana", "fig", "apple"];
/// assert_eq!(sort_by(&words, |word: &&str| word.len()), vec!["fig", "apple", "banana"]);
/// ```
pub fn sort_by<C, S>(collection: &C, mut criterion: S) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    S: SortCriterion<C::Item>,
{
    let mut sorted = map(collection, |element| element.clone());
    sorted.sort_by(|left, right| criterion.compare(left, right));
    sorted
}

// =============================================================================
// Invocation
// =============================================================================

/// Names a method to call on every element with [`invoke`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Method<'n>(pub &'n str);

/// A record exposing methods by name.
///
/// `A` is the argument type shared by the methods; use a tuple for several
/// arguments and `()` for none.
pub trait Methods<A: ?Sized> {
    /// The common return type of the methods.
    type Output;

    /// Calls the method `name` on `self`, or returns `None` if there is no
    /// such method.
    fn call_method(&self, name: &str, args: &A) -> Option<Self::Output>;
}

/// Something [`invoke`] can apply to an element.
///
/// Implemented for functions `FnMut(&T, &A) -> R`, which receive the element
/// as their receiver, and for [`Method`], which dispatches through
/// [`Methods`].
pub trait Invocation<T, A: ?Sized> {
    /// The result of one invocation.
    type Output;

    /// Applies the invocation to `target`, found at traversal `position`.
    ///
    /// # Errors
    ///
    /// Returns [`InvokeError::UnknownMethod`] when `target` has no method of
    /// the requested name.
    fn invoke_on(
        &mut self,
        target: &T,
        args: &A,
        position: usize,
    ) -> Result<Self::Output, InvokeError>;
}

impl<T, A, R, F> Invocation<T, A> for F
where
    A: ?Sized,
    F: FnMut(&T, &A) -> R,
{
    type Output = R;

    #[inline]
    fn invoke_on(&mut self, target: &T, args: &A, _: usize) -> Result<R, InvokeError> {
        Ok(self(target, args))
    }
}

impl<T, A> Invocation<T, A> for Method<'_>
where
    T: Methods<A>,
    A: ?Sized,
{
    type Output = T::Output;

    fn invoke_on(
        &mut self,
        target: &T,
        args: &A,
        position: usize,
    ) -> Result<T::Output, InvokeError> {
        target
            .call_method(self.0, args)
            .ok_or_else(|| InvokeError::UnknownMethod {
                method: self.0.to_string(),
                position,
            })
    }
}

/// Applies `invocation` to every element with `args`, collecting results in
/// traversal order.
///
/// # Errors
///
/// Returns the first [`InvokeError`]; elements after the failing one are not
/// invoked.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::invoke;
///
/// let names = ["moe", "curly"];
/// let shouted = invoke(&names, |name: &&str, suffix: &str| format!("{}{suffix}", name.to_uppercase()), "!");
/// assert_eq!(shouted, Ok(vec!["MOE!".to_string(), "CURLY!".to_string()]));
/// ```
pub fn invoke<C, A, I>(
    collection: &C,
    mut invocation: I,
    args: &A,
) -> Result<Vec<I::Output>, InvokeError>
where
    C: Collection + ?Sized,
    A: ?Sized,
    I: Invocation<C::Item, A>,
{
    fold(
        collection,
        |results: &mut Result<Vec<I::Output>, InvokeError>, item| {
            let Ok(values) = results else {
                return None;
            };
            match invocation.invoke_on(item, args, values.len()) {
                Ok(value) => {
                    values.push(value);
                    None
                }
                Err(error) => Some(Err(error)),
            }
        },
        Ok(Vec::new()),
    )
}
