//! Shallow merges over keyed mappings.
//!
//! Both [`extend`] and [`defaults`] walk each source with
//! [`Collection::each`] and write into the destination through [`Assign`].
//! Later sources win over earlier ones in `extend`; in `defaults` the first
//! writer of a key wins and existing keys are never touched.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::traverse::Collection;

/// A mapping that can be written to by key.
pub trait Assign<K, V> {
    /// Stores `value` under `key`, replacing any previous value.
    fn assign(&mut self, key: K, value: V);

    /// Returns whether `key` is present.
    fn has_key(&self, key: &K) -> bool;
}

impl<K: Ord, V> Assign<K, V> for BTreeMap<K, V> {
    #[inline]
    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    #[inline]
    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> Assign<K, V> for HashMap<K, V, S> {
    #[inline]
    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }

    #[inline]
    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }
}

/// Copies every entry of every source into `destination`, overwriting
/// existing keys. Returns `destination` for chaining.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::extend;
/// use std::collections::BTreeMap;
///
/// let mut settings = BTreeMap::from([("key1", "something")]);
/// extend(
///     &mut settings,
///     &[
///         &BTreeMap::from([("key2", "something new"), ("key3", "something else new")]),
///         &BTreeMap::from([("bla", "even more stuff")]),
///     ],
/// );
/// assert_eq!(settings.len(), 4);
/// ```
pub fn extend<'d, M, S>(destination: &'d mut M, sources: &[&S]) -> &'d mut M
where
    M: Assign<S::Key, S::Item>,
    S: Collection + ?Sized,
    S::Key: Clone,
    S::Item: Clone,
{
    for source in sources {
        source.each(|value, key, _| destination.assign(key.clone(), value.clone()));
    }
    destination
}

/// Copies entries from the sources into `destination` only for keys it does
/// not already have. Returns `destination` for chaining.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::defaults;
/// use std::collections::BTreeMap;
///
/// let mut order = BTreeMap::from([("flavor", "chocolate")]);
/// defaults(&mut order, &[&BTreeMap::from([("flavor", "vanilla"), ("sprinkles", "lots")])]);
/// assert_eq!(order["flavor"], "chocolate");
/// assert_eq!(order["sprinkles"], "lots");
/// ```
pub fn defaults<'d, M, S>(destination: &'d mut M, sources: &[&S]) -> &'d mut M
where
    M: Assign<S::Key, S::Item>,
    S: Collection + ?Sized,
    S::Key: Clone,
    S::Item: Clone,
{
    for source in sources {
        source.each(|value, key, _| {
            if !destination.has_key(key) {
                destination.assign(key.clone(), value.clone());
            }
        });
    }
    destination
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn extend_overwrites_in_source_order() {
        let mut destination = BTreeMap::from([("a", 1)]);
        let first = BTreeMap::from([("a", 2), ("b", 2)]);
        let second = BTreeMap::from([("b", 3)]);
        extend(&mut destination, &[&first, &second]);
        assert_eq!(destination, BTreeMap::from([("a", 2), ("b", 3)]));
    }

    #[rstest]
    fn extend_with_no_sources_is_identity() {
        let mut destination = BTreeMap::from([("a", 1)]);
        extend::<_, BTreeMap<&str, i32>>(&mut destination, &[]);
        assert_eq!(destination, BTreeMap::from([("a", 1)]));
    }

    #[rstest]
    fn extend_returns_destination_for_chaining() {
        let mut destination: HashMap<&str, i32> = HashMap::new();
        let source = HashMap::from([("x", 1)]);
        let returned = extend(&mut destination, &[&source]);
        returned.assign("y", 2);
        assert_eq!(destination.len(), 2);
    }

    #[rstest]
    fn defaults_never_overwrites() {
        let mut destination = BTreeMap::from([("a", 1)]);
        let first = BTreeMap::from([("a", 9), ("b", 2)]);
        let second = BTreeMap::from([("b", 9), ("c", 3)]);
        defaults(&mut destination, &[&first, &second]);
        assert_eq!(destination, BTreeMap::from([("a", 1), ("b", 2), ("c", 3)]));
    }

    #[rstest]
    fn merges_accept_mixed_map_types() {
        let mut destination: HashMap<String, i32> = HashMap::new();
        let source = BTreeMap::from([("k".to_string(), 7)]);
        defaults(&mut destination, &[&source]);
        assert_eq!(destination.get("k"), Some(&7));
    }
}
