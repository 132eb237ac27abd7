//! Caching a function's results by argument value.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// The hasher used by [`Memoize`] caches.
#[cfg(feature = "fxhash")]
pub type CacheHasher = rustc_hash::FxBuildHasher;

/// The hasher used by [`Memoize`] caches.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type CacheHasher = ahash::RandomState;

/// The hasher used by [`Memoize`] caches.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type CacheHasher = std::collections::hash_map::RandomState;

/// Wraps a function with a per-instance result cache.
///
/// The argument value is the cache key, so `A` must be `Eq + Hash`; pass
/// several arguments as a tuple. The cache only grows.
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::memoize;
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let area = memoize(|&(width, height): &(u32, u32)| {
///     calls.set(calls.get() + 1);
///     width * height
/// });
///
/// assert_eq!(area.call((3, 4)), 12);
/// assert_eq!(area.call((3, 4)), 12);
/// assert_eq!(area.call((4, 3)), 12);
/// assert_eq!(calls.get(), 2);
/// assert_eq!(area.cached_len(), 2);
/// ```
pub struct Memoize<F, A, R> {
    function: F,
    cache: RefCell<HashMap<A, R, CacheHasher>>,
}

/// Wraps `function` in a [`Memoize`] with an empty cache.
#[inline]
pub fn memoize<A, R, F>(function: F) -> Memoize<F, A, R>
where
    F: Fn(&A) -> R,
    A: Eq + Hash,
{
    Memoize::new(function)
}

impl<F, A, R> Memoize<F, A, R>
where
    F: Fn(&A) -> R,
    A: Eq + Hash,
{
    /// Creates a wrapper with an empty cache.
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: RefCell::new(HashMap::with_hasher(CacheHasher::default())),
        }
    }

    /// Returns the cached result for `args`, or computes and caches it.
    ///
    /// The function may call back into the same wrapper; the cache is not
    /// borrowed while it runs. A panicking call caches nothing.
    pub fn call(&self, args: A) -> R
    where
        R: Clone,
    {
        if let Some(cached) = self.cache.borrow().get(&args) {
            tracing::trace!("memoize: cache hit");
            return cached.clone();
        }

        tracing::trace!("memoize: cache miss");
        let result = (self.function)(&args);
        self.cache.borrow_mut().insert(args, result.clone());
        result
    }

    /// Returns whether a result for `args` is cached.
    pub fn is_cached(&self, args: &A) -> bool {
        self.cache.borrow().contains_key(args)
    }

    /// Returns the number of cached results.
    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<F, A, R> fmt::Debug for Memoize<F, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoize")
            .field("cached", &self.cache.borrow().len())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_not_impl_any!(Memoize<fn(&i32) -> i32, i32, i32>: Sync);
