//! A function that runs at most once.
//!
//! # Examples
//!
//! ```rust
//! use underbar::decorator::once;
//!
//! let initialize = once(|port: u16| format!("listening on {port}"));
//!
//! assert_eq!(initialize.call(8080), "listening on 8080");
//! // Later calls return the first result, whatever their arguments.
//! assert_eq!(initialize.call(9090), "listening on 8080");
//! ```

use std::cell::RefCell;
use std::fmt;

/// The internal state of a [`Once`].
#[derive(Debug)]
enum OnceState<F, R> {
    /// The function has not been called yet.
    Uncalled(F),
    /// The function has run; its result is kept here.
    Called(R),
    /// The function is running, or panicked while running.
    Poisoned,
}

/// Wraps a function so that only the first call runs it.
///
/// The first [`call`](Self::call) consumes the function and stores its
/// result; every later call returns a clone of that result. Several
/// arguments are passed as a tuple.
///
/// # Type Parameters
///
/// * `F` - The wrapped function, `FnOnce(A) -> R`
/// * `R` - The result type
pub struct Once<F, R> {
    state: RefCell<OnceState<F, R>>,
}

/// Wraps `function` in a [`Once`].
///
/// Each call to `once` produces an independent wrapper with fresh state.
#[inline]
pub const fn once<A, R, F>(function: F) -> Once<F, R>
where
    F: FnOnce(A) -> R,
{
    Once::new(function)
}

impl<F, R> Once<F, R> {
    /// Creates an uncalled wrapper around `function`.
    #[inline]
    pub const fn new(function: F) -> Self {
        Self {
            state: RefCell::new(OnceState::Uncalled(function)),
        }
    }

    /// Calls the function on the first invocation; afterwards returns the
    /// stored result without calling anything.
    ///
    /// # Panics
    ///
    /// - If the wrapped function panics, the panic propagates and the wrapper
    ///   becomes poisoned.
    /// - If the wrapper is poisoned, including when it is called again from
    ///   inside its own function.
    pub fn call<A>(&self, args: A) -> R
    where
        F: FnOnce(A) -> R,
        R: Clone,
    {
        let function = {
            let mut state = self.state.borrow_mut();
            match std::mem::replace(&mut *state, OnceState::Poisoned) {
                OnceState::Uncalled(function) => function,
                OnceState::Called(result) => {
                    let cached = result.clone();
                    *state = OnceState::Called(result);
                    return cached;
                }
                OnceState::Poisoned => panic!("Once instance has been poisoned"),
            }
        };

        tracing::debug!("once: running wrapped function");
        let result = function(args);
        *self.state.borrow_mut() = OnceState::Called(result.clone());
        result
    }

    /// Returns whether the function has already run to completion.
    pub fn is_called(&self) -> bool {
        matches!(*self.state.borrow(), OnceState::Called(_))
    }

    /// Returns whether the wrapper is poisoned.
    pub fn is_poisoned(&self) -> bool {
        matches!(*self.state.borrow(), OnceState::Poisoned)
    }

    /// Returns the stored result, if the function has run.
    pub fn into_result(self) -> Option<R> {
        match self.state.into_inner() {
            OnceState::Called(result) => Some(result),
            OnceState::Uncalled(_) | OnceState::Poisoned => None,
        }
    }
}

impl<F, R: fmt::Debug> fmt::Debug for Once<F, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            OnceState::Uncalled(_) => formatter.write_str("Once(<uncalled>)"),
            OnceState::Called(result) => formatter.debug_tuple("Once").field(result).finish(),
            OnceState::Poisoned => formatter.write_str("Once(<poisoned>)"),
        }
    }
}

static_assertions::assert_not_impl_any!(Once<fn(i32) -> i32, i32>: Sync);
