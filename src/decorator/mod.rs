//! Function decorators that change when, and how often, a function runs.
//!
//! - [`once`]: run on the first call only, then replay its result
//! - [`memoize`]: cache results by argument value
//! - [`delay`]: run once after a wait, through a [`Scheduler`](crate::scheduler::Scheduler)
//! - [`throttle`]: run at most once per window, dropping calls in between
//!
//! Decorators are plain structs owning the wrapped function and their state;
//! they are invoked through `call`. Functions of several arguments take them
//! as a tuple. All state is single-threaded (`Cell`/`RefCell`/`Rc`) and no
//! borrow of it is held while the wrapped function runs.
//!
//! # Examples
//!
//! ```rust
//! use underbar::decorator::{memoize, once};
//!
//! let greet = once(|name: &str| format!("hello, {name}"));
//! assert_eq!(greet.call("ada"), "hello, ada");
//! assert_eq!(greet.call("grace"), "hello, ada");
//!
//! let length = memoize(|text: &String| text.chars().count());
//! assert_eq!(length.call("héllo".to_owned()), 5);
//! assert!(length.is_cached(&"héllo".to_owned()));
//! ```

mod delay;
mod memoize;
mod once;
mod throttle;

pub use delay::delay;
pub use memoize::{CacheHasher, Memoize, memoize};
pub use once::{Once, once};
pub use throttle::{Throttle, throttle};
