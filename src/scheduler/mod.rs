//! Timer scheduling for the time-sensitive decorators.
//!
//! [`delay`](crate::decorator::delay) and
//! [`Throttle`](crate::decorator::Throttle) never sleep. They hand a task and
//! a delay to a [`Scheduler`], which runs the task on a later turn of its
//! single execution queue.
//!
//! Two schedulers are provided:
//!
//! - [`VirtualScheduler`]: a deterministic queue over a virtual clock that
//!   only moves when told to. Ideal for tests and simulations.
//! - [`TokioScheduler`] (feature `async`): runs tasks on a tokio
//!   [`LocalSet`](tokio::task::LocalSet) after a `tokio::time::sleep`.
//!
//! Scheduled tasks cannot be cancelled.
//!
//! # Examples
//!
//! ```rust
//! use underbar::scheduler::{Scheduler, VirtualScheduler};
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! let scheduler = VirtualScheduler::new();
//! let fired = Rc::new(Cell::new(false));
//! let flag = Rc::clone(&fired);
//!
//! scheduler.schedule(Duration::from_millis(100), Box::new(move || flag.set(true)));
//!
//! let _ = scheduler.advance(Duration::from_millis(99));
//! assert!(!fired.get());
//! let _ = scheduler.advance(Duration::from_millis(1));
//! assert!(fired.get());
//! ```

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

#[cfg(feature = "async")]
mod tokio_local;
mod virtual_clock;

#[cfg(feature = "async")]
pub use tokio_local::TokioScheduler;
pub use virtual_clock::VirtualScheduler;

/// Identifies one scheduled task.
///
/// Identifiers are unique per scheduler and increase in scheduling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    /// Creates an identifier from its raw sequence number.
    #[inline]
    #[must_use]
    pub const fn new(sequence: u64) -> Self {
        Self(sequence)
    }

    /// Returns the raw sequence number.
    #[inline]
    #[must_use]
    pub const fn sequence(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "timer#{}", self.0)
    }
}

/// A facility that runs a task once a delay has elapsed.
///
/// # Contract
///
/// - `schedule` returns immediately; it never runs `task` synchronously.
/// - `task` runs at most once, no earlier than `delay` after scheduling.
/// - Two tasks are only ordered relative to each other by their deadlines.
pub trait Scheduler {
    /// Schedules `task` to run after `delay`.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerId;
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    #[inline]
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerId {
        (**self).schedule(delay, task)
    }
}

impl<S: Scheduler + ?Sized> Scheduler for &S {
    #[inline]
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerId {
        (**self).schedule(delay, task)
    }
}
