//! Rate limiting by dropping calls during a cooldown window.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::scheduler::{Scheduler, TimerId};

/// State shared between a [`Throttle`] and its cooldown timer.
struct Cooldown<R> {
    ready: Cell<bool>,
    last_result: RefCell<Option<R>>,
    pending: Cell<Option<TimerId>>,
}

impl<R> Cooldown<R> {
    const fn new() -> Self {
        Self {
            ready: Cell::new(true),
            last_result: RefCell::new(None),
            pending: Cell::new(None),
        }
    }

    fn finish(&self) {
        self.ready.set(true);
        if let Some(timer) = self.pending.take() {
            tracing::debug!(%timer, "throttle: cooldown elapsed, ready");
        }
    }
}

/// Wraps a function so that it runs at most once per `wait` window.
///
/// A throttle is READY or COOLING, starting READY.
///
/// - READY: the call runs the function, stores its result, switches to
///   COOLING and schedules a timer that switches back after `wait`.
/// - COOLING: the call is dropped and the stored result is returned.
///
/// Dropped calls are never queued or replayed. If the function panics the
/// throttle stays READY. A timer that outlives its throttle does nothing.
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::throttle;
/// use underbar::scheduler::VirtualScheduler;
/// use std::cell::Cell;
/// use std::time::Duration;
///
/// let scheduler = VirtualScheduler::new();
/// let calls = Cell::new(0);
/// let save = throttle(&scheduler, |document: &str| {
///     calls.set(calls.get() + 1);
///     format!("saved {document}")
/// }, Duration::from_millis(100));
///
/// assert_eq!(save.call("draft 1"), "saved draft 1");
/// let _ = scheduler.advance(Duration::from_millis(50));
/// assert_eq!(save.call("draft 2"), "saved draft 1");
/// let _ = scheduler.advance(Duration::from_millis(100));
/// assert_eq!(save.call("draft 3"), "saved draft 3");
/// assert_eq!(calls.get(), 2);
/// ```
pub struct Throttle<F, R, S> {
    function: F,
    wait: Duration,
    scheduler: S,
    state: Rc<Cooldown<R>>,
}

/// Wraps `function` in a READY [`Throttle`] whose timers go to `scheduler`.
#[inline]
pub fn throttle<S, A, R, F>(scheduler: S, function: F, wait: Duration) -> Throttle<F, R, S>
where
    S: Scheduler,
    F: Fn(A) -> R,
{
    Throttle {
        function,
        wait,
        scheduler,
        state: Rc::new(Cooldown::new()),
    }
}

impl<F, R, S> Throttle<F, R, S>
where
    S: Scheduler,
    R: Clone + 'static,
{
    /// Runs the function if READY; otherwise returns the stored result.
    pub fn call<A>(&self, args: A) -> R
    where
        F: Fn(A) -> R,
    {
        if !self.state.ready.get()
            && let Some(result) = self.state.last_result.borrow().clone()
        {
            tracing::trace!("throttle: call dropped while cooling");
            return result;
        }

        let result = (self.function)(args);
        *self.state.last_result.borrow_mut() = Some(result.clone());
        self.state.ready.set(false);

        let cooldown: Weak<Cooldown<R>> = Rc::downgrade(&self.state);
        let timer = self.scheduler.schedule(
            self.wait,
            Box::new(move || {
                if let Some(state) = cooldown.upgrade() {
                    state.finish();
                }
            }),
        );
        self.state.pending.set(Some(timer));
        tracing::debug!(%timer, wait_ms = self.wait.as_millis(), "throttle: executed, cooling");
        result
    }
}

impl<F, R, S> Throttle<F, R, S> {
    /// Returns whether the next call would run the function.
    pub fn is_ready(&self) -> bool {
        self.state.ready.get()
    }

    /// Returns the cooldown timer, while COOLING.
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.state.pending.get()
    }

    /// Returns the length of the cooldown window.
    pub const fn wait(&self) -> Duration {
        self.wait
    }
}

impl<F, R, S> fmt::Debug for Throttle<F, R, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Throttle")
            .field("wait", &self.wait)
            .field("ready", &self.state.ready.get())
            .field("pending", &self.state.pending.get())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_not_impl_any!(
    Throttle<fn(i32) -> i32, i32, crate::scheduler::VirtualScheduler>: Send, Sync
);
