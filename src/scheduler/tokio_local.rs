//! A scheduler backed by tokio timers on a `LocalSet`.

use std::cell::Cell;
use std::fmt;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use tokio::task::LocalSet;

use super::{Scheduler, TimerId};

/// Runs scheduled tasks as local tokio tasks after `tokio::time::sleep`.
///
/// Tasks are `!Send`, so they live on a [`LocalSet`] owned by the scheduler.
/// They make progress while the set is driven, typically by wrapping the
/// program's work in [`run_until`](Self::run_until). Under a paused tokio
/// clock (`#[tokio::test(start_paused = true)]`) timing is exact.
///
/// Cloning yields another handle to the same set.
///
/// # Examples
///
/// ```rust
/// use underbar::scheduler::{Scheduler, TokioScheduler};
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use std::time::Duration;
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().start_paused(true).build().unwrap().block_on(async {
/// let scheduler = TokioScheduler::new();
/// let fired = Rc::new(Cell::new(false));
/// let flag = Rc::clone(&fired);
///
/// scheduler
///     .run_until(async {
///         scheduler.schedule(Duration::from_millis(100), Box::new(move || flag.set(true)));
///         tokio::time::sleep(Duration::from_millis(150)).await;
///     })
///     .await;
///
/// assert!(fired.get());
/// # });
/// ```
#[derive(Clone)]
pub struct TokioScheduler {
    local: Rc<LocalSet>,
    next_sequence: Rc<Cell<u64>>,
}

impl TokioScheduler {
    /// Creates a scheduler with an empty local task set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            local: Rc::new(LocalSet::new()),
            next_sequence: Rc::new(Cell::new(0)),
        }
    }

    /// Drives `future` to completion while running scheduled tasks.
    #[allow(clippy::future_not_send, reason = "scheduled tasks are !Send and stay on this thread")]
    pub async fn run_until<F: Future>(&self, future: F) -> F::Output {
        self.local.run_until(future).await
    }
}

impl Default for TokioScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerId {
        let id = TimerId::new(self.next_sequence.get());
        self.next_sequence.set(id.sequence() + 1);
        tracing::trace!(timer = %id, delay = ?delay, "tokio timer scheduled");
        self.local.spawn_local(async move {
            tokio::time::sleep(delay).await;
            tracing::trace!(timer = %id, "tokio timer fired");
            task();
        });
        id
    }
}

impl fmt::Debug for TokioScheduler {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TokioScheduler")
            .field("scheduled", &self.next_sequence.get())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_not_impl_any!(TokioScheduler: Send, Sync);
