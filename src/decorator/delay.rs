//! Deferred invocation.

use std::time::Duration;

use crate::scheduler::{Scheduler, TimerId};

/// Schedules one call of `function(args)` after `wait`.
///
/// Returns immediately. The call happens on a later turn of the scheduler's
/// queue, even for a zero `wait`, and each `delay` is independent of every
/// other. The result of the call is discarded; the returned [`TimerId`]
/// only identifies the scheduled task.
///
/// # Examples
///
/// ```rust
/// use underbar::decorator::delay;
/// use underbar::scheduler::VirtualScheduler;
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use std::time::Duration;
///
/// let scheduler = VirtualScheduler::new();
/// let log = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&log);
///
/// let wait = Duration::from_millis(50);
/// delay(&scheduler, move |message| sink.borrow_mut().push(message), wait, "hello");
/// assert!(log.borrow().is_empty());
///
/// let _ = scheduler.advance(Duration::from_millis(50));
/// assert_eq!(*log.borrow(), vec!["hello"]);
/// ```
pub fn delay<S, A, R, F>(scheduler: &S, function: F, wait: Duration, args: A) -> TimerId
where
    S: Scheduler + ?Sized,
    A: 'static,
    F: FnOnce(A) -> R + 'static,
{
    let timer = scheduler.schedule(
        wait,
        Box::new(move || {
            function(args);
        }),
    );
    tracing::debug!(%timer, wait_ms = wait.as_millis(), "delay: call scheduled");
    timer
}
