//! A deterministic scheduler over a virtual clock.

use std::cell::RefCell;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use super::{Scheduler, TimerId};

/// A scheduled task waiting in the queue.
struct Entry {
    deadline: Duration,
    id: TimerId,
    task: Box<dyn FnOnce()>,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.deadline == other.deadline && self.id == other.id
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Earlier deadline first; equal deadlines run in scheduling order.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.deadline, self.id).cmp(&(other.deadline, other.id))
    }
}

#[derive(Default)]
struct Queue {
    now: Duration,
    next_sequence: u64,
    entries: BinaryHeap<Reverse<Entry>>,
}

/// A single execution queue driven by a virtual clock.
///
/// Time starts at zero and only moves through [`advance`](Self::advance) and
/// [`run_until_idle`](Self::run_until_idle). Due tasks run in deadline order,
/// ties in scheduling order, and the clock reads each task's deadline while
/// it runs. Tasks may schedule further tasks; those run in the same
/// `advance` call when they fall due within it.
///
/// Cloning yields another handle to the same queue.
///
/// # Examples
///
/// ```rust
/// use underbar::scheduler::{Scheduler, VirtualScheduler};
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use std::time::Duration;
///
/// let scheduler = VirtualScheduler::new();
/// let log = Rc::new(RefCell::new(Vec::new()));
///
/// for (name, millis) in [("slow", 30), ("fast", 10)] {
///     let log = Rc::clone(&log);
///     scheduler.schedule(Duration::from_millis(millis), Box::new(move || log.borrow_mut().push(name)));
/// }
///
/// assert_eq!(scheduler.run_until_idle(), 2);
/// assert_eq!(*log.borrow(), vec!["fast", "slow"]);
/// assert_eq!(scheduler.now(), Duration::from_millis(30));
/// ```
#[derive(Clone, Default)]
pub struct VirtualScheduler {
    queue: Rc<RefCell<Queue>>,
}

impl VirtualScheduler {
    /// Creates an empty queue with the clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the time elapsed on the virtual clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.queue.borrow().now
    }

    /// Returns the number of tasks waiting to run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().entries.len()
    }

    /// Moves the clock forward by `by`, running every task that falls due.
    ///
    /// Returns the number of tasks run. The clock stops at
    /// [`Duration::MAX`] rather than overflowing.
    #[must_use = "returns the number of tasks run"]
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now().saturating_add(by);
        let fired = self.run_due(target);
        self.queue.borrow_mut().now = target;
        fired
    }

    /// Runs tasks until the queue is empty, moving the clock to the last
    /// deadline reached.
    ///
    /// Returns the number of tasks run. Never returns if tasks keep
    /// rescheduling themselves.
    #[must_use = "returns the number of tasks run"]
    pub fn run_until_idle(&self) -> usize {
        self.run_due(Duration::MAX)
    }

    fn run_due(&self, target: Duration) -> usize {
        let mut fired = 0;
        while let Some(task) = self.pop_due(target) {
            task();
            fired += 1;
        }
        fired
    }

    /// The queue borrow ends before the task runs, so tasks may schedule.
    fn pop_due(&self, target: Duration) -> Option<Box<dyn FnOnce()>> {
        let mut queue = self.queue.borrow_mut();
        let is_due = queue
            .entries
            .peek()
            .is_some_and(|Reverse(entry)| entry.deadline <= target);
        if !is_due {
            return None;
        }
        let Reverse(entry) = queue.entries.pop()?;
        queue.now = queue.now.max(entry.deadline);
        tracing::trace!(timer = %entry.id, at = ?entry.deadline, "virtual timer fired");
        Some(entry.task)
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TimerId {
        let mut queue = self.queue.borrow_mut();
        let id = TimerId::new(queue.next_sequence);
        queue.next_sequence += 1;
        let deadline = queue.now.saturating_add(delay);
        tracing::trace!(timer = %id, delay = ?delay, deadline = ?deadline, "virtual timer scheduled");
        queue.entries.push(Reverse(Entry { deadline, id, task }));
        id
    }
}

impl fmt::Debug for VirtualScheduler {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let queue = self.queue.borrow();
        formatter
            .debug_struct("VirtualScheduler")
            .field("now", &queue.now)
            .field("pending", &queue.entries.len())
            .finish()
    }
}

static_assertions::assert_not_impl_any!(VirtualScheduler: Send, Sync);
