use std::cell::{Cell, RefCell};
use std::time::Duration;

use crate::host::{Dispatcher, DispatcherPriority};

struct Timer {
    due: Duration,
    priority: DispatcherPriority,
    sequence: u64,
    task: Box<dyn FnOnce()>,
}

/// A [`Dispatcher`] driven by an explicit clock.
///
/// Nothing runs until [`advance_to`](Self::advance_to) moves the clock past a
/// task's due time. Due tasks run in due-time order, then by descending
/// priority, then in scheduling order.
#[derive(Default)]
pub struct TimerQueue {
    now: Cell<Duration>,
    next_sequence: Cell<u64>,
    pending: RefCell<Vec<Timer>>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now.get()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Move the clock to `now` and run every task that falls due, including
    /// tasks scheduled by other tasks. Returns how many ran.
    ///
    /// The clock never moves backwards.
    pub fn advance_to(&self, now: Duration) -> usize {
        let target = now.max(self.now.get());
        let mut ran = 0;

        while let Some(timer) = self.pop_due(target) {
            self.now.set(timer.due.max(self.now.get()));
            (timer.task)();
            ran += 1;
        }

        self.now.set(target);
        ran
    }

    fn pop_due(&self, target: Duration) -> Option<Timer> {
        let mut pending = self.pending.borrow_mut();
        let index = pending
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= target)
            .min_by(|(_, a), (_, b)| {
                a.due
                    .cmp(&b.due)
                    .then(b.priority.cmp(&a.priority))
                    .then(a.sequence.cmp(&b.sequence))
            })
            .map(|(index, _)| index)?;
        Some(pending.swap_remove(index))
    }
}

impl Dispatcher for TimerQueue {
    fn run_once(&self, delay: Duration, priority: DispatcherPriority, task: Box<dyn FnOnce()>) {
        let sequence = self.next_sequence.get();
        self.next_sequence.set(sequence + 1);
        self.pending.borrow_mut().push(Timer {
            due: self.now.get() + delay,
            priority,
            sequence,
            task,
        });
    }
}
