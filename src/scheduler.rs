//! Cancellable timers on a virtual clock.
//!
//! The host advances the clock; due tasks are popped one at a time so that a firing can cancel
//! tasks that would otherwise fire later in the same advance. Every task is addressed by a
//! [`TaskHandle`] which doubles as its disposal token.

use std::collections::BTreeMap;
use std::time::Duration;

const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Token identifying a scheduled task.
pub struct TaskHandle(u64);

#[derive(Clone, Copy, Debug)]
enum Repeat {
    Once,
    Every(Duration),
}

#[derive(Clone, Copy, Debug)]
struct Task {
    due: Duration,
    repeat: Repeat,
}

#[derive(Debug, Default)]
/// Single-threaded timer queue.
pub struct Scheduler {
    now: Duration,
    next_id: u64,
    tasks: BTreeMap<TaskHandle, Task>,
}

impl Scheduler {
    #[must_use]
    /// Creates a scheduler at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedules a one-shot task `delay` from now.
    pub fn set_timeout(&mut self, delay: Duration) -> TaskHandle {
        self.insert(delay, Repeat::Once)
    }

    /// Schedules a task every `period`, first firing one period from now.
    pub fn set_interval(&mut self, period: Duration) -> TaskHandle {
        let period = period.max(MIN_PERIOD);
        self.insert(period, Repeat::Every(period))
    }

    fn insert(&mut self, delay: Duration, repeat: Repeat) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.tasks.insert(
            handle,
            Task {
                due: self.now + delay,
                repeat,
            },
        );
        handle
    }

    /// Cancels a task. Returns whether it was still pending.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        self.tasks.remove(&handle).is_some()
    }

    #[must_use]
    /// Whether the task will still fire.
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.tasks.contains_key(&handle)
    }

    #[must_use]
    /// Number of pending tasks.
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Pops the earliest task due at or before `deadline`, moving the clock to its due time.
    ///
    /// Interval tasks are re-armed before being returned.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<TaskHandle> {
        let (&handle, &task) = self
            .tasks
            .iter()
            .filter(|(_, task)| task.due <= deadline)
            .min_by_key(|(handle, task)| (task.due, **handle))?;
        self.now = self.now.max(task.due);
        match task.repeat {
            Repeat::Once => {
                self.tasks.remove(&handle);
            }
            Repeat::Every(period) => {
                if let Some(pending) = self.tasks.get_mut(&handle) {
                    pending.due = task.due + period;
                }
            }
        }
        Some(handle)
    }

    /// Moves the clock forward to `deadline` once its due tasks have been popped.
    pub fn settle(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }

    /// Advances by `dt` and returns every firing in order.
    pub fn advance(&mut self, dt: Duration) -> Vec<TaskHandle> {
        let deadline = self.now + dt;
        let mut fired = Vec::new();
        while let Some(handle) = self.pop_due(deadline) {
            fired.push(handle);
        }
        self.settle(deadline);
        fired
    }
}

#[derive(Debug, Default)]
/// Handles released together on rebuild or teardown.
pub struct Disposables {
    handles: Vec<TaskHandle>,
}

impl Disposables {
    /// Tracks a handle for later disposal.
    pub fn push(&mut self, handle: TaskHandle) {
        self.handles.push(handle);
    }

    #[must_use]
    /// Whether `handle` is tracked.
    pub fn contains(&self, handle: TaskHandle) -> bool {
        self.handles.contains(&handle)
    }

    #[must_use]
    /// Whether nothing is tracked.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Cancels every tracked task.
    pub fn dispose(&mut self, scheduler: &mut Scheduler) {
        for handle in self.handles.drain(..) {
            scheduler.cancel(handle);
        }
    }
}

#[cfg(test)]
#[path = "tests/scheduler.rs"]
mod tests;
