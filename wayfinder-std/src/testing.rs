//! Testing utilities for Wayfinder.
//!
//! Deterministic stand-ins for the collaborators a navigator talks to:
//!
//! - [`QueueScheduler`]: a UI context you pump by hand
//! - [`QueueExecutor`]: an executor you drain by hand
//! - [`RecordingBroadcaster`]: remembers every notification
//! - [`Recorder`]: a shared list for hooks to push into

use futures::{
    executor::block_on,
    future::{BoxFuture, join_all},
};
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};
use wayfinder_core::{Broadcaster, Executor, Notification, Scheduler, Task};

// ============================================================================
// Queue Scheduler
// ============================================================================

/// A scheduler that queues tasks until [`run_pending`](Self::run_pending).
///
/// Clones share the queue, so keep one clone and hand the other to the
/// navigator builder.
///
/// # Example
///
/// ```rust,ignore
/// let ui = QueueScheduler::new();
/// let navigator = Navigator::builder().scheduler(ui.clone()).build();
///
/// navigator.navigate(Route::Home, None)?;   // presentation queued
/// assert_eq!(ui.run_pending(), 1);          // ...and now delivered
/// ```
#[derive(Clone, Default)]
pub struct QueueScheduler {
    tasks: Arc<Mutex<VecDeque<Task>>>,
}

impl QueueScheduler {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run queued tasks, including ones queued while running, until the
    /// queue is empty. Returns how many ran.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        loop {
            let task = self.tasks.lock().unwrap().pop_front();
            match task {
                Some(task) => {
                    task();
                    ran += 1;
                }
                None => return ran,
            }
        }
    }

    /// Number of queued tasks.
    pub fn len(&self) -> usize {
        self.tasks.lock().unwrap().len()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Scheduler for QueueScheduler {
    fn schedule(&self, task: Task) {
        self.tasks.lock().unwrap().push_back(task);
    }
}

// ============================================================================
// Queue Executor
// ============================================================================

/// An executor that holds spawned futures until
/// [`run_until_idle`](Self::run_until_idle).
///
/// Only suitable for futures that complete without outside help; a future
/// waiting on something the test has not sent yet will block the drain.
#[derive(Clone, Default)]
pub struct QueueExecutor {
    futures: Arc<Mutex<Vec<BoxFuture<'static, ()>>>>,
}

impl QueueExecutor {
    /// Create an empty executor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drive queued futures, and any they spawn, to completion. Returns how
    /// many were driven.
    pub fn run_until_idle(&self) -> usize {
        let mut driven = 0;
        loop {
            let batch = std::mem::take(&mut *self.futures.lock().unwrap());
            if batch.is_empty() {
                return driven;
            }
            driven += batch.len();
            block_on(join_all(batch));
        }
    }

    /// Number of futures waiting to be driven.
    pub fn len(&self) -> usize {
        self.futures.lock().unwrap().len()
    }

    /// Whether nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Executor for QueueExecutor {
    fn spawn(&self, future: BoxFuture<'static, ()>) {
        self.futures.lock().unwrap().push(future);
    }
}

// ============================================================================
// Recording Broadcaster
// ============================================================================

/// A broadcaster that records every notification it is given.
#[derive(Clone, Default)]
pub struct RecordingBroadcaster {
    published: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingBroadcaster {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything published so far.
    pub fn notifications(&self) -> Vec<Notification> {
        self.published.lock().unwrap().clone()
    }

    /// Names of everything published so far.
    pub fn names(&self) -> Vec<String> {
        self.published
            .lock()
            .unwrap()
            .iter()
            .map(|n| n.name.clone())
            .collect()
    }
}

impl Broadcaster for RecordingBroadcaster {
    fn publish(&self, notification: Notification) {
        self.published.lock().unwrap().push(notification);
    }
}

// ============================================================================
// Recorder
// ============================================================================

/// A cloneable, thread-safe list for hooks to record into.
pub struct Recorder<T> {
    items: Arc<Mutex<Vec<T>>>,
}

impl<T> Recorder<T> {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self {
            items: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Record an item.
    pub fn push(&self, item: T) {
        self.items.lock().unwrap().push(item);
    }

    /// Remove and return everything recorded.
    pub fn take(&self) -> Vec<T> {
        std::mem::take(&mut *self.items.lock().unwrap())
    }

    /// Number of recorded items.
    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> Recorder<T> {
    /// Copy of everything recorded.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.lock().unwrap().clone()
    }
}

impl<T> Clone for Recorder<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
        }
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{QueueExecutor, QueueScheduler, Recorder};
    use wayfinder_core::{Executor, Scheduler};

    #[test]
    fn queue_scheduler_runs_nested_tasks() {
        let ui = QueueScheduler::new();
        let seen = Recorder::new();

        let (inner_ui, inner_seen) = (ui.clone(), seen.clone());
        ui.schedule(Box::new(move || {
            inner_seen.push("outer");
            let nested = inner_seen.clone();
            inner_ui.schedule(Box::new(move || nested.push("inner")));
        }));

        assert_eq!(ui.len(), 1);
        assert_eq!(ui.run_pending(), 2);
        assert!(ui.is_empty());
        assert_eq!(seen.take(), vec!["outer", "inner"]);
    }

    #[test]
    fn queue_executor_drains_spawned_futures() {
        let executor = QueueExecutor::new();
        let seen = Recorder::new();

        let (inner_exec, inner_seen) = (executor.clone(), seen.clone());
        executor.spawn(Box::pin(async move {
            inner_seen.push(1);
            let nested = inner_seen.clone();
            inner_exec.spawn(Box::pin(async move { nested.push(2) }));
        }));

        assert_eq!(executor.run_until_idle(), 2);
        assert_eq!(seen.snapshot(), vec![1, 2]);
    }
}
