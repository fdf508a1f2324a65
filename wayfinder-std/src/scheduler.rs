//! Reference UI schedulers.

use std::{
    io,
    panic::{self, AssertUnwindSafe},
    sync::{Arc, Mutex, PoisonError, mpsc},
    thread::{self, JoinHandle, ThreadId},
};
use tracing::{error, warn};
use wayfinder_core::{Scheduler, Task};

/// Runs every task immediately on the calling thread.
///
/// Suitable when `navigate` is only ever called from the UI thread, and in
/// tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineScheduler;

impl Scheduler for InlineScheduler {
    fn schedule(&self, task: Task) {
        task();
    }
}

/// A dedicated thread acting as the UI context.
///
/// Tasks run one at a time, in submission order. A panicking task is logged
/// and does not stop the thread. Clones share the thread; it exits once the
/// last clone is dropped and its queue is drained.
#[derive(Clone)]
pub struct UiThread {
    inner: Arc<UiThreadInner>,
}

struct UiThreadInner {
    sender: Mutex<Option<mpsc::Sender<Task>>>,
    handle: Mutex<Option<JoinHandle<()>>>,
    id: ThreadId,
}

impl UiThread {
    /// Spawn the thread under `name`.
    pub fn spawn(name: impl Into<String>) -> io::Result<Self> {
        let (sender, receiver) = mpsc::channel::<Task>();
        let handle = thread::Builder::new().name(name.into()).spawn(move || {
            for task in receiver {
                if panic::catch_unwind(AssertUnwindSafe(task)).is_err() {
                    error!("UI task panicked");
                }
            }
        })?;
        let id = handle.thread().id();

        Ok(Self {
            inner: Arc::new(UiThreadInner {
                sender: Mutex::new(Some(sender)),
                handle: Mutex::new(Some(handle)),
                id,
            }),
        })
    }

    /// Whether the caller is running on this UI thread.
    pub fn is_current(&self) -> bool {
        thread::current().id() == self.inner.id
    }

    /// The UI thread's id.
    pub fn id(&self) -> ThreadId {
        self.inner.id
    }
}

impl Scheduler for UiThread {
    fn schedule(&self, task: Task) {
        let sender = self
            .inner
            .sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        let delivered = match sender {
            Some(sender) => sender.send(task).is_ok(),
            None => false,
        };
        if !delivered {
            warn!("UI thread has stopped; task dropped");
        }
    }
}

impl std::fmt::Debug for UiThread {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiThread").field("id", &self.inner.id).finish()
    }
}

impl Drop for UiThreadInner {
    fn drop(&mut self) {
        // Closing the channel ends the thread's receive loop.
        self.sender
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        let handle = self
            .handle
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            if thread::current().id() != self.id && handle.join().is_err() {
                error!("UI thread terminated abnormally");
            }
        }
    }
}
