//! Reference executors for asynchronous processing.

use futures::{
    executor::{ThreadPool, block_on},
    future::BoxFuture,
};
use std::{io, thread};
use tracing::error;
use wayfinder_core::Executor;

/// Drives each future on its own short-lived thread.
///
/// The default when no executor is configured. Fine for occasional
/// processing; use a pool or an async runtime for anything busier.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadExecutor;

impl Executor for ThreadExecutor {
    fn spawn(&self, future: BoxFuture<'static, ()>) {
        let spawned = thread::Builder::new()
            .name("wayfinder-process".into())
            .spawn(move || block_on(future));
        if let Err(error) = spawned {
            error!(%error, "failed to spawn processing thread");
        }
    }
}

/// Runs futures on a `futures` thread pool.
#[derive(Debug, Clone)]
pub struct ThreadPoolExecutor {
    pool: ThreadPool,
}

impl ThreadPoolExecutor {
    /// Create a pool with default settings.
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            pool: ThreadPool::new()?,
        })
    }

    /// Use an existing pool.
    pub fn from_pool(pool: ThreadPool) -> Self {
        Self { pool }
    }
}

impl Executor for ThreadPoolExecutor {
    fn spawn(&self, future: BoxFuture<'static, ()>) {
        self.pool.spawn_ok(future);
    }
}

/// Runs futures on a Tokio runtime.
#[cfg(feature = "tokio")]
#[derive(Debug, Clone)]
pub struct TokioExecutor {
    handle: tokio::runtime::Handle,
}

#[cfg(feature = "tokio")]
impl TokioExecutor {
    /// Spawn onto the given runtime.
    pub fn new(handle: tokio::runtime::Handle) -> Self {
        Self { handle }
    }

    /// Spawn onto the runtime of the calling task.
    ///
    /// # Panics
    ///
    /// Outside a Tokio runtime.
    pub fn current() -> Self {
        Self::new(tokio::runtime::Handle::current())
    }
}

#[cfg(feature = "tokio")]
impl Executor for TokioExecutor {
    fn spawn(&self, future: BoxFuture<'static, ()>) {
        drop(self.handle.spawn(future));
    }
}
