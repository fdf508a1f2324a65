//! Execution-context capabilities.
//!
//! The engine never picks a thread. Presentation goes through a
//! [`Scheduler`] (the UI context); asynchronous processing goes through an
//! [`Executor`].

use futures::future::BoxFuture;

/// A unit of work handed to a [`Scheduler`].
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Runs tasks on the designated UI execution context.
///
/// Implementations may run the task inline or queue it; the engine treats
/// `schedule` as fire-and-forget either way.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a Scheduler",
    label = "missing `Scheduler` implementation",
    note = "Implement `Scheduler` or pass a closure `Fn(Task)`."
)]
pub trait Scheduler: Send + Sync + 'static {
    /// Run `task` on the UI context, now or later.
    fn schedule(&self, task: Task);
}

impl<F> Scheduler for F
where
    F: Fn(Task) + Send + Sync + 'static,
{
    fn schedule(&self, task: Task) {
        self(task)
    }
}

/// Drives the futures of `ProcessThenRedirect` actions to completion.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an Executor",
    label = "missing `Executor` implementation",
    note = "Implement `Executor` to let the navigator spawn asynchronous processing."
)]
pub trait Executor: Send + Sync + 'static {
    /// Spawn a detached future.
    fn spawn(&self, future: BoxFuture<'static, ()>);
}
