//! Tokio-backed delay scheduler.

use std::time::Duration;

use booth_core::scheduler::{DelayScheduler, ScheduledTask};
use tokio::runtime::Handle;

/// Runs each task on a tokio runtime after sleeping for its delay.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    /// Creates a scheduler spawning onto `handle`.
    #[must_use]
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Creates a scheduler on the runtime the caller is running in.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    #[must_use]
    pub fn current() -> Self {
        Self::new(Handle::current())
    }
}

impl DelayScheduler for TokioScheduler {
    fn after(&self, delay: Duration, task: ScheduledTask) {
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        });
    }
}
