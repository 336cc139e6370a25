//! Delay scheduler port.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// A unit of deferred work.
pub type ScheduledTask = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Runs tasks once, no sooner than a given delay after scheduling.
///
/// There is no cancellation; a task that no longer applies is expected to
/// notice that itself when it runs.
pub trait DelayScheduler: Send + Sync {
    /// Schedule `task` to run after `delay`.
    fn after(&self, delay: Duration, task: ScheduledTask);
}
