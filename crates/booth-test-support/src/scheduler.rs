//! Test scheduler: a virtual-time `DelayScheduler`.
//!
//! Nothing runs until the test calls [`ManualScheduler::advance`]. Tasks fire
//! in due-time order (ties in scheduling order), and a task scheduled while
//! another runs is due relative to the virtual time at which it was
//! scheduled, so whole chains of delays play out inside one `advance`.

use std::sync::Mutex;
use std::time::Duration;

use booth_core::scheduler::{DelayScheduler, ScheduledTask};

struct Pending {
    due: Duration,
    order: u64,
    task: ScheduledTask,
}

#[derive(Default)]
struct State {
    now: Duration,
    next_order: u64,
    pending: Vec<Pending>,
}

/// A scheduler driven by explicit virtual time.
#[derive(Default)]
pub struct ManualScheduler {
    state: Mutex<State>,
}

impl ManualScheduler {
    /// Create a scheduler at virtual time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves virtual time forward by `by`, running every task that falls due.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub async fn advance(&self, by: Duration) {
        let target = self.state.lock().unwrap().now + by;
        while let Some(task) = self.pop_due(target) {
            task.await;
        }
        let mut state = self.state.lock().unwrap();
        state.now = state.now.max(target);
    }

    fn pop_due(&self, target: Duration) -> Option<ScheduledTask> {
        let mut state = self.state.lock().unwrap();
        let index = state
            .pending
            .iter()
            .enumerate()
            .filter(|(_, pending)| pending.due <= target)
            .min_by_key(|(_, pending)| (pending.due, pending.order))
            .map(|(index, _)| index)?;
        let pending = state.pending.swap_remove(index);
        state.now = state.now.max(pending.due);
        Some(pending.task)
    }

    /// Number of tasks waiting to run.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn pending(&self) -> usize {
        self.state.lock().unwrap().pending.len()
    }

    /// Current virtual time.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn now(&self) -> Duration {
        self.state.lock().unwrap().now
    }
}

impl DelayScheduler for ManualScheduler {
    fn after(&self, delay: Duration, task: ScheduledTask) {
        let mut state = self.state.lock().unwrap();
        let due = state.now + delay;
        let order = state.next_order;
        state.next_order += 1;
        state.pending.push(Pending { due, order, task });
    }
}
