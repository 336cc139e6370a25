//! Wall-clock port used to timestamp journal events and endpoints.

use chrono::{DateTime, Utc};

/// Source of "now" for event metadata. Stage timing does not read it;
/// delays belong to the [`DelayScheduler`](crate::scheduler::DelayScheduler).
pub trait Clock: Send + Sync {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the host's UTC clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_moves_forward() {
        let first = SystemClock.now();
        let second = SystemClock.now();

        assert!(second >= first);
    }
}
