//! Test clock: a `Clock` that never moves.

use booth_core::clock::Clock;
use chrono::{DateTime, TimeZone, Utc};

/// A clock stopped at one instant, so event timestamps are predictable.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Stopped at 2026-01-15 10:00:00 UTC.
    ///
    /// # Panics
    ///
    /// Panics only if the hard-coded date were invalid.
    #[must_use]
    pub fn morning() -> Self {
        Self(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
