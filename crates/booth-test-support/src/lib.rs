//! Shared test fakes and utilities for the transporter booth.

mod announcer;
mod clock;
mod journal;
mod scheduler;
mod world;

pub use announcer::RecordingAnnouncer;
pub use clock::FixedClock;
pub use journal::{FailingJournal, RecordingJournal};
pub use scheduler::ManualScheduler;
pub use world::FakeWorld;
