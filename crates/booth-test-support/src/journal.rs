//! Test journals: mock `EventJournal` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use booth_core::error::JournalError;
use booth_core::journal::{EventJournal, JournalEntry};

/// A journal that keeps every appended entry in memory.
#[derive(Debug, Default)]
pub struct RecordingJournal {
    entries: Mutex<Vec<JournalEntry>>,
}

impl RecordingJournal {
    /// Create an empty recording journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all appended entries, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn entries(&self) -> Vec<JournalEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventJournal for RecordingJournal {
    async fn append(&self, entries: &[JournalEntry]) -> Result<(), JournalError> {
        self.entries.lock().unwrap().extend_from_slice(entries);
        Ok(())
    }
}

/// A journal that rejects every append. Useful for testing that journal
/// outages do not affect transports.
#[derive(Debug)]
pub struct FailingJournal;

#[async_trait]
impl EventJournal for FailingJournal {
    async fn append(&self, _entries: &[JournalEntry]) -> Result<(), JournalError> {
        Err(JournalError("connection refused".into()))
    }
}
