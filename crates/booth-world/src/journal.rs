//! Journal that writes transport events to the tracing subscriber.

use async_trait::async_trait;
use booth_core::error::JournalError;
use booth_core::journal::{EventJournal, JournalEntry};
use tracing::info;

/// Emits each journal entry as a structured `info` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingJournal;

#[async_trait]
impl EventJournal for TracingJournal {
    async fn append(&self, entries: &[JournalEntry]) -> Result<(), JournalError> {
        for entry in entries {
            let payload = serde_json::to_string(&entry.payload)
                .map_err(|err| JournalError(err.to_string()))?;
            info!(
                event_id = %entry.event_id,
                sequence_id = %entry.sequence_id,
                sequence_number = entry.sequence_number,
                correlation_id = %entry.correlation_id,
                occurred_at = %entry.occurred_at,
                event_type = %entry.event_type,
                payload = %payload,
                "transport event"
            );
        }
        Ok(())
    }
}
