//! Event journal abstraction.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::JournalError;
use crate::event::DomainEvent;

/// Stored representation of a domain event.
#[derive(Debug, Clone)]
pub struct JournalEntry {
    /// Unique event identifier.
    pub event_id: Uuid,
    /// Sequence this event belongs to.
    pub sequence_id: Uuid,
    /// Event type name for deserialization routing.
    pub event_type: String,
    /// Serialized event payload.
    pub payload: serde_json::Value,
    /// Number within the sequence.
    pub sequence_number: i64,
    /// Correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Timestamp of event creation.
    pub occurred_at: chrono::DateTime<chrono::Utc>,
}

impl JournalEntry {
    /// Builds the stored form of a domain event.
    pub fn from_event(event: &dyn DomainEvent) -> Self {
        let meta = event.metadata();
        Self {
            event_id: meta.event_id,
            sequence_id: meta.sequence_id,
            event_type: event.event_type().to_owned(),
            payload: event.to_payload(),
            sequence_number: meta.sequence_number,
            correlation_id: meta.correlation_id,
            occurred_at: meta.occurred_at,
        }
    }
}

/// Append-only sink for transport events.
#[async_trait]
pub trait EventJournal: Send + Sync {
    /// Append entries in order.
    async fn append(&self, entries: &[JournalEntry]) -> Result<(), JournalError>;
}
