//! Journaled event abstractions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock::Clock;

/// Envelope fields shared by every transport event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Unique event identifier.
    pub event_id: Uuid,
    /// Type name, e.g. `transport.arrived`.
    pub event_type: String,
    /// The transport sequence this event belongs to.
    pub sequence_id: Uuid,
    /// 1-based position within the sequence's events.
    pub sequence_number: i64,
    /// Correlation ID of the press that started the sequence.
    pub correlation_id: Uuid,
    /// When the event was recorded.
    pub occurred_at: DateTime<Utc>,
}

impl EventMetadata {
    /// Stamps a new event of `event_type` for the given sequence, taking
    /// the time from `clock`.
    #[must_use]
    pub fn stamp(
        event_type: &str,
        sequence_id: Uuid,
        sequence_number: i64,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            event_type: event_type.to_owned(),
            sequence_id,
            sequence_number,
            correlation_id,
            occurred_at: clock.now(),
        }
    }
}

/// An event that can be appended to the journal.
pub trait DomainEvent: Send + Sync + std::fmt::Debug {
    /// Type name used when the event is stored.
    fn event_type(&self) -> &'static str;

    /// JSON form of the event body.
    fn to_payload(&self) -> serde_json::Value;

    /// The envelope.
    fn metadata(&self) -> &EventMetadata;
}
