//! Domain events for the transport context.

use booth_core::event::{DomainEvent, EventMetadata};
use booth_core::ids::{EndpointId, EntityId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::sequence::Stage;

/// Emitted when a press commits to a destination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ButtonPressed {
    /// The sequence started by the press.
    pub sequence_id: Uuid,
    /// Who is travelling.
    pub traveler_id: EntityId,
    /// Label of the chosen destination.
    pub destination_label: String,
    /// Endpoint the traveler departs from.
    pub origin_endpoint: EndpointId,
    /// Endpoint the traveler is headed for.
    pub destination_endpoint: EndpointId,
}

/// Emitted when an intermediate stage fires.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageEntered {
    /// The sequence identifier.
    pub sequence_id: Uuid,
    /// The stage entered.
    pub stage: Stage,
}

/// Emitted when the traveler lands in the destination endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arrived {
    /// The sequence identifier.
    pub sequence_id: Uuid,
    /// Who arrived.
    pub traveler_id: EntityId,
    /// Where they arrived.
    pub endpoint_id: EndpointId,
}

/// Emitted when the final transfer is rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aborted {
    /// The sequence identifier.
    pub sequence_id: Uuid,
    /// Who was thrown back.
    pub traveler_id: EntityId,
    /// Why the transfer failed.
    pub reason: String,
}

/// Emitted when the traveler left the origin endpoint mid-sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Abandoned {
    /// The sequence identifier.
    pub sequence_id: Uuid,
    /// Who left.
    pub traveler_id: EntityId,
    /// The last stage that fired.
    pub stage: Stage,
}

/// Event payload variants for the transport context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TransportEventKind {
    /// A press committed to a destination.
    ButtonPressed(ButtonPressed),
    /// An intermediate stage fired.
    StageEntered(StageEntered),
    /// The traveler arrived.
    Arrived(Arrived),
    /// The transfer was rejected.
    Aborted(Aborted),
    /// The guard failed and the sequence stopped.
    Abandoned(Abandoned),
}

/// Domain event envelope for the transport context.
#[derive(Debug, Clone)]
pub struct TransportEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: TransportEventKind,
}

impl TransportEventKind {
    /// Event type name for this payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::ButtonPressed(_) => "transport.button_pressed",
            Self::StageEntered(_) => "transport.stage_entered",
            Self::Arrived(_) => "transport.arrived",
            Self::Aborted(_) => "transport.aborted",
            Self::Abandoned(_) => "transport.abandoned",
        }
    }
}

impl DomainEvent for TransportEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("TransportEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booth_core::clock::SystemClock;

    fn event(kind: TransportEventKind) -> TransportEvent {
        TransportEvent {
            metadata: EventMetadata::stamp(
                kind.event_type(),
                Uuid::new_v4(),
                1,
                Uuid::new_v4(),
                &SystemClock,
            ),
            kind,
        }
    }

    #[test]
    fn test_payload_is_tagged_with_the_variant_name() {
        // Arrange
        let sequence_id = Uuid::new_v4();
        let abandoned = event(TransportEventKind::Abandoned(Abandoned {
            sequence_id,
            traveler_id: EntityId(Uuid::nil()),
            stage: Stage::Dissolving,
        }));

        // Act
        let payload = abandoned.to_payload();

        // Assert
        assert_eq!(abandoned.event_type(), "transport.abandoned");
        assert_eq!(payload["Abandoned"]["stage"], "dissolving");
        assert_eq!(
            payload["Abandoned"]["sequence_id"],
            serde_json::json!(sequence_id)
        );
    }

    #[test]
    fn test_stage_entered_records_the_stage() {
        let entered = event(TransportEventKind::StageEntered(StageEntered {
            sequence_id: Uuid::new_v4(),
            stage: Stage::Suctioned,
        }));

        assert_eq!(entered.event_type(), "transport.stage_entered");
        assert_eq!(entered.to_payload()["StageEntered"]["stage"], "suctioned");
    }
}
