//! The transport sequence state machine.
//!
//! A sequence is created in [`Stage::Committed`] when a press commits and
//! advances through the fixed [`TIMELINE`]. Every step except the first is
//! guarded by the traveler still standing in the origin endpoint; the last
//! step ends in [`Stage::Arrived`] or [`Stage::Aborted`].

use std::sync::Arc;
use std::time::Duration;

use booth_core::clock::Clock;
use booth_core::error::DomainError;
use booth_core::event::EventMetadata;
use booth_core::ids::Traveler;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::endpoint::TransportEndpoint;
use super::events::{
    Abandoned, Aborted, Arrived, ButtonPressed, StageEntered, TransportEvent, TransportEventKind,
};

/// Where a sequence is on its timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// The press committed; nothing has fired yet.
    Committed,
    /// The camera hums.
    Humming,
    /// The traveler breaks down into particles.
    Dissolving,
    /// The traveler is drawn into the camera.
    Suctioned,
    /// The traveler stands in the destination endpoint.
    Arrived,
    /// The transfer was rejected.
    Aborted,
}

impl Stage {
    /// Whether the sequence is over.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Arrived | Self::Aborted)
    }

    fn can_enter(self, to: Self) -> bool {
        match (self, to) {
            (Self::Committed, Self::Humming)
            | (Self::Humming, Self::Dissolving)
            | (Self::Dissolving, Self::Suctioned)
            | (Self::Suctioned, Self::Arrived) => true,
            (from, Self::Aborted) => !from.is_terminal(),
            _ => false,
        }
    }
}

/// What a step does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageAction {
    /// Hum at the origin and clear the traveler's view.
    Hum,
    /// Announce the traveler dissolving.
    Dissolve,
    /// Announce the traveler being drawn in.
    Suction,
    /// Relocate the traveler to the destination endpoint.
    Transfer,
}

/// One row of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Stage the sequence must be in for this step to fire.
    pub from: Stage,
    /// Minimum wait, in stage units, after the previous step.
    pub delay_units: u32,
    /// Whether the traveler must still be in the origin endpoint.
    pub guarded: bool,
    /// What happens on firing.
    pub action: StageAction,
}

impl Step {
    /// The wait before this step for a given unit length.
    #[must_use]
    pub fn delay(&self, unit: Duration) -> Duration {
        unit * self.delay_units
    }
}

/// The fixed stage timeline, in firing order.
pub static TIMELINE: [Step; 4] = [
    Step {
        from: Stage::Committed,
        delay_units: 1,
        guarded: false,
        action: StageAction::Hum,
    },
    Step {
        from: Stage::Humming,
        delay_units: 3,
        guarded: true,
        action: StageAction::Dissolve,
    },
    Step {
        from: Stage::Dissolving,
        delay_units: 2,
        guarded: true,
        action: StageAction::Suction,
    },
    Step {
        from: Stage::Suctioned,
        delay_units: 1,
        guarded: true,
        action: StageAction::Transfer,
    },
];

/// One in-flight transport attempt.
#[derive(Debug)]
pub struct TransportSequence {
    id: Uuid,
    correlation_id: Uuid,
    traveler: Traveler,
    origin: Arc<TransportEndpoint>,
    destination: Arc<TransportEndpoint>,
    destination_label: String,
    stage: Stage,
    abandoned: bool,
    started_at: DateTime<Utc>,
    recorded: i64,
    uncommitted_events: Vec<TransportEvent>,
}

impl TransportSequence {
    /// Starts a sequence in [`Stage::Committed`], producing a
    /// `ButtonPressed` event.
    #[must_use]
    pub fn commit(
        correlation_id: Uuid,
        traveler: Traveler,
        origin: Arc<TransportEndpoint>,
        destination: Arc<TransportEndpoint>,
        destination_label: impl Into<String>,
        clock: &dyn Clock,
    ) -> Self {
        let mut sequence = Self {
            id: Uuid::new_v4(),
            correlation_id,
            traveler,
            origin,
            destination,
            destination_label: destination_label.into(),
            stage: Stage::Committed,
            abandoned: false,
            started_at: clock.now(),
            recorded: 0,
            uncommitted_events: Vec::new(),
        };
        let kind = TransportEventKind::ButtonPressed(ButtonPressed {
            sequence_id: sequence.id,
            traveler_id: sequence.traveler.id,
            destination_label: sequence.destination_label.clone(),
            origin_endpoint: sequence.origin.id(),
            destination_endpoint: sequence.destination.id(),
        });
        sequence.record(kind, clock);
        sequence
    }

    fn record(&mut self, kind: TransportEventKind, clock: &dyn Clock) {
        self.recorded += 1;
        let event = TransportEvent {
            metadata: EventMetadata::stamp(
                kind.event_type(),
                self.id,
                self.recorded,
                self.correlation_id,
                clock,
            ),
            kind,
        };
        self.uncommitted_events.push(event);
    }

    /// The next step to fire, or `None` once the sequence is over.
    #[must_use]
    pub fn pending_step(&self) -> Option<&'static Step> {
        if self.is_finished() {
            return None;
        }
        TIMELINE.iter().find(|step| step.from == self.stage)
    }

    /// Moves to `to`, producing the matching event.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the sequence was abandoned or
    /// `to` is not reachable from the current stage.
    pub fn enter(&mut self, to: Stage, clock: &dyn Clock) -> Result<(), DomainError> {
        if self.abandoned || !self.stage.can_enter(to) {
            return Err(DomainError::Validation(format!(
                "sequence {} cannot move from {:?} to {to:?}",
                self.id, self.stage
            )));
        }

        self.stage = to;
        let kind = match to {
            Stage::Arrived => TransportEventKind::Arrived(Arrived {
                sequence_id: self.id,
                traveler_id: self.traveler.id,
                endpoint_id: self.destination.id(),
            }),
            Stage::Aborted => TransportEventKind::Aborted(Aborted {
                sequence_id: self.id,
                traveler_id: self.traveler.id,
                reason: "transfer rejected".to_owned(),
            }),
            stage => TransportEventKind::StageEntered(StageEntered {
                sequence_id: self.id,
                stage,
            }),
        };
        self.record(kind, clock);
        Ok(())
    }

    /// Ends in [`Stage::Aborted`] with a recorded reason.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the sequence is already over.
    pub fn abort(&mut self, reason: &str, clock: &dyn Clock) -> Result<(), DomainError> {
        self.enter(Stage::Aborted, clock)?;
        if let Some(TransportEvent {
            kind: TransportEventKind::Aborted(payload),
            ..
        }) = self.uncommitted_events.last_mut()
        {
            reason.clone_into(&mut payload.reason);
        }
        Ok(())
    }

    /// Stops the sequence because the traveler left the origin endpoint.
    /// The stage is left where it was.
    pub fn abandon(&mut self, clock: &dyn Clock) {
        if self.is_finished() {
            return;
        }
        self.abandoned = true;
        let kind = TransportEventKind::Abandoned(Abandoned {
            sequence_id: self.id,
            traveler_id: self.traveler.id,
            stage: self.stage,
        });
        self.record(kind, clock);
    }

    /// Whether no further step will fire.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.abandoned || self.stage.is_terminal()
    }

    /// Whether the traveler left mid-sequence.
    #[must_use]
    pub fn is_abandoned(&self) -> bool {
        self.abandoned
    }

    /// Sequence identifier.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Correlation ID of the press.
    #[must_use]
    pub fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    /// Current stage.
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Who is travelling.
    #[must_use]
    pub fn traveler(&self) -> &Traveler {
        &self.traveler
    }

    /// Departure endpoint.
    #[must_use]
    pub fn origin(&self) -> &Arc<TransportEndpoint> {
        &self.origin
    }

    /// Arrival endpoint.
    #[must_use]
    pub fn destination(&self) -> &Arc<TransportEndpoint> {
        &self.destination
    }

    /// Label of the chosen destination.
    #[must_use]
    pub fn destination_label(&self) -> &str {
        &self.destination_label
    }

    /// When the press committed.
    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Events produced since the last drain.
    #[must_use]
    pub fn uncommitted_events(&self) -> &[TransportEvent] {
        &self.uncommitted_events
    }

    /// Clears uncommitted events after they were journaled.
    pub fn clear_uncommitted_events(&mut self) {
        self.uncommitted_events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booth_core::event::DomainEvent;
    use booth_core::ids::{EntityId, LocationRef};
    use booth_test_support::FixedClock;
    use chrono::TimeZone;

    use crate::domain::endpoint::EndpointStore;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()
    }

    fn committed(clock: &FixedClock) -> TransportSequence {
        let store = EndpointStore::new();
        let (origin, _) = store.get_or_create(&LocationRef::new("loc:mall"), clock.0);
        let (destination, _) = store.get_or_create(&LocationRef::new("loc:gotham"), clock.0);
        TransportSequence::commit(
            Uuid::new_v4(),
            Traveler::new(EntityId::new_random(), "Rooky"),
            origin,
            destination,
            "Gotham",
            clock,
        )
    }

    #[test]
    fn test_timeline_runs_hum_dissolve_suction_transfer_over_seven_units() {
        let actions: Vec<StageAction> = TIMELINE.iter().map(|step| step.action).collect();
        assert_eq!(
            actions,
            vec![
                StageAction::Hum,
                StageAction::Dissolve,
                StageAction::Suction,
                StageAction::Transfer
            ]
        );

        let total: u32 = TIMELINE.iter().map(|step| step.delay_units).sum();
        assert_eq!(total, 7);
        assert!(!TIMELINE[0].guarded);
        assert!(TIMELINE[1..].iter().all(|step| step.guarded));
        assert_eq!(TIMELINE[1].delay(Duration::from_millis(500)), Duration::from_millis(1500));
    }

    #[test]
    fn test_commit_produces_button_pressed_event() {
        // Arrange
        let clock = FixedClock(fixed_now());

        // Act
        let sequence = committed(&clock);

        // Assert
        assert_eq!(sequence.stage(), Stage::Committed);
        assert_eq!(sequence.started_at(), fixed_now());
        assert_eq!(sequence.pending_step().unwrap().action, StageAction::Hum);

        let events = sequence.uncommitted_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type(), "transport.button_pressed");
        let meta = events[0].metadata();
        assert_eq!(meta.sequence_id, sequence.id());
        assert_eq!(meta.sequence_number, 1);
        assert_eq!(meta.correlation_id, sequence.correlation_id());
        assert_eq!(meta.occurred_at, fixed_now());
        match &events[0].kind {
            TransportEventKind::ButtonPressed(payload) => {
                assert_eq!(payload.destination_label, "Gotham");
                assert_eq!(payload.destination_endpoint, sequence.destination().id());
            }
            other => panic!("expected ButtonPressed, got {other:?}"),
        }
    }

    #[test]
    fn test_stages_advance_in_table_order_to_arrived() {
        // Arrange
        let clock = FixedClock(fixed_now());
        let mut sequence = committed(&clock);
        sequence.clear_uncommitted_events();

        // Act
        for to in [Stage::Humming, Stage::Dissolving, Stage::Suctioned, Stage::Arrived] {
            sequence.enter(to, &clock).unwrap();
        }

        // Assert
        assert_eq!(sequence.stage(), Stage::Arrived);
        assert!(sequence.is_finished());
        assert!(sequence.pending_step().is_none());

        let types: Vec<&str> = sequence
            .uncommitted_events()
            .iter()
            .map(DomainEvent::event_type)
            .collect();
        assert_eq!(
            types,
            vec![
                "transport.stage_entered",
                "transport.stage_entered",
                "transport.stage_entered",
                "transport.arrived"
            ]
        );
        let numbers: Vec<i64> = sequence
            .uncommitted_events()
            .iter()
            .map(|event| event.metadata().sequence_number)
            .collect();
        assert_eq!(numbers, vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_skipping_a_stage_is_rejected() {
        let clock = FixedClock(fixed_now());
        let mut sequence = committed(&clock);

        let result = sequence.enter(Stage::Dissolving, &clock);

        match result {
            Err(DomainError::Validation(msg)) => {
                assert!(msg.ends_with("cannot move from Committed to Dissolving"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
        assert_eq!(sequence.stage(), Stage::Committed);
    }

    #[test]
    fn test_abort_is_reachable_from_any_live_stage_but_not_after_arrival() {
        let clock = FixedClock(fixed_now());

        let mut early = committed(&clock);
        early.abort("transfer rejected: full", &clock).unwrap();
        assert_eq!(early.stage(), Stage::Aborted);
        match &early.uncommitted_events().last().unwrap().kind {
            TransportEventKind::Aborted(payload) => {
                assert_eq!(payload.reason, "transfer rejected: full");
            }
            other => panic!("expected Aborted, got {other:?}"),
        }

        let mut done = committed(&clock);
        for to in [Stage::Humming, Stage::Dissolving, Stage::Suctioned, Stage::Arrived] {
            done.enter(to, &clock).unwrap();
        }
        assert!(done.abort("late", &clock).is_err());
        assert_eq!(done.stage(), Stage::Arrived);
    }

    #[test]
    fn test_abandon_stops_the_timeline_and_keeps_the_stage() {
        // Arrange
        let clock = FixedClock(fixed_now());
        let mut sequence = committed(&clock);
        sequence.enter(Stage::Humming, &clock).unwrap();
        sequence.clear_uncommitted_events();

        // Act
        sequence.abandon(&clock);
        sequence.abandon(&clock);

        // Assert
        assert!(sequence.is_abandoned());
        assert_eq!(sequence.stage(), Stage::Humming);
        assert!(sequence.pending_step().is_none());
        assert!(sequence.enter(Stage::Dissolving, &clock).is_err());

        let events = sequence.uncommitted_events();
        assert_eq!(events.len(), 1);
        match &events[0].kind {
            TransportEventKind::Abandoned(payload) => assert_eq!(payload.stage, Stage::Humming),
            other => panic!("expected Abandoned, got {other:?}"),
        }
    }
}
