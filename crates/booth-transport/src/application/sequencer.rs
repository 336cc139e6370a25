//! Drives committed sequences along the stage timeline.
//!
//! Each step is scheduled on the delay scheduler as its own task. When a
//! task fires it re-checks the guard, performs the step's action, records
//! the transition and, if the sequence is still live, schedules the next
//! step. The sequence value moves from task to task and is dropped when it
//! finishes, so nothing else can observe or mutate it.

use std::sync::Arc;
use std::time::Duration;

use booth_core::announce::{Announcer, Audience};
use booth_core::clock::Clock;
use booth_core::error::DomainError;
use booth_core::journal::{EventJournal, JournalEntry};
use booth_core::placement::{LocationActivator, Placement};
use booth_core::scheduler::DelayScheduler;
use tracing::{debug, info, warn};

use crate::domain::narration;
use crate::domain::sequence::{Stage, StageAction, Step, TransportSequence};

/// Default length of one stage unit.
pub const DEFAULT_STAGE_UNIT: Duration = Duration::from_secs(1);

/// Collaborators the sequencer and coordinator call out to.
#[derive(Clone)]
pub struct TransportServices {
    /// Entity positions and relocation.
    pub placement: Arc<dyn Placement>,
    /// Location loading for provisioning.
    pub activator: Arc<dyn LocationActivator>,
    /// Player-facing text.
    pub announcer: Arc<dyn Announcer>,
    /// Delayed task execution.
    pub scheduler: Arc<dyn DelayScheduler>,
    /// Event sink.
    pub journal: Arc<dyn EventJournal>,
    /// Time source for events.
    pub clock: Arc<dyn Clock>,
}

/// Runs transport sequences on the delay scheduler.
pub struct TransportSequencer {
    services: TransportServices,
    unit: Duration,
}

impl TransportSequencer {
    /// Creates a sequencer whose delays are multiples of `unit`.
    #[must_use]
    pub fn new(services: TransportServices, unit: Duration) -> Self {
        Self { services, unit }
    }

    /// Journals the sequence's pending events and schedules its first step.
    pub async fn start(self: &Arc<Self>, mut sequence: TransportSequence) {
        self.flush(&mut sequence).await;
        info!(
            sequence_id = %sequence.id(),
            traveler_id = %sequence.traveler().id,
            destination = sequence.destination_label(),
            "transport sequence committed"
        );
        self.schedule_next(sequence);
    }

    fn schedule_next(self: &Arc<Self>, sequence: TransportSequence) {
        let Some(step) = sequence.pending_step() else {
            return;
        };
        let this = Arc::clone(self);
        self.services.scheduler.after(
            step.delay(self.unit),
            Box::pin(async move {
                if let Some(next) = this.fire(sequence).await {
                    this.schedule_next(next);
                }
            }),
        );
    }

    /// Fires the pending step. Returns the sequence if it is still live.
    async fn fire(&self, mut sequence: TransportSequence) -> Option<TransportSequence> {
        let step: &Step = sequence.pending_step()?;

        if step.guarded && !self.traveler_in_origin(&sequence).await {
            debug!(
                sequence_id = %sequence.id(),
                stage = ?sequence.stage(),
                "traveler left the origin endpoint; sequence abandoned"
            );
            sequence.abandon(self.services.clock.as_ref());
            self.flush(&mut sequence).await;
            return None;
        }

        let outcome = match step.action {
            StageAction::Hum => {
                self.hum(&sequence);
                sequence.enter(Stage::Humming, self.services.clock.as_ref())
            }
            StageAction::Dissolve => {
                self.dissolve(&sequence);
                sequence.enter(Stage::Dissolving, self.services.clock.as_ref())
            }
            StageAction::Suction => {
                self.suction(&sequence);
                sequence.enter(Stage::Suctioned, self.services.clock.as_ref())
            }
            StageAction::Transfer => self.transfer(&mut sequence).await,
        };

        if let Err(err) = outcome {
            warn!(sequence_id = %sequence.id(), error = %err, "sequence transition rejected");
            return None;
        }
        debug!(sequence_id = %sequence.id(), stage = ?sequence.stage(), "stage fired");

        self.flush(&mut sequence).await;
        if sequence.is_finished() {
            None
        } else {
            Some(sequence)
        }
    }

    async fn traveler_in_origin(&self, sequence: &TransportSequence) -> bool {
        let position = self
            .services
            .placement
            .current_position(sequence.traveler().id)
            .await;
        position == Some(sequence.origin().position())
    }

    fn hum(&self, sequence: &TransportSequence) {
        let announcer = &self.services.announcer;
        announcer.announce(
            &Audience::everyone_at(sequence.origin().position()),
            narration::HUM,
        );
        announcer.announce(
            &Audience::Entity(sequence.traveler().id),
            narration::CLEAR_VIEW,
        );
    }

    fn dissolve(&self, sequence: &TransportSequence) {
        let traveler = sequence.traveler();
        let announcer = &self.services.announcer;
        announcer.announce(
            &Audience::onlookers_at(sequence.origin().position(), traveler.id),
            &narration::dissolve_onlookers(&traveler.name),
        );
        announcer.announce(&Audience::Entity(traveler.id), narration::DISSOLVE_SELF);
    }

    fn suction(&self, sequence: &TransportSequence) {
        let traveler = sequence.traveler();
        let announcer = &self.services.announcer;
        announcer.announce(&Audience::Entity(traveler.id), narration::SUCTION_SELF);
        announcer.announce(
            &Audience::onlookers_at(sequence.origin().position(), traveler.id),
            &narration::suction_onlookers(&traveler.name),
        );
    }

    async fn transfer(&self, sequence: &mut TransportSequence) -> Result<(), DomainError> {
        let traveler = sequence.traveler().clone();
        let destination = sequence.destination().position();
        let announcer = &self.services.announcer;
        let clock = self.services.clock.as_ref();

        // Already standing in the destination booth: nothing to move.
        if sequence.destination().id() == sequence.origin().id() {
            announcer.announce(&Audience::Entity(traveler.id), narration::ARRIVE_SAME_SELF);
            announcer.announce(
                &Audience::onlookers_at(destination, traveler.id),
                &narration::arrive_onlookers(&traveler.name),
            );
            sequence.enter(Stage::Arrived, clock)?;
            info!(
                sequence_id = %sequence.id(),
                traveler_id = %traveler.id,
                destination = sequence.destination_label(),
                "traveler rematerialized in the origin booth"
            );
            return Ok(());
        }

        let relocated = self
            .services
            .placement
            .relocate(traveler.id, destination.clone())
            .await
            .map_err(|rejected| DomainError::RelocationFailure(rejected.0));

        match relocated {
            Ok(()) => {
                announcer.announce(&Audience::Entity(traveler.id), narration::ARRIVE_SELF);
                announcer.announce(
                    &Audience::onlookers_at(destination, traveler.id),
                    &narration::arrive_onlookers(&traveler.name),
                );
                sequence.enter(Stage::Arrived, clock)?;
                info!(
                    sequence_id = %sequence.id(),
                    traveler_id = %traveler.id,
                    destination = sequence.destination_label(),
                    "traveler arrived"
                );
            }
            Err(err) => {
                // The traveler never left, so the origin endpoint is where
                // the failure is witnessed.
                announcer.announce(&Audience::Entity(traveler.id), err.user_message());
                announcer.announce(
                    &Audience::onlookers_at(sequence.origin().position(), traveler.id),
                    &narration::thrown_back_onlookers(&traveler.name),
                );
                announcer.announce(
                    &Audience::onlookers_at(destination, traveler.id),
                    narration::FIZZLE_AT_DESTINATION,
                );
                sequence.abort(&err.to_string(), clock)?;
                info!(
                    sequence_id = %sequence.id(),
                    traveler_id = %traveler.id,
                    error = %err,
                    "transfer rejected; traveler thrown back"
                );
            }
        }
        Ok(())
    }

    async fn flush(&self, sequence: &mut TransportSequence) {
        let entries: Vec<JournalEntry> = sequence
            .uncommitted_events()
            .iter()
            .map(|event| JournalEntry::from_event(event))
            .collect();
        sequence.clear_uncommitted_events();
        if entries.is_empty() {
            return;
        }
        if let Err(err) = self.services.journal.append(&entries).await {
            warn!(sequence_id = %sequence.id(), error = %err, "failed to journal transport events");
        }
    }
}
