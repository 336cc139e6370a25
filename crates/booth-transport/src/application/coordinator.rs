//! Entry point for `press <selector>` inside a booth.

use std::sync::Arc;
use std::time::Duration;

use booth_core::announce::Audience;
use booth_core::command::Command;
use booth_core::error::DomainError;
use booth_core::ids::{EndpointId, Locator, Traveler};
use serde::Serialize;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::application::provisioner::RemoteEndpointProvisioner;
use crate::application::sequencer::{TransportSequencer, TransportServices};
use crate::domain::commands::PressButton;
use crate::domain::destination::{Destination, DestinationRegistry};
use crate::domain::endpoint::{EndpointStore, TransportEndpoint};
use crate::domain::narration;
use crate::domain::selector;
use crate::domain::sequence::TransportSequence;

/// What a committed press started.
#[derive(Debug, Clone, Serialize)]
pub struct PressAccepted {
    /// The sequence now running.
    pub sequence_id: Uuid,
    /// The resolved destination.
    pub destination: Destination,
    /// The endpoint the traveler is headed for.
    pub destination_endpoint: EndpointId,
}

/// Wires selector resolution, provisioning and sequencing together.
pub struct TransportCoordinator {
    registry: Arc<DestinationRegistry>,
    provisioner: RemoteEndpointProvisioner,
    sequencer: Arc<TransportSequencer>,
    services: TransportServices,
}

impl TransportCoordinator {
    /// Creates a coordinator over an already-built registry and endpoint
    /// store. Stage delays are multiples of `stage_unit`.
    #[must_use]
    pub fn new(
        registry: Arc<DestinationRegistry>,
        store: Arc<EndpointStore>,
        services: TransportServices,
        stage_unit: Duration,
    ) -> Self {
        let provisioner = RemoteEndpointProvisioner::new(
            Arc::clone(&services.activator),
            store,
            Arc::clone(&services.clock),
        );
        let sequencer = Arc::new(TransportSequencer::new(services.clone(), stage_unit));
        Self {
            registry,
            provisioner,
            sequencer,
            services,
        }
    }

    /// Handles a button press by `command.traveler`.
    ///
    /// On success the transport sequence has been handed to the scheduler
    /// and this returns without waiting for it. On failure the traveler has
    /// been told why and nothing was started.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotInsideEndpoint` if the traveler is not in a
    /// booth, `DomainError::NoSelector` or `DomainError::UnknownDestination`
    /// if the selector does not resolve, and `DomainError::ProvisionFailure`
    /// if the destination is unreachable.
    #[instrument(
        skip(self, command),
        fields(
            command_type = command.command_type(),
            traveler_id = %command.issuer(),
            correlation_id = %command.correlation_id()
        )
    )]
    pub async fn press(&self, command: &PressButton) -> Result<PressAccepted, DomainError> {
        let result = self.commit(command).await;
        if let Err(err) = &result {
            debug!(error = %err, selector = %command.selector, "press rejected");
            self.services
                .announcer
                .announce(&Audience::Entity(command.traveler.id), err.user_message());
        }
        result
    }

    async fn commit(&self, command: &PressButton) -> Result<PressAccepted, DomainError> {
        let origin = self.origin_of(&command.traveler).await?;
        let destination = selector::resolve(&self.registry, &command.selector)?.clone();
        let endpoint = self
            .provisioner
            .ensure_endpoint(destination.locator())
            .await?;

        let announcer = &self.services.announcer;
        announcer.announce(
            &Audience::Entity(command.traveler.id),
            &narration::press_self(destination.label()),
        );
        announcer.announce(
            &Audience::onlookers_at(origin.position(), command.traveler.id),
            &narration::press_onlookers(&command.traveler.name, destination.label()),
        );

        let sequence = TransportSequence::commit(
            command.correlation_id,
            command.traveler.clone(),
            origin,
            Arc::clone(&endpoint),
            destination.label(),
            self.services.clock.as_ref(),
        );
        let sequence_id = sequence.id();
        self.sequencer.start(sequence).await;

        Ok(PressAccepted {
            sequence_id,
            destination,
            destination_endpoint: endpoint.id(),
        })
    }

    async fn origin_of(&self, traveler: &Traveler) -> Result<Arc<TransportEndpoint>, DomainError> {
        self.services
            .placement
            .current_position(traveler.id)
            .await
            .and_then(|position| self.provisioner.store().containing(&position))
            .ok_or(DomainError::NotInsideEndpoint(traveler.id))
    }

    /// Provisions the endpoint at `locator`, e.g. to stand up the booth a
    /// traveler starts in.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ProvisionFailure` if the location is unreachable.
    pub async fn ensure_endpoint(
        &self,
        locator: &Locator,
    ) -> Result<Arc<TransportEndpoint>, DomainError> {
        self.provisioner.ensure_endpoint(locator).await
    }

    /// The destination directory.
    #[must_use]
    pub fn registry(&self) -> &DestinationRegistry {
        &self.registry
    }

    /// The endpoint store.
    #[must_use]
    pub fn endpoints(&self) -> &Arc<EndpointStore> {
        self.provisioner.store()
    }
}
