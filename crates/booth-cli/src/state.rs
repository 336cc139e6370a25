//! Wiring of the transport context to the in-process adapters.

use std::io::Write;
use std::sync::Arc;

use booth_core::announce::Announcer;
use booth_core::clock::SystemClock;
use booth_core::ids::{EntityId, Locator, Traveler};
use booth_core::placement::{LocationActivator, Placement};
use booth_core::scheduler::DelayScheduler;
use booth_transport::application::coordinator::TransportCoordinator;
use booth_transport::application::sequencer::TransportServices;
use booth_transport::domain::endpoint::EndpointStore;
use booth_world::announcer::ConsoleAnnouncer;
use booth_world::journal::TracingJournal;
use booth_world::world::InMemoryWorld;

use crate::config::AppConfig;
use crate::error::AppError;

/// Name the console player is announced under.
pub const PLAYER_NAME: &str = "Traveler";

/// Application state shared by every dispatched command.
pub struct AppState {
    /// The world the player moves through.
    pub world: Arc<InMemoryWorld>,
    /// Output to the player.
    pub announcer: Arc<dyn Announcer>,
    /// The transport entry point.
    pub coordinator: TransportCoordinator,
    /// The console player.
    pub player: Traveler,
    /// Location of the booth the player started in.
    pub start: Locator,
}

impl AppState {
    /// Builds the registry and adapters, provisions the starting booth and
    /// places the player inside it. Player-visible text goes to `out`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Domain` if the destination list is inconsistent
    /// or the starting booth's location cannot be activated, and
    /// `AppError::Config` if there is no booth to start in.
    pub async fn build(
        config: &AppConfig,
        out: Box<dyn Write + Send>,
        scheduler: Arc<dyn DelayScheduler>,
    ) -> Result<Self, AppError> {
        let registry = config.transport.build_registry()?;
        let start = config.start_locator(&registry)?;
        let world = Arc::new(InMemoryWorld::new(config.offline.iter().cloned()));
        let player = Traveler::new(EntityId::new_random(), PLAYER_NAME);
        let announcer: Arc<dyn Announcer> =
            Arc::new(ConsoleAnnouncer::new(player.id, Arc::clone(&world), out));

        let services = TransportServices {
            placement: Arc::clone(&world) as Arc<dyn Placement>,
            activator: Arc::clone(&world) as Arc<dyn LocationActivator>,
            announcer: Arc::clone(&announcer),
            scheduler,
            journal: Arc::new(TracingJournal),
            clock: Arc::new(SystemClock),
        };
        let coordinator = TransportCoordinator::new(
            Arc::new(registry),
            Arc::new(EndpointStore::new()),
            services,
            config.transport.stage_unit(),
        );

        let booth = coordinator.ensure_endpoint(&start).await?;
        world.place(player.id, booth.position());

        Ok(Self {
            world,
            announcer,
            coordinator,
            player,
            start,
        })
    }
}
