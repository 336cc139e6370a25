//! Shared harness for transport integration tests.
#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use booth_core::announce::Announcer;
use booth_core::ids::{EntityId, Locator, Position, Traveler};
use booth_core::journal::EventJournal;
use booth_core::placement::{LocationActivator, Placement};
use booth_core::scheduler::DelayScheduler;
use booth_test_support::{
    FakeWorld, FixedClock, ManualScheduler, RecordingAnnouncer, RecordingJournal,
};
use booth_transport::application::coordinator::TransportCoordinator;
use booth_transport::application::sequencer::TransportServices;
use booth_transport::domain::commands::PressButton;
use booth_transport::domain::destination::{DestinationEntry, DestinationRegistry};
use booth_transport::domain::endpoint::{EndpointStore, TransportEndpoint};
use uuid::Uuid;

/// One stage unit in every integration test.
pub const UNIT: Duration = Duration::from_secs(1);

/// Locator of the booth every test traveler starts in.
pub const MALL: &str = "loc:mall";

/// A coordinator wired to in-memory fakes, with one traveler standing in
/// the mall booth.
pub struct Booth {
    pub world: Arc<FakeWorld>,
    pub announcer: Arc<RecordingAnnouncer>,
    pub scheduler: Arc<ManualScheduler>,
    pub journal: Arc<RecordingJournal>,
    pub coordinator: TransportCoordinator,
    pub origin: Arc<TransportEndpoint>,
    pub traveler: Traveler,
}

impl Booth {
    /// The origin booth's interior.
    pub fn origin_position(&self) -> Position {
        self.origin.position()
    }

    /// Presses a button as the test traveler.
    pub fn press_command(&self, selector: &str) -> PressButton {
        PressButton {
            correlation_id: Uuid::new_v4(),
            traveler: self.traveler.clone(),
            selector: selector.to_owned(),
        }
    }
}

fn destinations() -> Vec<DestinationEntry> {
    vec![
        DestinationEntry::new("Marvel", 1, "loc:marvel"),
        DestinationEntry::new("Hanna Barbera", 2, "loc:hb"),
        DestinationEntry::new("Present", 3, "loc:present"),
        DestinationEntry::new("Sesame", 4, "loc:sesame"),
        DestinationEntry::new("Gotham", 5, "loc:gotham"),
    ]
}

/// Builds the booth with `offline` locators unreachable from the start.
pub async fn booth_with_offline(offline: &[&str]) -> Booth {
    let world = Arc::new(FakeWorld::new());
    for locator in offline {
        world.set_offline(&Locator::new(*locator), true);
    }
    let announcer = Arc::new(RecordingAnnouncer::new());
    let scheduler = Arc::new(ManualScheduler::new());
    let journal = Arc::new(RecordingJournal::new());
    let clock = FixedClock::morning();
    let services = TransportServices {
        placement: Arc::clone(&world) as Arc<dyn Placement>,
        activator: Arc::clone(&world) as Arc<dyn LocationActivator>,
        announcer: Arc::clone(&announcer) as Arc<dyn Announcer>,
        scheduler: Arc::clone(&scheduler) as Arc<dyn DelayScheduler>,
        journal: Arc::clone(&journal) as Arc<dyn EventJournal>,
        clock: Arc::new(clock),
    };
    let coordinator = TransportCoordinator::new(
        Arc::new(DestinationRegistry::build(destinations()).unwrap()),
        Arc::new(EndpointStore::new()),
        services,
        UNIT,
    );

    let origin = coordinator
        .ensure_endpoint(&Locator::new(MALL))
        .await
        .unwrap();
    let traveler = Traveler::new(EntityId::new_random(), "Rooky");
    world.place(traveler.id, origin.position());

    Booth {
        world,
        announcer,
        scheduler,
        journal,
        coordinator,
        origin,
        traveler,
    }
}

/// Builds the booth with every destination reachable.
pub async fn booth() -> Booth {
    booth_with_offline(&[]).await
}
