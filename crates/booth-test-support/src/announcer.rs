//! Test announcer: records every announcement.

use std::sync::Mutex;

use booth_core::announce::{Announcer, Audience};
use booth_core::ids::{EntityId, Position};

/// An announcer that records `(audience, text)` pairs in delivery order.
#[derive(Debug, Default)]
pub struct RecordingAnnouncer {
    recorded: Mutex<Vec<(Audience, String)>>,
}

impl RecordingAnnouncer {
    /// Create an empty recording announcer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every announcement so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn recorded(&self) -> Vec<(Audience, String)> {
        self.recorded.lock().unwrap().clone()
    }

    /// Text addressed directly to `entity`.
    pub fn messages_to(&self, entity: EntityId) -> Vec<String> {
        self.recorded()
            .into_iter()
            .filter(|(audience, _)| *audience == Audience::Entity(entity))
            .map(|(_, text)| text)
            .collect()
    }

    /// Text broadcast to the occupants of `position`, with or without an
    /// exclusion.
    pub fn messages_at(&self, position: &Position) -> Vec<String> {
        self.recorded()
            .into_iter()
            .filter(|(audience, _)| {
                matches!(audience, Audience::Occupants { position: at, .. } if at == position)
            })
            .map(|(_, text)| text)
            .collect()
    }
}

impl Announcer for RecordingAnnouncer {
    fn announce(&self, audience: &Audience, text: &str) {
        self.recorded
            .lock()
            .unwrap()
            .push((audience.clone(), text.to_owned()));
    }
}
