//! Destination configuration.

use std::time::Duration;

use booth_core::error::DomainError;
use serde::Deserialize;

use crate::application::sequencer::DEFAULT_STAGE_UNIT;
use crate::domain::destination::{DestinationEntry, DestinationRegistry};

/// Transport settings loaded at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransportConfig {
    /// Length of one stage unit in milliseconds.
    #[serde(default = "default_stage_unit_ms")]
    pub stage_unit_ms: u64,
    /// The destination list.
    #[serde(default = "default_destinations")]
    pub destinations: Vec<DestinationEntry>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            stage_unit_ms: default_stage_unit_ms(),
            destinations: default_destinations(),
        }
    }
}

impl TransportConfig {
    /// Parses a YAML document.
    ///
    /// # Errors
    ///
    /// Returns the parser error if the document is malformed.
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// One stage unit.
    #[must_use]
    pub fn stage_unit(&self) -> Duration {
        Duration::from_millis(self.stage_unit_ms)
    }

    /// Builds the registry from the destination list.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Configuration` if the list is inconsistent.
    pub fn build_registry(&self) -> Result<DestinationRegistry, DomainError> {
        DestinationRegistry::build(self.destinations.iter().cloned())
    }
}

#[allow(clippy::cast_possible_truncation)]
fn default_stage_unit_ms() -> u64 {
    DEFAULT_STAGE_UNIT.as_millis() as u64
}

/// The booth's built-in destinations.
#[must_use]
pub fn default_destinations() -> Vec<DestinationEntry> {
    vec![
        DestinationEntry::new("Marvel", 1, "d/gotham/marvel/quest/rooms/forest/forest22"),
        DestinationEntry::new("Hanna Barbera", 2, "d/hb/jellystone/rooms/js_path"),
        DestinationEntry::new("Present", 3, "creators/t/texan/bttf/1985/rooms/twinpinesmall"),
        DestinationEntry::new("Sesame", 4, "d/sesame/rooms/sesame_00"),
        DestinationEntry::new("Gotham", 5, "d/gotham/gotham/streets/rooms/main-st-1"),
        DestinationEntry::new("Simpsons", 6, "d/simpsons/park/park1"),
        DestinationEntry::new("Warner Bros.", 7, "d/wb/rooms/city02"),
        DestinationEntry::new("Port Looney", 8, "d/portlooney/start"),
        DestinationEntry::new("Gilligan", 9, "d/gilligan/roo/foyer"),
    ]
}
