//! Startup configuration read from the environment.

use booth_core::ids::Locator;
use booth_transport::config::TransportConfig;
use booth_transport::domain::destination::DestinationRegistry;

use crate::error::AppError;

/// Label of the destination the player starts at when no start locator is
/// configured and the panel has one.
pub const DEFAULT_START_LABEL: &str = "Present";

/// Everything the front end needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Destinations and stage timing.
    pub transport: TransportConfig,
    /// Locators the in-memory world refuses to activate.
    pub offline: Vec<Locator>,
    /// The location of the booth the player starts in, if set explicitly.
    pub start: Option<Locator>,
}

impl AppConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_lookup`].
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable
    /// name to its value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if the destinations file cannot be read,
    /// `AppError::Yaml` if it does not parse, and `AppError::Config` if the
    /// stage unit is not a positive integer.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut transport = match lookup("BOOTH_DESTINATIONS_FILE") {
            Some(path) => TransportConfig::from_yaml(&std::fs::read_to_string(path)?)?,
            None => TransportConfig::default(),
        };

        if let Some(raw) = lookup("BOOTH_STAGE_UNIT_MS") {
            transport.stage_unit_ms = raw
                .trim()
                .parse()
                .map_err(|e| AppError::Config(format!("BOOTH_STAGE_UNIT_MS must be a u64: {e}")))?;
        }
        if transport.stage_unit_ms == 0 {
            return Err(AppError::Config(
                "stage unit must be at least one millisecond".to_owned(),
            ));
        }

        let offline = lookup("BOOTH_OFFLINE")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|locator| !locator.is_empty())
                    .map(Locator::new)
                    .collect()
            })
            .unwrap_or_default();

        let start = lookup("BOOTH_START_LOCATOR")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .map(Locator::new);

        Ok(Self {
            transport,
            offline,
            start,
        })
    }

    /// The starting booth's location: the configured locator, else the
    /// "Present" destination, else button 1.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if nothing is configured and the panel
    /// has no buttons.
    pub fn start_locator(&self, registry: &DestinationRegistry) -> Result<Locator, AppError> {
        if let Some(start) = &self.start {
            return Ok(start.clone());
        }
        registry
            .lookup_by_label(DEFAULT_START_LABEL)
            .or_else(|| registry.lookup_by_ordinal(1))
            .map(|destination| destination.locator().clone())
            .ok_or_else(|| {
                AppError::Config(
                    "no destinations to start from; set BOOTH_START_LOCATOR".to_owned(),
                )
            })
    }
}
