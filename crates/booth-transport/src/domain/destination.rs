//! Destinations and the registry that indexes them.

use std::collections::HashMap;

use booth_core::error::DomainError;
use booth_core::ids::Locator;
use serde::{Deserialize, Serialize};

/// One `(label, ordinal, locator)` tuple of the destination configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationEntry {
    /// Display name.
    pub label: String,
    /// 1-based button number.
    pub ordinal: usize,
    /// Address of the target location.
    pub locator: Locator,
}

impl DestinationEntry {
    /// Convenience constructor.
    #[must_use]
    pub fn new(label: impl Into<String>, ordinal: usize, locator: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ordinal,
            locator: Locator::new(locator),
        }
    }
}

/// A named, addressable target location plus its button number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Destination {
    label: String,
    ordinal: usize,
    locator: Locator,
}

impl Destination {
    /// Display name.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// 1-based button number.
    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Address of the target location.
    #[must_use]
    pub fn locator(&self) -> &Locator {
        &self.locator
    }
}

/// Immutable directory of destinations, indexed by label and by ordinal.
///
/// `by_ordinal[n - 1]` holds ordinal `n`; `by_label` maps each label to its
/// slot in `by_ordinal`.
#[derive(Debug, Clone)]
pub struct DestinationRegistry {
    by_ordinal: Vec<Destination>,
    by_label: HashMap<String, usize>,
}

impl DestinationRegistry {
    /// Builds the registry from configuration entries.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Configuration` if a label is empty or repeated,
    /// a locator is empty, an ordinal is repeated, or the ordinals do not form
    /// the range `1..=count`.
    pub fn build(entries: impl IntoIterator<Item = DestinationEntry>) -> Result<Self, DomainError> {
        let entries: Vec<DestinationEntry> = entries.into_iter().collect();
        let count = entries.len();
        let mut slots: Vec<Option<Destination>> = vec![None; count];
        let mut by_label = HashMap::with_capacity(count);

        for entry in entries {
            if entry.label.trim().is_empty() {
                return Err(DomainError::Configuration(
                    "destination label must not be empty".into(),
                ));
            }
            if entry.locator.as_str().trim().is_empty() {
                return Err(DomainError::Configuration(format!(
                    "destination {} has an empty locator",
                    entry.label
                )));
            }
            if entry.ordinal == 0 || entry.ordinal > count {
                return Err(DomainError::Configuration(format!(
                    "destination {} has ordinal {}, expected 1..={count}",
                    entry.label, entry.ordinal
                )));
            }

            let slot = entry.ordinal - 1;
            if let Some(existing) = &slots[slot] {
                return Err(DomainError::Configuration(format!(
                    "ordinal {} is shared by {} and {}",
                    entry.ordinal, existing.label, entry.label
                )));
            }
            if by_label.insert(entry.label.clone(), slot).is_some() {
                return Err(DomainError::Configuration(format!(
                    "duplicate destination label {}",
                    entry.label
                )));
            }

            slots[slot] = Some(Destination {
                label: entry.label,
                ordinal: entry.ordinal,
                locator: entry.locator,
            });
        }

        // `count` distinct ordinals in 1..=count fill every slot.
        let by_ordinal = slots.into_iter().flatten().collect();

        Ok(Self {
            by_ordinal,
            by_label,
        })
    }

    /// Exact label match.
    #[must_use]
    pub fn lookup_by_label(&self, label: &str) -> Option<&Destination> {
        self.by_label.get(label).map(|&slot| &self.by_ordinal[slot])
    }

    /// Case-insensitive label match.
    #[must_use]
    pub fn lookup_by_label_ignoring_case(&self, label: &str) -> Option<&Destination> {
        self.by_ordinal
            .iter()
            .find(|destination| destination.label.eq_ignore_ascii_case(label))
    }

    /// Lookup by button number; `None` outside `1..=len`.
    #[must_use]
    pub fn lookup_by_ordinal(&self, ordinal: usize) -> Option<&Destination> {
        ordinal
            .checked_sub(1)
            .and_then(|slot| self.by_ordinal.get(slot))
    }

    /// Destinations in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = &Destination> {
        self.by_ordinal.iter()
    }

    /// Number of destinations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_ordinal.len()
    }

    /// Whether the registry has no destinations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_ordinal.is_empty()
    }
}
