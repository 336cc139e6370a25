//! Domain error types.

use thiserror::Error;

use crate::ids::{EntityId, Locator};

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The selector was empty.
    #[error("no selector given")]
    NoSelector,

    /// The selector matched neither a label nor an ordinal.
    #[error("unknown destination: {0}")]
    UnknownDestination(String),

    /// The destination location could not be activated.
    #[error("destination unreachable: {locator}")]
    ProvisionFailure {
        /// The locator that failed to activate.
        locator: Locator,
    },

    /// The final transfer was rejected by the placement service.
    #[error("relocation failed: {0}")]
    RelocationFailure(String),

    /// The presser is not standing inside a transport endpoint.
    #[error("entity {0} is not inside a transport endpoint")]
    NotInsideEndpoint(EntityId),

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// The destination configuration is unusable.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl DomainError {
    /// The text shown to the player for this error.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NoSelector => "Press which button?",
            Self::UnknownDestination(_) => "There is no such button.",
            Self::ProvisionFailure { .. } => "The domain seems to be out of order.",
            Self::RelocationFailure(_) => "Something went wrong and you're thrown back.",
            Self::NotInsideEndpoint(_) => "There are no buttons here.",
            Self::Validation(_) | Self::Configuration(_) => "Nothing happens.",
        }
    }
}

/// A location could not be loaded or activated.
#[derive(Debug, Clone, Error)]
#[error("location {locator} could not be activated: {reason}")]
pub struct ActivationError {
    /// The locator that was being activated.
    pub locator: Locator,
    /// Why activation failed.
    pub reason: String,
}

/// The placement service refused to move an entity.
#[derive(Debug, Clone, Error)]
#[error("relocation rejected: {0}")]
pub struct RelocationRejected(pub String);

/// The event journal could not record entries.
#[derive(Debug, Clone, Error)]
#[error("journal error: {0}")]
pub struct JournalError(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_user_messages_match_booth_vocabulary() {
        assert_eq!(DomainError::NoSelector.user_message(), "Press which button?");
        assert_eq!(
            DomainError::UnknownDestination("Atlantis".into()).user_message(),
            "There is no such button."
        );
        assert_eq!(
            DomainError::ProvisionFailure {
                locator: Locator::new("loc:gotham"),
            }
            .user_message(),
            "The domain seems to be out of order."
        );
        assert_eq!(
            DomainError::NotInsideEndpoint(EntityId(Uuid::nil())).user_message(),
            "There are no buttons here."
        );
    }

    #[test]
    fn test_provision_failure_display_names_locator() {
        let err = DomainError::ProvisionFailure {
            locator: Locator::new("loc:gotham"),
        };
        assert_eq!(err.to_string(), "destination unreachable: loc:gotham");
    }
}
