//! Placement and location activation ports.

use async_trait::async_trait;

use crate::error::{ActivationError, RelocationRejected};
use crate::ids::{EntityId, LocationRef, Locator, Position};

/// Tracks where entities are and moves them.
#[async_trait]
pub trait Placement: Send + Sync {
    /// Current position of `entity`, or `None` if it no longer exists.
    async fn current_position(&self, entity: EntityId) -> Option<Position>;

    /// Move `entity` to `target`.
    async fn relocate(&self, entity: EntityId, target: Position) -> Result<(), RelocationRejected>;
}

/// Resolves locators into live locations, loading them on demand.
///
/// A failure means the target is unreachable right now; callers treat it as
/// recoverable.
#[async_trait]
pub trait LocationActivator: Send + Sync {
    /// Resolve and activate the location addressed by `locator`.
    async fn activate(&self, locator: &Locator) -> Result<LocationRef, ActivationError>;
}
