//! Player commands.

use uuid::Uuid;

use crate::ids::EntityId;

/// A request issued by an entity, traced end to end by its correlation ID.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Stable name, e.g. `transport.press_button`.
    fn command_type(&self) -> &'static str;

    /// Correlation ID shared by every event the command causes.
    fn correlation_id(&self) -> Uuid;

    /// The entity that issued the command.
    fn issuer(&self) -> EntityId;
}
