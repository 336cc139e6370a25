//! Commands for the transport context.

use booth_core::command::Command;
use booth_core::ids::{EntityId, Traveler};
use uuid::Uuid;

/// Command to press a destination button inside a booth.
#[derive(Debug, Clone)]
pub struct PressButton {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Who pressed the button.
    pub traveler: Traveler,
    /// The raw selector typed after `press`.
    pub selector: String,
}

impl Command for PressButton {
    fn command_type(&self) -> &'static str {
        "transport.press_button"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn issuer(&self) -> EntityId {
        self.traveler.id
    }
}
