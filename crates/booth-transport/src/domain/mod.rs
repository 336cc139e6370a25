//! Domain layer for the transport context.

pub mod commands;
pub mod destination;
pub mod endpoint;
pub mod events;
pub(crate) mod narration;
pub mod selector;
pub mod sequence;
