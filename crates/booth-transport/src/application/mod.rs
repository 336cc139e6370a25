//! Application layer for the transport context.

pub mod coordinator;
pub mod provisioner;
pub mod query_handlers;
pub mod sequencer;
