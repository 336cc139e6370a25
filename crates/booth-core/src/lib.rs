//! Booth Core: shared domain abstractions.
//!
//! This crate defines the identifiers, error types and collaborator ports
//! (placement, activation, announcements, delayed scheduling, journaling)
//! that the transport context depends on. It contains no infrastructure code.

pub mod announce;
pub mod clock;
pub mod command;
pub mod error;
pub mod event;
pub mod ids;
pub mod journal;
pub mod placement;
pub mod scheduler;
