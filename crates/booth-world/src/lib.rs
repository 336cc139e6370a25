//! Transporter booth: in-process adapters.
//!
//! Concrete implementations of the collaborator ports declared in
//! `booth-core`, used by the console front end.

pub mod announcer;
pub mod journal;
pub mod scheduler;
pub mod world;
