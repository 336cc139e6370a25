//! Transporter booth: console front end.
//!
//! Startup configuration, wiring of the in-process adapters, and the
//! command dispatcher behind the interactive prompt.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod state;
