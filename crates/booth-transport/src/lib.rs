//! Transporter booth: transport bounded context.
//!
//! Responsible for the destination directory, selector resolution,
//! lazy provisioning of one endpoint per remote location, and the timed
//! stage sequence that moves a traveler between endpoints.

pub mod application;
pub mod config;
pub mod domain;
