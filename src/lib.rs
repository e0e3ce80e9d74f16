//! crust-slowread library
//!
//! Core functionality for the slow-consumer diagnostic client: the wire
//! command, socket path configuration and the throttled drain loop.

pub mod client;
pub mod config;
pub mod protocol;
