//! Decision-simulator CLI for partner subscription programs
//!
//! This crate wraps the `radar_core` calculation kernel with everything a
//! working tool needs: a persistent session (working inputs, cost ledgers,
//! currency selection), JSON import/export of the full state, file-backed
//! storage under a data directory, logging, and the command-line surface.

pub mod commands;
pub mod data;
pub mod logging;
pub mod session;
pub mod util;

pub use logging::init_logging;
pub use session::Session;
