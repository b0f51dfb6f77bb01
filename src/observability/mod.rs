//! Observability module.
//!
//! Logging setup for the conversion CLI.

pub mod logging;

pub use logging::init_logging;
