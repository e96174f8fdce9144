//! Observability module
//!
//! Logging setup for the `starsite` CLI.

pub mod logging;

pub use logging::{LogFormat, init_logging};
