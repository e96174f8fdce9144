//! Command-line interface
//!
//! Argument parsing and command handlers for the `starsite` binary.

pub mod args;
pub mod commands;
