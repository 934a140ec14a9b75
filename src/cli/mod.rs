//! Command-line interface for the `scansion` binary.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
