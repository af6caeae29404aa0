//! Cortex CLI - command-line interface for the Cortex content organizer.

pub mod cli;
pub mod commands;

pub use cli::{Cli, Command};
