//! Command implementations for the termfx CLI.
//!
//! This module contains the actual implementations of CLI commands,
//! separated from the argument parsing definitions in cli/mod.rs.

pub mod colorize;
pub mod completions;
pub mod config;
pub mod loader;
pub mod progress_cmd;
