//! Command-line interface for pkgcheck.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and the command implementation.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli};
pub use commands::{CheckCommand, Command, CommandResult};
