//! Command-line interface definitions and helpers.
//!
//! This module contains argument parsing and subcommand handlers.

mod args;
mod commands;

pub use args::{Args, Command, ConfigAction};
pub use commands::{handle_config_action, resolve_options, run_convert, CliError};
