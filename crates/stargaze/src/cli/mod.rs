//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! stargaze binary.

mod commands;
mod fetch;
mod tui_handler;

pub use commands::{Cli, Commands};
pub use fetch::run_fetch;
pub use tui_handler::launch_tui;
