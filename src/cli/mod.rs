//! Command-line interface for vergap.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, ConfigArgs, InputArgs, RenderArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
