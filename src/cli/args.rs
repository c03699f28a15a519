//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// vergap - How far behind the latest release is this installation?
#[derive(Debug, Parser)]
#[command(name = "vergap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .vergap/config.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print nothing except errors
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub silent: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// `check` arguments, used when no command is given
    #[command(flatten)]
    pub check: CheckArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the version advisory (default if no command specified)
    Check(CheckArgs),

    /// Print the advisory as an HTML fragment
    Render(RenderArgs),

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Environment variable for `--plan-level`.
pub const PLAN_LEVEL_ENV: &str = "VERGAP_PLAN_LEVEL";
/// Environment variable for `--current-version`.
pub const CURRENT_VERSION_ENV: &str = "VERGAP_CURRENT_VERSION";
/// Environment variable for `--latest-version`.
pub const LATEST_VERSION_ENV: &str = "VERGAP_LATEST_VERSION";

/// Advisor inputs. Each falls back to its environment variable, then to the config file.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InputArgs {
    /// Plan level of the installation
    #[arg(long, env = PLAN_LEVEL_ENV)]
    pub plan_level: Option<String>,

    /// Installed version
    #[arg(long, env = CURRENT_VERSION_ENV)]
    pub current_version: Option<String>,

    /// Latest published version
    #[arg(long, env = LATEST_VERSION_ENV)]
    pub latest_version: Option<String>,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `render` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub inputs: InputArgs,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
