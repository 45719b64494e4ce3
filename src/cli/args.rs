//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all
//! marklint commands. It uses clap's derive API for declarative argument
//! parsing.
//!
//! ## Commands
//!
//! - `check`: Run marker convention checks
//! - `fix`: Delete duplicate marker comments
//! - `init`: Initialize marklint configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory (where the config file is searched)
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check marker directive conventions in API declaration files
    Check(CheckCommand),
    /// Fix fixable issues (duplicate markers)
    Fix(FixCommand),
    /// Initialize marklint configuration file
    Init,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct FixCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Preview the edits without modifying any file
    #[arg(long)]
    pub dry_run: bool,
}
