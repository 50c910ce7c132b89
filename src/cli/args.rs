//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all
//! docweave commands. It uses clap's derive API for declarative argument
//! parsing.
//!
//! ## Commands
//!
//! - `extract`: Collate documentation from a source tree (also the default
//!   when no subcommand is given)
//! - `init`: Initialize a docweave configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Arguments for the default extract behavior (no subcommand).
    #[command(flatten)]
    pub extract: ExtractArgs,
}

#[derive(Debug, Clone, Args)]
pub struct ExtractArgs {
    /// Root directory to collate documentation from
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Enable verbose output (reports skipped binary files)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    #[command(flatten)]
    pub args: ExtractArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Collate marked documentation lines and print them to stdout
    Extract(ExtractCommand),
    /// Initialize a new .docweaverc.json configuration file
    Init,
}
