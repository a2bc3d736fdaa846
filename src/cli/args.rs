//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// kmodcheck - Cross-module symbol-version dependency checker.
#[derive(Debug, Parser)]
#[command(name = "kmodcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    /// Show verbose output (per-dependency confirmations)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Check arguments for bare invocations (`kmodcheck <PATH>...`).
    #[command(flatten)]
    pub check: CheckArgs,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check symbol-version dependencies across a module set
    /// (default if no subcommand specified)
    Check(CheckArgs),

    /// Dump one module's provides/depends tables
    Inspect(InspectArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Files or directories to scan for module artifacts
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Exit non-zero when any dependency is unresolved
    #[arg(long)]
    pub strict: bool,

    /// Output resolution results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `inspect` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InspectArgs {
    /// Module artifact to inspect
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

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
