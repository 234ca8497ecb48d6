//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The launcher has no subcommands; invoking it with no arguments runs the
//! full check / install / start sequence.

use clap::Parser;
use std::path::PathBuf;

/// One-command launcher for the PocketSmith Tax Prep app.
#[derive(Debug, Parser)]
#[command(name = "taxprep-launch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the app root (overrides the launcher's own directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Seconds to wait for the app to stop before force-killing it
    #[arg(long, env = "TAXPREP_GRACE_PERIOD")]
    pub grace_period: Option<u64>,

    /// Show verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
