//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Treatment age monitor.
///
/// Evaluates a treatment event log against per-tracker recency
/// thresholds and reports pill text and pending alerts.
#[derive(Debug, Parser)]
#[command(name = "tam", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show pill status for every configured tracker.
    Status {
        /// Path to the treatments JSON log (defaults to the configured path).
        #[arg(long)]
        treatments: Option<PathBuf>,

        /// Reference time: ISO 8601 or relative ("2 hours ago"). Defaults to now.
        #[arg(long)]
        at: Option<String>,

        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Evaluate trackers and deliver any pending alerts.
    Check {
        /// Path to the treatments JSON log (defaults to the configured path).
        #[arg(long)]
        treatments: Option<PathBuf>,

        /// Reference time: ISO 8601 or relative ("2 hours ago"). Defaults to now.
        #[arg(long)]
        at: Option<String>,
    },

    /// List configured trackers and their effective thresholds.
    Trackers {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}
