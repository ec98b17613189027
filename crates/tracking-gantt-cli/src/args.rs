use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ConfigArgs, ConvertArgs, RenderArgs, SummaryArgs};

/// Tracking Gantt chart generator
///
/// Reads a project snapshot (the realized schedule so far plus Monte-Carlo
/// samples of the remaining start and end times) and draws one row per
/// activity: an empirical distribution curve of its start and end times,
/// the baseline it was committed to, and any revised baseline.
///
/// Without a subcommand, reads ./data/ProjSnap7_4.txt and writes
/// gantt_4.svg (or whatever the configuration file says).
#[derive(Parser)]
#[command(version, about, name = "tgantt")]
pub struct Args {
    /// Path to a JSON configuration file. Defaults to
    /// $XDG_CONFIG_HOME/tracking-gantt/config.json when it exists
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the tracking Gantt CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Draw the chart for a snapshot
    #[command(alias = "r")]
    Render(RenderArgs),
    /// Print a per-activity table of a snapshot
    #[command(alias = "s")]
    Summary(SummaryArgs),
    /// Write a snapshot as a structured JSON record
    Convert(ConvertArgs),
    /// Show the effective configuration, or save it for later runs
    Config(ConfigArgs),
}
