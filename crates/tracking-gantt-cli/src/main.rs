//! Tracking Gantt CLI Application
//!
//! Command-line interface for drawing tracking Gantt charts from project
//! snapshots.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use tracking_gantt_core::{GanttConfig, RenderChart};
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config,
        no_color,
        command,
    } = Args::parse();

    // A bare invocation uses the fixed defaults and ignores the user config.
    let config = match (&command, config) {
        (None, None) => GanttConfig::default(),
        (_, path) => GanttConfig::load(path.as_deref()).context("Failed to load configuration")?,
    };
    let renderer = TerminalRenderer::new(!no_color);

    info!("Tracking Gantt started");

    let cli = Cli::new(config, renderer);
    match command {
        Some(Render(args)) => {
            let to_stdout = args.stdout;
            cli.render_chart(&args.into(), to_stdout)
        }
        Some(Summary(args)) => cli.summarize(&args.into()),
        Some(Convert(args)) => cli.convert(args.into()),
        Some(Config(args)) => cli.show_config(args.init),
        None => {
            let params = RenderChart {
                show: true,
                ..RenderChart::default()
            };
            cli.render_chart(&params, false)
        }
    }
}
