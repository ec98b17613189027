//! Command-line argument wrappers and command handlers.
//!
//! Argument structures carry the clap derives and convert into the core's
//! parameter types from [`tracking_gantt_core::params`], so the core never
//! depends on the CLI framework. [`Cli`] then runs each request against the
//! loaded configuration and prints the markdown result.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use log::{info, warn};
use tracking_gantt_core::{
    display::{ChartWritten, RecordWritten, SnapshotSummary},
    read_snapshot, show_chart,
    snapshot::record,
    ConvertSnapshot, GanttConfig, GanttRendererBuilder, RenderChart, SummarizeSnapshot,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrappers
// ============================================================================

/// Draw the chart for a snapshot
#[derive(Args)]
pub struct RenderArgs {
    /// Snapshot file (text layout, or a JSON record ending in .json)
    pub input: Option<PathBuf>,
    /// Image to write; .svg, .png, .bmp, .jpg or .jpeg
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Lower bound for the largest time shown on the axis
    #[arg(long, value_name = "N")]
    pub max_time: Option<i64>,
    /// Draw the "now" marker here instead of at the snapshot's timepoint
    #[arg(long, value_name = "N")]
    pub timepoint: Option<i64>,
    /// Figure width in pixels
    #[arg(long, value_name = "PX")]
    pub width: Option<u32>,
    /// Figure height in pixels
    #[arg(long, value_name = "PX")]
    pub height: Option<u32>,
    /// Print the chart as SVG to standard output instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
    /// Open the saved chart in the default image viewer
    #[arg(long, conflicts_with = "stdout")]
    pub show: bool,
}

impl From<RenderArgs> for RenderChart {
    fn from(val: RenderArgs) -> Self {
        RenderChart {
            input: val.input,
            output: val.output,
            max_time: val.max_time,
            timepoint: val.timepoint,
            width: val.width,
            height: val.height,
            font_size: None,
            show: val.show,
        }
    }
}

/// Print a per-activity table of a snapshot
#[derive(Args)]
pub struct SummaryArgs {
    /// Snapshot file; defaults to the configured input
    pub input: Option<PathBuf>,
}

impl From<SummaryArgs> for SummarizeSnapshot {
    fn from(val: SummaryArgs) -> Self {
        SummarizeSnapshot { input: val.input }
    }
}

/// Write a snapshot as a structured JSON record
#[derive(Args)]
pub struct ConvertArgs {
    /// Snapshot file to read
    pub input: PathBuf,
    /// JSON record to write
    pub output: PathBuf,
}

impl From<ConvertArgs> for ConvertSnapshot {
    fn from(val: ConvertArgs) -> Self {
        ConvertSnapshot {
            input: val.input,
            output: val.output,
        }
    }
}

/// Show the effective configuration
#[derive(Args)]
pub struct ConfigArgs {
    /// Save the effective configuration to the user config location
    #[arg(long)]
    pub init: bool,
}

// ============================================================================
// Command Handlers
// ============================================================================

/// Runs commands against a loaded configuration.
pub struct Cli {
    config: GanttConfig,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(config: GanttConfig, renderer: TerminalRenderer) -> Self {
        Self { config, renderer }
    }

    /// Draw a chart, either to the configured file or as SVG on stdout.
    pub fn render_chart(self, params: &RenderChart, to_stdout: bool) -> Result<()> {
        let config = self.config.with_overrides(params);

        let mut snapshot = read_snapshot(&config.input)
            .with_context(|| format!("Failed to read snapshot {}", config.input.display()))?;
        if let Some(timepoint) = params.timepoint {
            info!("Overriding timepoint {} with {timepoint}", snapshot.timepoint);
            snapshot.timepoint = timepoint;
        }

        let builder = if to_stdout {
            GanttRendererBuilder::new().with_options(config.chart.clone())
        } else {
            config.renderer_builder()
        };
        let renderer = builder.build().context("Invalid chart settings")?;
        let input = snapshot.chart_input();

        match renderer.output_path() {
            Some(path) => {
                let layout = renderer
                    .render(&input)
                    .with_context(|| format!("Failed to render chart to {}", path.display()))?;
                if params.show {
                    if let Err(e) = show_chart(path) {
                        warn!("Could not display {}: {e}", path.display());
                    }
                }
                self.renderer
                    .render(&ChartWritten::new(path, &layout).to_string())
            }
            None => {
                let layout = renderer.layout(&input).context("Failed to lay out chart")?;
                let svg = renderer
                    .render_svg(&layout)
                    .context("Failed to render chart")?;
                std::io::stdout()
                    .write_all(svg.as_bytes())
                    .context("Failed to write chart to stdout")
            }
        }
    }

    /// Print the per-activity table of a snapshot.
    pub fn summarize(&self, params: &SummarizeSnapshot) -> Result<()> {
        let input = params.input.as_ref().unwrap_or(&self.config.input);
        let snapshot = read_snapshot(input)
            .with_context(|| format!("Failed to read snapshot {}", input.display()))?;

        self.renderer
            .render(&SnapshotSummary::from_snapshot(&snapshot).to_string())
    }

    /// Re-encode a snapshot as a JSON record.
    pub fn convert(&self, params: ConvertSnapshot) -> Result<()> {
        let snapshot = read_snapshot(&params.input)
            .with_context(|| format!("Failed to read snapshot {}", params.input.display()))?;
        record::write_json(&snapshot, &params.output)
            .with_context(|| format!("Failed to write {}", params.output.display()))?;

        let written = RecordWritten {
            path: params.output,
            activities: snapshot.activity_ids().len(),
        };
        self.renderer.render(&written.to_string())
    }

    /// Print the effective configuration, saving it first with `init`.
    pub fn show_config(&self, init: bool) -> Result<()> {
        let json = self
            .config
            .to_json()
            .context("Failed to serialize configuration")?;

        let mut markdown = String::new();
        if init {
            let path = self
                .config
                .write_user_config()
                .context("Failed to save configuration")?;
            markdown.push_str(&format!("Saved configuration to {}\n\n", path.display()));
        }
        markdown.push_str(&format!("```json\n{json}\n```\n"));
        self.renderer.render(&markdown)
    }
}
