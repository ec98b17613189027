//! Parameter structures for tracking Gantt operations
//!
//! These structures carry requests from an interface (the CLI today) into the
//! core without framework-specific derives. Interface layers define their own
//! argument types and convert into these:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │   GanttConfig   │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│   + renderer    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Unset fields leave the loaded configuration untouched.

use std::path::PathBuf;

use crate::config::GanttConfig;

/// Parameters for drawing a chart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderChart {
    /// Snapshot to read instead of the configured input
    pub input: Option<PathBuf>,
    /// Image to write instead of the configured output
    pub output: Option<PathBuf>,
    /// Floor for the largest time on the axis
    pub max_time: Option<i64>,
    /// Replaces the snapshot's own timepoint
    pub timepoint: Option<i64>,
    /// Figure width in pixels
    pub width: Option<u32>,
    /// Figure height in pixels
    pub height: Option<u32>,
    /// Label font size
    pub font_size: Option<f64>,
    /// Open the saved chart in the default viewer
    pub show: bool,
}

/// Parameters for summarizing a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummarizeSnapshot {
    /// Snapshot to read instead of the configured input
    pub input: Option<PathBuf>,
}

/// Parameters for converting a snapshot to its JSON record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSnapshot {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl GanttConfig {
    /// Apply the set fields of a render request on top of this
    /// configuration.
    pub fn with_overrides(mut self, params: &RenderChart) -> Self {
        if let Some(input) = &params.input {
            self.input = input.clone();
        }
        if let Some(output) = &params.output {
            self.output = Some(output.clone());
        }
        if let Some(max_time) = params.max_time {
            self.chart.max_time = max_time;
        }
        if let Some(width) = params.width {
            self.chart.width = width;
        }
        if let Some(height) = params.height {
            self.chart.height = height;
        }
        if let Some(font_size) = params.font_size {
            self.chart.font_size = font_size;
        }
        self
    }
}
