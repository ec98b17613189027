//! Core library for tracking Gantt charts.
//!
//! A tracking Gantt chart shows, for every activity of a project simulation
//! snapshot, the empirical distribution of its start and end times against
//! the committed baseline and a revised baseline. This crate reads snapshots,
//! computes the chart geometry and draws it with plotters.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Snapshot     │    │   ChartLayout   │    │  GanttRenderer  │
//! │ (text or JSON)  │───▶│ (ECDFs, shapes) │───▶│ (SVG / bitmap)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`snapshot`]: data model, activity status and the two readers
//! - [`ecdf`]: empirical CDFs over integer samples
//! - [`layout`]: pure chart geometry, the part worth testing
//! - [`render`]: drawing a layout onto a plotters backend
//! - [`config`]: settings from files and the XDG config directory
//! - [`params`]: interface-neutral request parameters
//! - [`display`]: markdown summaries for the terminal
//!
//! # Quick Start
//!
//! ```rust
//! use tracking_gantt_core::GanttRendererBuilder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let snapshot = tracking_gantt_core::read_snapshot("./data/ProjSnap7_4.txt")?;
//!
//! let renderer = GanttRendererBuilder::new()
//!     .with_figure_size(1000, 800)
//!     .with_output_path(Some("gantt_4.svg"))
//!     .build()?;
//!
//! let layout = renderer.render(&snapshot.chart_input())?;
//! println!("Drew {} activities", layout.rows.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod display;
pub mod ecdf;
pub mod error;
pub mod layout;
pub mod params;
pub mod render;
pub mod snapshot;

// Re-export commonly used types
pub use config::GanttConfig;
pub use ecdf::Ecdf;
pub use error::{GanttError, Result};
pub use layout::{ActivityRow, ChartInput, ChartLayout, LineStyle, Segment};
pub use params::{ConvertSnapshot, RenderChart, SummarizeSnapshot};
pub use render::{create_gantt_chart, show_chart, ChartOptions, GanttRenderer, GanttRendererBuilder};
pub use snapshot::{read_snapshot, ActivityStatus, Snapshot};
