//! Markdown formatting of snapshots and operation results.
//!
//! Everything here implements [`std::fmt::Display`] and produces markdown,
//! which the CLI's terminal renderer turns into rich output (or prints as
//! plain text with `--no-color`).
//!
//! - [`summary`]: per-activity overview of a snapshot
//! - [`results`]: messages for written charts and records
//!
//! ```rust
//! use tracking_gantt_core::{display::SnapshotSummary, Snapshot};
//!
//! let text = "6\n0 5 -1 \n0 4 6 \n0 4 7 \n0 12 0 \n\n2 \n\n\n3 4 5 \n\n\n\n10 11 12 \n";
//! let snapshot: Snapshot = text.parse().unwrap();
//!
//! let output = SnapshotSummary::from_snapshot(&snapshot).to_string();
//! assert!(output.contains("# Snapshot at t = 6"));
//! assert!(output.contains("| 2 | ○ unstarted | 6 | 7 | 3..5 | 10..12 | 11 |"));
//! ```

pub mod results;
pub mod summary;

pub use results::{ChartWritten, RecordWritten};
pub use summary::{ActivitySummary, SnapshotSummary};
