//! Simulation snapshots and their readers.
//!
//! A [`Snapshot`] is one timepoint of a schedule simulation: the realized
//! schedule so far, two baselines to compare against, and for every activity
//! a set of sampled start and end times. Activities whose start or end is
//! already known carry a one-element sample set, so every activity can be
//! charted the same way regardless of its status.
//!
//! Two on-disk forms are supported:
//!
//! - the positional text layout written by the simulator ([`reader`])
//! - a structured JSON record with named fields ([`record`])
//!
//! [`read_snapshot`] picks one by file extension.
//!
//! ```rust
//! use tracking_gantt_core::{ActivityStatus, Snapshot};
//!
//! let text = "0\n-1 5 -1 \n0 4 6 \n0 4 6 \n0 12 0 \n\n2 \n\n\n3 4 5 \n\n\n\n10 11 12 \n";
//! let snapshot: Snapshot = text.parse().unwrap();
//!
//! assert_eq!(snapshot.activity_count(), 3);
//! assert_eq!(snapshot.status(1), ActivityStatus::Finished);
//! assert_eq!(snapshot.start_samples[1], vec![5]);
//! assert_eq!(snapshot.end_samples[2], vec![10, 11, 12]);
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{GanttError, Result};
use crate::layout::ChartInput;

pub mod reader;
pub mod record;
pub mod status;

pub use status::ActivityStatus;

/// Parsed state of one simulation snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Snapshot {
    /// The "now" instant of the schedule
    pub timepoint: i64,

    /// Realized start per activity, `-1` when not yet started
    pub schedule: Vec<i64>,

    /// Committed baseline time per activity
    pub baseline: Vec<i64>,

    /// Proposed revised baseline per activity
    pub new_baseline: Vec<i64>,

    /// Realized end per activity, used for finished activities
    pub real_durations: Vec<i64>,

    /// Activities currently in progress
    #[serde(default)]
    pub active_ids: BTreeSet<usize>,

    /// Activities not yet started
    #[serde(default)]
    pub unstarted_ids: BTreeSet<usize>,

    /// Sampled start times per activity
    pub start_samples: Vec<Vec<i64>>,

    /// Sampled end times per activity
    pub end_samples: Vec<Vec<i64>>,
}

impl Snapshot {
    /// Number of activities, the dummy activity 0 included.
    pub fn activity_count(&self) -> usize {
        self.schedule.len()
    }

    /// Status of an activity derived from the id sets.
    ///
    /// Membership in `unstarted_ids` takes precedence over `active_ids`.
    pub fn status(&self, id: usize) -> ActivityStatus {
        ActivityStatus::from_id_sets(id, &self.active_ids, &self.unstarted_ids)
    }

    /// Ids of the activities that are charted, the dummy activity excluded.
    pub fn activity_ids(&self) -> std::ops::Range<usize> {
        1..self.activity_count().max(1)
    }

    /// Check that every per-activity sequence matches the schedule length and
    /// that the id sets only name existing activities.
    ///
    /// # Errors
    ///
    /// Returns `GanttError::Inconsistent` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let count = self.activity_count();

        let per_activity = [
            ("baseline", self.baseline.len()),
            ("new_baseline", self.new_baseline.len()),
            ("real_durations", self.real_durations.len()),
            ("start_samples", self.start_samples.len()),
            ("end_samples", self.end_samples.len()),
        ];
        for (field, len) in per_activity {
            if len != count {
                return Err(GanttError::inconsistent(field)
                    .with_reason(format!("expected {count} entries, found {len}")));
            }
        }

        let id_sets = [
            ("active_ids", &self.active_ids),
            ("unstarted_ids", &self.unstarted_ids),
        ];
        for (field, ids) in id_sets {
            if let Some(id) = ids.iter().find(|&&id| id >= count) {
                return Err(GanttError::inconsistent(field)
                    .with_reason(format!("activity {id} is out of range 0..{count}")));
            }
        }

        Ok(())
    }

    /// Borrow the fields the chart is drawn from.
    pub fn chart_input(&self) -> ChartInput<'_> {
        ChartInput {
            start_samples: &self.start_samples,
            end_samples: &self.end_samples,
            baseline: &self.baseline,
            new_baseline: &self.new_baseline,
            timepoint: self.timepoint,
        }
    }
}

/// Whether a path names a structured JSON record.
fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Read a snapshot from disk, choosing the format by extension.
///
/// # Errors
///
/// Returns `GanttError::FileSystem` if the file cannot be read, a format
/// error if it is malformed or truncated, and `GanttError::Inconsistent` if
/// the parsed arrays disagree in length.
pub fn read_snapshot<P: AsRef<Path>>(path: P) -> Result<Snapshot> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| GanttError::FileSystem {
        path: path.to_path_buf(),
        source: e,
    })?;

    let snapshot = if is_json(path) {
        record::from_json(&text)?
    } else {
        reader::parse(&text)?
    };

    info!(
        "Read snapshot from {} ({} activities, timepoint {})",
        path.display(),
        snapshot.activity_count(),
        snapshot.timepoint
    );
    Ok(snapshot)
}
