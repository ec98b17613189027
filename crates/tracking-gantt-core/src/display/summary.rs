//! Per-activity overview of a snapshot.

use std::fmt;

use crate::ecdf::Ecdf;
use crate::snapshot::{ActivityStatus, Snapshot};

/// One table row of a [`SnapshotSummary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivitySummary {
    pub id: usize,
    pub status: ActivityStatus,
    pub baseline: i64,
    pub new_baseline: i64,
    /// Earliest and latest start sample
    pub start: Option<(i64, i64)>,
    /// Earliest and latest end sample
    pub end: Option<(i64, i64)>,
    /// Median of the end samples
    pub median_end: Option<i64>,
}

impl ActivitySummary {
    fn new(snapshot: &Snapshot, id: usize) -> Self {
        let starts = Ecdf::new(&snapshot.start_samples[id]);
        let ends = Ecdf::new(&snapshot.end_samples[id]);
        let range = |ecdf: &Ecdf| ecdf.min().zip(ecdf.max());

        Self {
            id,
            status: snapshot.status(id),
            baseline: snapshot.baseline[id],
            new_baseline: snapshot.new_baseline[id],
            start: range(&starts),
            end: range(&ends),
            median_end: ends.quantile(0.5),
        }
    }

    /// Whether the revised baseline differs from the committed one.
    pub fn is_rebaselined(&self) -> bool {
        self.baseline != self.new_baseline
    }
}

/// Newtype for formatting an optional sample range.
struct Span(Option<(i64, i64)>);

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => write!(f, "-"),
            Some((lo, hi)) if lo == hi => write!(f, "{lo}"),
            Some((lo, hi)) => write!(f, "{lo}..{hi}"),
        }
    }
}

/// Overview of a snapshot: counts by status and one row per activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotSummary {
    pub timepoint: i64,
    pub activities: Vec<ActivitySummary>,
}

impl SnapshotSummary {
    /// Summarize every activity except the dummy.
    ///
    /// The snapshot is expected to be validated, as returned by the readers.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            timepoint: snapshot.timepoint,
            activities: snapshot
                .activity_ids()
                .map(|id| ActivitySummary::new(snapshot, id))
                .collect(),
        }
    }

    /// Number of activities with the given status.
    pub fn count(&self, status: ActivityStatus) -> usize {
        self.activities.iter().filter(|a| a.status == status).count()
    }
}

impl fmt::Display for SnapshotSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Snapshot at t = {}", self.timepoint)?;
        writeln!(f)?;

        if self.activities.is_empty() {
            writeln!(f, "No activities in this snapshot.")?;
            return Ok(());
        }

        writeln!(
            f,
            "- Activities: {} ({} finished, {} active, {} unstarted)",
            self.activities.len(),
            self.count(ActivityStatus::Finished),
            self.count(ActivityStatus::Active),
            self.count(ActivityStatus::Unstarted)
        )?;
        let rebaselined = self.activities.iter().filter(|a| a.is_rebaselined()).count();
        writeln!(f, "- Rebaselined: {rebaselined}")?;
        writeln!(f)?;

        writeln!(f, "| # | Status | Baseline | Revised | Start | End | Median end |")?;
        writeln!(f, "|---|---|---|---|---|---|---|")?;
        for a in &self.activities {
            let median = a.median_end.map_or_else(|| "-".to_string(), |m| m.to_string());
            writeln!(
                f,
                "| {} | {} {} | {} | {} | {} | {} | {} |",
                a.id,
                a.status.icon(),
                a.status,
                a.baseline,
                a.new_baseline,
                Span(a.start),
                Span(a.end),
                median
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn create_test_snapshot() -> Snapshot {
        Snapshot {
            timepoint: 6,
            schedule: vec![0, 5, -1, 2],
            baseline: vec![0, 4, 6, 2],
            new_baseline: vec![0, 4, 7, 2],
            real_durations: vec![0, 12, 0, 0],
            active_ids: BTreeSet::from([3]),
            unstarted_ids: BTreeSet::from([2]),
            start_samples: vec![vec![0], vec![5], vec![3, 4, 5], vec![2]],
            end_samples: vec![vec![0], vec![12], vec![10, 11, 12], vec![]],
        }
    }

    #[test]
    fn test_summary_rows() {
        let summary = SnapshotSummary::from_snapshot(&create_test_snapshot());

        assert_eq!(summary.activities.len(), 3);
        let finished = &summary.activities[0];
        assert_eq!(finished.status, ActivityStatus::Finished);
        assert_eq!(finished.start, Some((5, 5)));
        assert_eq!(finished.median_end, Some(12));
        assert!(!finished.is_rebaselined());

        let unstarted = &summary.activities[1];
        assert_eq!(unstarted.start, Some((3, 5)));
        assert_eq!(unstarted.median_end, Some(11));
        assert!(unstarted.is_rebaselined());

        let active = &summary.activities[2];
        assert_eq!(active.end, None);
        assert_eq!(active.median_end, None);
    }

    #[test]
    fn test_summary_markdown() {
        let output = SnapshotSummary::from_snapshot(&create_test_snapshot()).to_string();

        assert!(output.starts_with("# Snapshot at t = 6\n"));
        assert!(output.contains("- Activities: 3 (1 finished, 1 active, 1 unstarted)"));
        assert!(output.contains("- Rebaselined: 1"));
        assert!(output.contains("| 1 | ✓ finished | 4 | 4 | 5 | 12 | 12 |"));
        assert!(output.contains("| 3 | ➤ active | 2 | 2 | 2 | - | - |"));
    }

    #[test]
    fn test_empty_summary() {
        let mut snapshot = create_test_snapshot();
        snapshot.schedule.truncate(1);
        let output = SnapshotSummary::from_snapshot(&snapshot).to_string();
        assert!(output.contains("No activities in this snapshot."));
    }
}
