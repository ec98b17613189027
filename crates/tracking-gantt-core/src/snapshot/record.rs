//! Structured JSON record for snapshots.
//!
//! The record carries the same fields as the text layout under explicit
//! names, so it can be produced by other tools without knowing the line
//! order:
//!
//! ```json
//! {
//!   "timepoint": 6,
//!   "schedule": [0, 5, -1],
//!   "baseline": [0, 4, 6],
//!   "new_baseline": [0, 4, 7],
//!   "real_durations": [0, 12, 0],
//!   "active_ids": [],
//!   "unstarted_ids": [2],
//!   "start_samples": [[0], [5], [3, 4, 5]],
//!   "end_samples": [[0], [12], [10, 11, 12]]
//! }
//! ```

use std::path::Path;

use log::info;

use super::Snapshot;
use crate::error::{GanttError, Result};

/// Parse and validate a snapshot record.
///
/// # Errors
///
/// Returns `GanttError::Serialization` for malformed JSON and
/// `GanttError::Inconsistent` when the arrays disagree in length.
pub fn from_json(text: &str) -> Result<Snapshot> {
    let snapshot: Snapshot = serde_json::from_str(text)?;
    snapshot.validate()?;
    Ok(snapshot)
}

/// Serialize a snapshot as a pretty-printed record.
///
/// # Errors
///
/// Returns `GanttError::Serialization` if serialization fails.
pub fn to_json(snapshot: &Snapshot) -> Result<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Write a snapshot record to disk.
///
/// # Errors
///
/// Returns `GanttError::FileSystem` if the file cannot be written.
pub fn write_json<P: AsRef<Path>>(snapshot: &Snapshot, path: P) -> Result<()> {
    let path = path.as_ref();
    let json = to_json(snapshot)?;
    std::fs::write(path, json).map_err(|e| GanttError::FileSystem {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!("Wrote snapshot record to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    const RECORD: &str = r#"{
        "timepoint": 6,
        "schedule": [0, 5, -1],
        "baseline": [0, 4, 6],
        "new_baseline": [0, 4, 7],
        "real_durations": [0, 12, 0],
        "active_ids": [],
        "unstarted_ids": [2],
        "start_samples": [[0], [5], [3, 4, 5]],
        "end_samples": [[0], [12], [10, 11, 12]]
    }"#;

    #[test]
    fn test_from_json_named_fields() {
        let snapshot = from_json(RECORD).expect("parse record");
        assert_eq!(snapshot.timepoint, 6);
        assert_eq!(snapshot.unstarted_ids, BTreeSet::from([2]));
        assert_eq!(snapshot.end_samples[2], vec![10, 11, 12]);
    }

    #[test]
    fn test_missing_id_sets_default_to_empty() {
        let record = r#"{
            "timepoint": 0,
            "schedule": [0, 1],
            "baseline": [0, 1],
            "new_baseline": [0, 1],
            "real_durations": [0, 4],
            "start_samples": [[0], [1]],
            "end_samples": [[0], [4]]
        }"#;
        let snapshot = from_json(record).expect("parse record");
        assert!(snapshot.active_ids.is_empty());
        assert!(snapshot.unstarted_ids.is_empty());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let record = RECORD.replacen("\"timepoint\"", "\"now\": 1, \"timepoint\"", 1);
        let err = from_json(&record).unwrap_err();
        assert!(matches!(err, GanttError::Serialization { .. }));
    }

    #[test]
    fn test_record_is_validated() {
        let record = RECORD.replace("\"baseline\": [0, 4, 6]", "\"baseline\": [0, 4]");
        let err = from_json(&record).unwrap_err();
        assert!(matches!(err, GanttError::Inconsistent { .. }));
    }

    #[test]
    fn test_written_record_reads_back() {
        let snapshot = from_json(RECORD).expect("parse record");
        let dir = tempfile::TempDir::new().expect("temp dir");
        let path = dir.path().join("snap.json");

        write_json(&snapshot, &path).expect("write record");
        let reread = crate::snapshot::read_snapshot(&path).expect("read record");
        assert_eq!(reread, snapshot);
    }
}
