//! Reader for the positional snapshot text layout.
//!
//! The simulator writes one value group per line, space separated with a
//! trailing delimiter:
//!
//! ```text
//! timepoint
//! schedule            (-1 for unstarted activities)
//! baseline
//! new baseline
//! real durations
//! active ids
//! unstarted ids
//! start samples       (one line per activity)
//! separator
//! end samples         (one line per activity)
//! ```
//!
//! Sample lines are only consulted for activities whose start or end is not
//! yet realized; for the others the realized value is used as a one-element
//! sample set.

use std::collections::BTreeSet;
use std::str::FromStr;

use log::debug;

use super::{ActivityStatus, Snapshot};
use crate::error::{GanttError, Result};

/// Cursor over input lines that tracks the 1-based line number.
struct LineCursor<'a> {
    lines: std::str::Lines<'a>,
    line: usize,
}

impl<'a> LineCursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines(),
            line: 0,
        }
    }

    fn next_line(&mut self, expected: &str) -> Result<&'a str> {
        self.line += 1;
        self.lines.next().ok_or_else(|| GanttError::UnexpectedEof {
            line: self.line,
            expected: expected.to_string(),
        })
    }

    fn integer(&mut self, expected: &str) -> Result<i64> {
        let text = self.next_line(expected)?.trim();
        text.parse().map_err(|_| {
            GanttError::format(self.line).with_reason(format!("expected {expected}, found '{text}'"))
        })
    }

    fn integers(&mut self, expected: &str) -> Result<Vec<i64>> {
        let text = self.next_line(expected)?;
        parse_integers(text, self.line)
    }

    fn ids(&mut self, expected: &str) -> Result<BTreeSet<usize>> {
        let line = self.line + 1;
        self.integers(expected)?
            .into_iter()
            .map(|id| {
                usize::try_from(id).map_err(|_| {
                    GanttError::format(line).with_reason(format!("invalid activity id {id}"))
                })
            })
            .collect()
    }

    fn skip(&mut self, expected: &str) -> Result<()> {
        self.next_line(expected).map(|_| ())
    }
}

/// Parse a whitespace separated integer list. An empty line is an empty list.
fn parse_integers(text: &str, line: usize) -> Result<Vec<i64>> {
    text.split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| {
                GanttError::format(line).with_reason(format!("invalid integer '{token}'"))
            })
        })
        .collect()
}

/// Parse a snapshot from its text layout and validate it.
///
/// # Errors
///
/// Returns a format error for non-integer tokens, `GanttError::UnexpectedEof`
/// when lines are missing, and `GanttError::Inconsistent` when the parsed
/// arrays disagree.
pub fn parse(text: &str) -> Result<Snapshot> {
    let mut cursor = LineCursor::new(text);

    let timepoint = cursor.integer("timepoint")?;
    let schedule = cursor.integers("schedule")?;
    let baseline = cursor.integers("baseline")?;
    let new_baseline = cursor.integers("new baseline")?;
    let real_durations = cursor.integers("real durations")?;
    let active_ids = cursor.ids("active activity ids")?;
    let unstarted_ids = cursor.ids("unstarted activity ids")?;

    let count = schedule.len();
    debug!(
        "Snapshot header: timepoint {timepoint}, {count} activities, {} active, {} unstarted",
        active_ids.len(),
        unstarted_ids.len()
    );

    let status = |id: usize| ActivityStatus::from_id_sets(id, &active_ids, &unstarted_ids);

    let mut start_samples = Vec::with_capacity(count);
    for (id, &start) in schedule.iter().enumerate() {
        let expected = format!("start samples of activity {id}");
        if status(id).has_sampled_start() {
            start_samples.push(cursor.integers(&expected)?);
        } else {
            cursor.skip(&expected)?;
            start_samples.push(vec![start]);
        }
    }

    cursor.skip("separator line")?;

    let mut end_samples = Vec::with_capacity(count);
    for id in 0..count {
        let expected = format!("end samples of activity {id}");
        if status(id).has_sampled_end() {
            end_samples.push(cursor.integers(&expected)?);
        } else {
            cursor.skip(&expected)?;
            let end = real_durations.get(id).copied().ok_or_else(|| {
                GanttError::inconsistent("real_durations")
                    .with_reason(format!("no realized end for finished activity {id}"))
            })?;
            end_samples.push(vec![end]);
        }
    }

    let snapshot = Snapshot {
        timepoint,
        schedule,
        baseline,
        new_baseline,
        real_durations,
        active_ids,
        unstarted_ids,
        start_samples,
        end_samples,
    };
    snapshot.validate()?;
    Ok(snapshot)
}

impl FromStr for Snapshot {
    type Err = GanttError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Three activities: dummy 0, finished 1, unstarted 2.
    const THREE_ACTIVITIES: &str = "\
0
0 5 -1 \n0 4 6 \n0 4 7 \n0 12 0 \n\n2 \n\n\n3 4 5 \n--\n\n\n10 11 12 \n";

    #[test]
    fn test_parse_three_activities() {
        let snapshot = parse(THREE_ACTIVITIES).expect("parse");

        assert_eq!(snapshot.timepoint, 0);
        assert_eq!(snapshot.schedule, vec![0, 5, -1]);
        assert_eq!(snapshot.baseline, vec![0, 4, 6]);
        assert_eq!(snapshot.new_baseline, vec![0, 4, 7]);
        assert_eq!(snapshot.real_durations, vec![0, 12, 0]);
        assert!(snapshot.active_ids.is_empty());
        assert_eq!(snapshot.unstarted_ids, BTreeSet::from([2]));
        assert_eq!(snapshot.start_samples, vec![vec![0], vec![5], vec![3, 4, 5]]);
        assert_eq!(snapshot.end_samples, vec![vec![0], vec![12], vec![10, 11, 12]]);
    }

    #[test]
    fn test_active_activity_reads_end_samples_only() {
        let text = "4\n0 2 \n0 2 \n0 2 \n0 0 \n1 \n\n\n99 \n\n\n7 8 9 \n";
        let snapshot = parse(text).expect("parse");

        assert_eq!(snapshot.start_samples[1], vec![2]);
        assert_eq!(snapshot.end_samples[1], vec![7, 8, 9]);
        assert_eq!(snapshot.end_samples[0], vec![0]);
    }

    #[test]
    fn test_unstarted_wins_over_active() {
        let text = "4\n0 -1 \n0 2 \n0 2 \n0 0 \n1 \n1 \n\n3 4 \n\n\n7 8 \n";
        let snapshot = parse(text).expect("parse");

        assert_eq!(snapshot.status(1), ActivityStatus::Unstarted);
        assert_eq!(snapshot.start_samples[1], vec![3, 4]);
        assert_eq!(snapshot.end_samples[1], vec![7, 8]);
    }

    #[test]
    fn test_unconsulted_lines_are_not_parsed() {
        let text = "0\n0 1 \n0 1 \n0 1 \n0 3 \n\n\nnot numbers\nstill not\n\nx\ny\n";
        let snapshot = parse(text).expect("parse");
        assert_eq!(snapshot.start_samples, vec![vec![0], vec![1]]);
        assert_eq!(snapshot.end_samples, vec![vec![0], vec![3]]);
    }

    #[test]
    fn test_empty_sample_line_is_empty_list() {
        let text = "0\n0 -1 \n0 2 \n0 2 \n0 0 \n\n1 \n\n\n\n\n\n";
        let snapshot = parse(text).expect("parse");
        assert!(snapshot.start_samples[1].is_empty());
        assert!(snapshot.end_samples[1].is_empty());
    }

    #[test]
    fn test_crlf_and_missing_trailing_delimiter() {
        let text = "3\r\n0 5\r\n0 4\r\n0 4\r\n0 9\r\n\r\n\r\n\r\n\r\n\r\n\r\n\r\n";
        let snapshot = parse(text).expect("parse");
        assert_eq!(snapshot.timepoint, 3);
        assert_eq!(snapshot.end_samples[1], vec![9]);
    }

    #[test]
    fn test_non_integer_token_is_format_error() {
        let text = "0\n0 5 x \n";
        match parse(text).unwrap_err() {
            GanttError::Format { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("'x'"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bad_timepoint_is_format_error() {
        let err = parse("soon\n").unwrap_err();
        assert!(matches!(err, GanttError::Format { line: 1, .. }));
    }

    #[test]
    fn test_negative_id_is_format_error() {
        let text = "0\n0 1 \n0 1 \n0 1 \n0 1 \n-1 \n";
        let err = parse(text).unwrap_err();
        assert!(matches!(err, GanttError::Format { line: 6, .. }));
    }

    #[test]
    fn test_truncated_samples_is_eof_error() {
        // Missing the end sample block entirely.
        let text = "0\n0 5 -1 \n0 4 6 \n0 4 7 \n0 12 0 \n\n2 \n\n\n3 4 5 \n";
        match parse(text).unwrap_err() {
            GanttError::UnexpectedEof { line, expected } => {
                assert_eq!(line, 11);
                assert_eq!(expected, "separator line");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_is_eof_error() {
        let err = parse("").unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_length_mismatch_is_inconsistent() {
        let text = "0\n0 5 \n0 \n0 5 \n0 9 \n\n\n\n\n\n\n\n";
        let err = parse(text).unwrap_err();
        assert!(matches!(err, GanttError::Inconsistent { .. }));
    }

    #[test]
    fn test_from_str() {
        let snapshot: Snapshot = THREE_ACTIVITIES.parse().expect("parse");
        assert_eq!(snapshot.activity_count(), 3);
    }
}
