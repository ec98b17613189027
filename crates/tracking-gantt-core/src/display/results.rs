//! Result messages for written files.

use std::fmt;
use std::path::PathBuf;

use crate::layout::ChartLayout;

/// A chart saved to disk.
pub struct ChartWritten<'a> {
    pub path: PathBuf,
    pub layout: &'a ChartLayout,
}

impl<'a> ChartWritten<'a> {
    pub fn new(path: impl Into<PathBuf>, layout: &'a ChartLayout) -> Self {
        Self {
            path: path.into(),
            layout,
        }
    }
}

impl fmt::Display for ChartWritten<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved chart to {}", self.path.display())?;
        writeln!(f)?;
        writeln!(
            f,
            "- Rows: {} of {}",
            self.layout.rows.len(),
            self.layout.row_slots
        )?;
        writeln!(f, "- Time axis: 0..{}", self.layout.max_time + 1)?;
        if self.layout.now_line.is_some() {
            writeln!(f, "- Timepoint: {}", self.layout.timepoint)?;
        }
        Ok(())
    }
}

/// A snapshot record saved to disk.
pub struct RecordWritten {
    pub path: PathBuf,
    pub activities: usize,
}

impl fmt::Display for RecordWritten {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Wrote snapshot record with {} activities to {}",
            self.activities,
            self.path.display()
        )
    }
}
