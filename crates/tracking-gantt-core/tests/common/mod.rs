use std::path::PathBuf;

use tempfile::TempDir;

/// Snapshot with a dummy activity 0, activity 1 finished over [5, 12] and
/// activity 2 unstarted with starts 3..5 and ends 10..12.
pub const THREE_ACTIVITIES: &str = "\
0
0 5 -1 
0 4 6 
0 4 7 
0 12 0 

2 


3 4 5 
--


10 11 12 
";

/// Helper function to write a snapshot into a fresh temporary directory
pub fn write_snapshot(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write snapshot");
    (temp_dir, path)
}
