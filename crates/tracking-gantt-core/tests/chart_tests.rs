mod common;

use common::{write_snapshot, THREE_ACTIVITIES};
use tracking_gantt_core::{
    create_gantt_chart, read_snapshot, ChartOptions, GanttRendererBuilder, LineStyle, Snapshot,
};

#[test]
fn test_end_to_end_three_activities() {
    let (temp_dir, path) = write_snapshot("ProjSnap.txt", THREE_ACTIVITIES);
    let output = temp_dir.path().join("gantt.svg");

    let snapshot = read_snapshot(&path).expect("Failed to read snapshot");
    let layout = create_gantt_chart(
        &snapshot.chart_input(),
        &ChartOptions::default(),
        Some(output.as_path()),
    )
    .expect("Failed to create chart");

    assert_eq!(layout.rows.len(), 2);
    assert_eq!(layout.rows[0].activity, 1);
    assert_eq!(layout.rows[0].span, (5, 12));
    assert_eq!(layout.rows[1].activity, 2);
    assert_eq!(layout.rows[1].span, (3, 12));
    assert_eq!(layout.x_range, (0.0, 13.0));

    let svg = std::fs::read_to_string(&output).expect("Failed to read chart");
    assert!(svg.contains("<svg"));
}

#[test]
fn test_render_twice_is_identical() {
    let mut snapshot: Snapshot = THREE_ACTIVITIES.parse().expect("parse");
    snapshot.timepoint = 7;
    let renderer = GanttRendererBuilder::new().build().expect("renderer");

    let first = renderer.render(&snapshot.chart_input()).expect("first render");
    let second = renderer.render(&snapshot.chart_input()).expect("second render");

    assert_eq!(first, second);
    assert_eq!(first.x_range, second.x_range);
    assert_eq!(first.rows.len(), second.rows.len());
}

#[test]
fn test_timepoint_controls_past_marker() {
    let mut snapshot: Snapshot = THREE_ACTIVITIES.parse().expect("parse");
    let renderer = GanttRendererBuilder::new().build().expect("renderer");

    let layout = renderer.layout(&snapshot.chart_input()).expect("layout");
    assert!(layout.shading.is_none());
    assert!(layout.now_line.is_none());

    snapshot.timepoint = 8;
    let layout = renderer.layout(&snapshot.chart_input()).expect("layout");
    let shading = layout.shading.expect("shading for positive timepoint");
    assert_eq!(shading.x, (0.0, 8.0));
    assert_eq!(shading.y, layout.y_range);
    let now = layout.now_line.expect("now line for positive timepoint");
    assert_eq!((now.from.0, now.to.0), (8.0, 8.0));
    assert_eq!(now.style, LineStyle::Dashed);
}

#[test]
fn test_revised_tick_only_when_baseline_moves() {
    let mut snapshot: Snapshot = THREE_ACTIVITIES.parse().expect("parse");
    snapshot.new_baseline = snapshot.baseline.clone();
    let renderer = GanttRendererBuilder::new().build().expect("renderer");

    let layout = renderer.layout(&snapshot.chart_input()).expect("layout");
    for row in &layout.rows {
        let ticks: Vec<_> = row.ticks().collect();
        assert_eq!(ticks.len(), 1, "activity {}", row.activity);
        assert_eq!(ticks[0].style, LineStyle::Dashed);
    }
}

#[test]
fn test_max_time_floor_extends_axis() {
    let snapshot: Snapshot = THREE_ACTIVITIES.parse().expect("parse");
    let renderer = GanttRendererBuilder::new()
        .with_max_time(30)
        .build()
        .expect("renderer");

    let layout = renderer.layout(&snapshot.chart_input()).expect("layout");
    assert_eq!(layout.x_range, (0.0, 31.0));
    assert_eq!(layout.major_ticks.last(), Some(&30));
}

#[test]
fn test_png_output() {
    let snapshot: Snapshot = THREE_ACTIVITIES.parse().expect("parse");
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let output = temp_dir.path().join("charts").join("gantt.png");

    let renderer = GanttRendererBuilder::new()
        .with_figure_size(500, 400)
        .with_output_path(Some(&output))
        .build()
        .expect("renderer");
    renderer.render(&snapshot.chart_input()).expect("render");

    let bytes = std::fs::read(&output).expect("Failed to read chart");
    assert!(bytes.starts_with(b"\x89PNG"));
}
