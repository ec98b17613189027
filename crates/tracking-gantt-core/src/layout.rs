//! Chart geometry for tracking Gantt charts.
//!
//! [`ChartLayout::compute`] turns sampled start/end times into plain shapes in
//! data coordinates: one row per activity with its background bar, the two
//! ECDF curves, connector segments and baseline ticks, plus the global
//! shading and axis extents. Nothing here touches a drawing backend; see
//! [`crate::render`] for that.
//!
//! Rows use a half-unit pitch and grow downward: row `r` (activity `r + 1`)
//! is centred at `(r + 1) * 0.5`. Inside a row band, probability 0 maps to
//! `centre + 0.23` and probability 1 to `centre - 0.23`.

use log::debug;

use crate::ecdf::Ecdf;
use crate::error::{GanttError, Result};

/// Vertical distance between row centres.
pub const ROW_PITCH: f64 = 0.5;
/// Height of the background bar of a row.
pub const BAR_HEIGHT: f64 = 0.46;
/// Distance between major ticks on the time axis.
pub const MAJOR_TICK_STEP: i64 = 5;
/// Lower edge of the vertical extent.
pub const Y_MIN: f64 = 0.2;
/// Largest magnitude a charted time may have. Curves carry one point and the
/// axis one minor tick per time unit.
pub const MAX_CHART_TIME: i64 = 1_000_000;

const HALF_BAND: f64 = BAR_HEIGHT / 2.0;
const TICK_SHIFT: f64 = 0.1;
const LABEL_SHIFT: f64 = 0.8;
const CURVE_WIDTH: u32 = 2;
const BASELINE_WIDTH: u32 = 3;
const NOW_WIDTH: u32 = 1;

/// Borrowed per-activity data a chart is drawn from.
///
/// All slices are indexed by activity id and share one length, the activity
/// count. Index 0 is the dummy activity and is never drawn.
#[derive(Debug, Clone, Copy)]
pub struct ChartInput<'a> {
    pub start_samples: &'a [Vec<i64>],
    pub end_samples: &'a [Vec<i64>],
    pub baseline: &'a [i64],
    pub new_baseline: &'a [i64],
    /// The "now" instant; 0 means no present-time marker
    pub timepoint: i64,
}

impl ChartInput<'_> {
    /// Number of activities, the dummy activity included.
    pub fn activity_count(&self) -> usize {
        self.baseline.len()
    }

    fn check_lengths(&self) -> Result<()> {
        let count = self.activity_count();
        let fields = [
            ("start_samples", self.start_samples.len()),
            ("end_samples", self.end_samples.len()),
            ("new_baseline", self.new_baseline.len()),
        ];
        for (field, len) in fields {
            if len != count {
                return Err(GanttError::inconsistent(field)
                    .with_reason(format!("expected {count} entries, found {len}")));
            }
        }
        Ok(())
    }
}

/// How a segment is stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
}

/// A straight stroke between two points in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub style: LineStyle,
    pub width: u32,
}

impl Segment {
    fn vertical(x: f64, y0: f64, y1: f64, style: LineStyle, width: u32) -> Self {
        Self {
            from: (x, y0),
            to: (x, y1),
            style,
            width,
        }
    }
}

/// Axis-aligned rectangle in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl Rect {
    pub fn width(&self) -> f64 {
        self.x.1 - self.x.0
    }

    pub fn height(&self) -> f64 {
        self.y.1 - self.y.0
    }
}

/// Everything drawn for one activity.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRow {
    /// Activity id, 1-based
    pub activity: usize,
    /// Observed range `[min start sample, max end sample]`
    pub span: (i64, i64),
    /// Row centre on the vertical axis
    pub center: f64,
    /// Flat backdrop spanning the observed range
    pub bar: Rect,
    /// Text drawn left of the bar
    pub label: String,
    pub label_at: (f64, f64),
    /// ECDF of the start samples, one point per time unit
    pub start_curve: Vec<(f64, f64)>,
    /// ECDF of the end samples, one point per time unit
    pub end_curve: Vec<(f64, f64)>,
    /// Segments anchoring the curves to the band edges
    pub connectors: Vec<Segment>,
    /// Dashed tick at the baseline time
    pub baseline_tick: Segment,
    /// Dotted tick at the revised baseline, only when it moved
    pub revised_tick: Option<Segment>,
}

impl ActivityRow {
    fn build(
        row: usize,
        activity: usize,
        starts: &Ecdf,
        ends: &Ecdf,
        span: (i64, i64),
        baseline: i64,
        revised: i64,
    ) -> Self {
        let center = (row + 1) as f64 * ROW_PITCH;
        let (lo, hi) = span;
        let band = |p: f64| center - p * BAR_HEIGHT + HALF_BAND;

        let curve = |ecdf: &Ecdf| -> Vec<(f64, f64)> {
            (lo..=hi).map(|x| (x as f64, band(ecdf.eval(x)))).collect()
        };
        let start_curve = curve(starts);
        let end_curve = curve(ends);

        let (x0, x1) = (lo as f64, hi as f64);
        let connector = |x: f64, edge: f64, p: f64| {
            Segment::vertical(x, edge, band(p), LineStyle::Solid, CURVE_WIDTH)
        };
        let connectors = vec![
            connector(x0, center + HALF_BAND, starts.eval(lo)),
            connector(x0, center + HALF_BAND, ends.eval(lo)),
            // trailing edge of the end curve for realized ends
            connector(x1, center - HALF_BAND, ends.eval(hi)),
        ];

        let tick = |at: i64, style: LineStyle| {
            Segment::vertical(
                at as f64 - TICK_SHIFT,
                center + HALF_BAND,
                center - HALF_BAND,
                style,
                BASELINE_WIDTH,
            )
        };
        let baseline_tick = tick(baseline, LineStyle::Dashed);
        let revised_tick = (revised != baseline).then(|| tick(revised, LineStyle::Dotted));

        Self {
            activity,
            span,
            center,
            bar: Rect {
                x: (x0, x1),
                y: (center - HALF_BAND, center + HALF_BAND),
            },
            label: activity.to_string(),
            label_at: (x0 - LABEL_SHIFT, center),
            start_curve,
            end_curve,
            connectors,
            baseline_tick,
            revised_tick,
        }
    }

    /// Baseline tick followed by the revised tick when present.
    pub fn ticks(&self) -> impl Iterator<Item = &Segment> {
        std::iter::once(&self.baseline_tick).chain(self.revised_tick.as_ref())
    }
}

/// Complete geometry of a tracking Gantt chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    /// Drawn rows, skipped activities omitted
    pub rows: Vec<ActivityRow>,
    /// Number of row slots, one per non-dummy activity
    pub row_slots: usize,
    /// Translucent "past" region left of the timepoint
    pub shading: Option<Rect>,
    /// Dashed line marking the timepoint
    pub now_line: Option<Segment>,
    /// Largest time on the axis, before the one-unit margin
    pub max_time: i64,
    /// The "now" instant of the input; 0 when unmarked
    pub timepoint: i64,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub major_ticks: Vec<i64>,
    pub minor_ticks: Vec<i64>,
}

impl ChartLayout {
    /// Lay out a chart.
    ///
    /// `max_time` is a floor for the time axis; the axis always reaches the
    /// largest observed end sample. Negative floors are treated as 0.
    /// Activities with no start or no end samples are skipped. An input with
    /// no activity besides the dummy yields an empty chart.
    ///
    /// # Errors
    ///
    /// Returns `GanttError::Inconsistent` if the input slices differ in
    /// length, or if `max_time` or any sample lies beyond
    /// [`MAX_CHART_TIME`].
    pub fn compute(input: &ChartInput<'_>, max_time: i64) -> Result<Self> {
        input.check_lengths()?;
        if max_time > MAX_CHART_TIME {
            return Err(GanttError::inconsistent("max_time")
                .with_reason(format!("axis floor {max_time} exceeds {MAX_CHART_TIME}")));
        }

        let row_slots = input.activity_count().saturating_sub(1);
        let y_max = row_slots as f64 * ROW_PITCH + 0.3;
        let mut max_time = max_time.max(0);
        let mut rows = Vec::with_capacity(row_slots);

        for row in 0..row_slots {
            let activity = row + 1;
            let starts = Ecdf::new(&input.start_samples[activity]);
            let ends = Ecdf::new(&input.end_samples[activity]);

            let (Some(lo), Some(hi)) = (starts.min(), ends.max()) else {
                debug!("Skipping activity {activity}: no samples");
                continue;
            };
            if lo > hi {
                debug!("Skipping activity {activity}: earliest start {lo} after latest end {hi}");
                continue;
            }
            if lo < -MAX_CHART_TIME || hi > MAX_CHART_TIME {
                return Err(GanttError::inconsistent("samples").with_reason(format!(
                    "activity {activity} spans {lo}..={hi}, beyond ±{MAX_CHART_TIME}"
                )));
            }

            max_time = max_time.max(hi);
            rows.push(ActivityRow::build(
                row,
                activity,
                &starts,
                &ends,
                (lo, hi),
                input.baseline[activity],
                input.new_baseline[activity],
            ));
        }

        let (shading, now_line) = if input.timepoint > 0 {
            let now = input.timepoint as f64;
            (
                Some(Rect {
                    x: (0.0, now),
                    y: (Y_MIN, y_max),
                }),
                Some(Segment::vertical(now, Y_MIN, y_max, LineStyle::Dashed, NOW_WIDTH)),
            )
        } else {
            (None, None)
        };

        debug!(
            "Laid out {} of {row_slots} activities, time axis 0..={max_time}",
            rows.len()
        );

        Ok(Self {
            rows,
            row_slots,
            shading,
            now_line,
            max_time,
            timepoint: input.timepoint,
            x_range: (0.0, (max_time + 1) as f64),
            y_range: (Y_MIN, y_max),
            major_ticks: (0..=max_time).step_by(MAJOR_TICK_STEP as usize).collect(),
            minor_ticks: (0..=max_time).collect(),
        })
    }

    /// Look up the row drawn for an activity.
    pub fn row(&self, activity: usize) -> Option<&ActivityRow> {
        self.rows.iter().find(|row| row.activity == activity)
    }
}
