//! Drawing tracking Gantt charts with plotters.
//!
//! A [`GanttRenderer`] draws a [`ChartLayout`] onto a plotters backend
//! picked from the output path: SVG for `.svg`, the bitmap backend for
//! `.png`, `.bmp`, `.jpg` and `.jpeg`. Axes and ticks are drawn by hand
//! rather than through the plotters mesh so that major/minor ticks, hidden
//! top/right borders and the arrowhead on the time axis come out exactly as
//! laid out.

use std::path::{Path, PathBuf};

use log::{debug, info};
use plotters::coord::Shift;
use plotters::element::DashedPathElement;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};
use plotters_backend::text_anchor::{HPos, Pos, VPos};
use plotters_backend::BackendCoord;
use serde::{Deserialize, Serialize};

use crate::error::{GanttError, RenderResultExt, Result};
use crate::layout::{ChartInput, ChartLayout, LineStyle, Segment};

const LIGHT_GREY: RGBColor = RGBColor(211, 211, 211);
const PAST_OPACITY: f64 = 0.3;
const MAJOR_TICK_LEN: i32 = 10;
const MINOR_TICK_LEN: i32 = 5;
const ARROW_LEN: i32 = 7;
const ARROW_HALF_WIDTH: i32 = 3;
/// Dash length and gap in pixels
const DASH: (u32, u32) = (8, 5);
const DOT: (u32, u32) = (2, 4);

/// Appearance settings of a rendered chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartOptions {
    /// Figure width in pixels
    pub width: u32,
    /// Figure height in pixels
    pub height: u32,
    /// Font size of row labels and tick labels
    pub font_size: f64,
    /// Floor for the largest time on the axis
    pub max_time: i64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 800,
            font_size: 14.0,
            max_time: 0,
        }
    }
}

/// Image format written for an output path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Bitmap,
}

impl OutputFormat {
    /// Pick the format from a path's extension.
    ///
    /// # Errors
    ///
    /// Returns `GanttError::Render` for missing or unsupported extensions.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "svg" => Ok(Self::Svg),
            "png" | "bmp" | "jpg" | "jpeg" => Ok(Self::Bitmap),
            _ => Err(GanttError::render(format!(
                "unsupported output format for '{}'",
                path.display()
            ))),
        }
    }
}

/// Builder for creating and configuring [`GanttRenderer`] instances.
#[derive(Debug, Clone, Default)]
pub struct GanttRendererBuilder {
    options: ChartOptions,
    output_path: Option<PathBuf>,
}

impl GanttRendererBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces all chart options at once.
    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the figure size in pixels.
    pub fn with_figure_size(mut self, width: u32, height: u32) -> Self {
        self.options.width = width;
        self.options.height = height;
        self
    }

    /// Sets the floor for the largest time on the axis.
    pub fn with_max_time(mut self, max_time: i64) -> Self {
        self.options.max_time = max_time;
        self
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.options.font_size = font_size;
        self
    }

    /// Sets the file the chart is saved to.
    ///
    /// If not specified, [`GanttRenderer::render`] only lays the chart out
    /// and draws it in memory.
    pub fn with_output_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.output_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured renderer.
    ///
    /// # Errors
    ///
    /// Returns `GanttError::Configuration` for an empty figure or a
    /// non-positive font size, and `GanttError::Render` if the output path
    /// has an unsupported extension.
    pub fn build(self) -> Result<GanttRenderer> {
        if self.options.width == 0 || self.options.height == 0 {
            return Err(GanttError::Configuration {
                message: format!(
                    "figure size must be positive, got {}x{}",
                    self.options.width, self.options.height
                ),
            });
        }
        if !self.options.font_size.is_finite() || self.options.font_size <= 0.0 {
            return Err(GanttError::Configuration {
                message: format!("font size must be positive, got {}", self.options.font_size),
            });
        }
        if let Some(path) = &self.output_path {
            OutputFormat::from_path(path)?;
        }

        Ok(GanttRenderer {
            options: self.options,
            output_path: self.output_path,
        })
    }
}

/// Draws tracking Gantt charts.
#[derive(Debug, Clone)]
pub struct GanttRenderer {
    options: ChartOptions,
    output_path: Option<PathBuf>,
}

impl GanttRenderer {
    /// Chart options in effect.
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Configured output path.
    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    /// Lay out a chart with this renderer's axis floor.
    ///
    /// # Errors
    ///
    /// Returns `GanttError::Inconsistent` if the input slices differ in
    /// length.
    pub fn layout(&self, input: &ChartInput<'_>) -> Result<ChartLayout> {
        ChartLayout::compute(input, self.options.max_time)
    }

    /// Lay out and draw a chart, saving it when an output path is set.
    ///
    /// Without an output path the chart is drawn into an in-memory SVG
    /// document that is discarded.
    ///
    /// # Errors
    ///
    /// Returns layout errors, `GanttError::Render` for drawing failures and
    /// `GanttError::FileSystem` if the output directory cannot be created.
    pub fn render(&self, input: &ChartInput<'_>) -> Result<ChartLayout> {
        let layout = self.layout(input)?;
        match &self.output_path {
            Some(path) => self.save(&layout, path)?,
            None => {
                let svg = self.render_svg(&layout)?;
                debug!("Rendered chart in memory ({} bytes of SVG)", svg.len());
            }
        }
        Ok(layout)
    }

    /// Draw a layout into an SVG document.
    ///
    /// # Errors
    ///
    /// Returns `GanttError::Render` for drawing failures.
    pub fn render_svg(&self, layout: &ChartLayout) -> Result<String> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, self.size()).into_drawing_area();
            draw_chart(&root, layout, &self.options)?;
            root.present().render_context("finishing SVG document")?;
        }
        Ok(svg)
    }

    /// Draw a layout into an image file, format chosen by extension.
    ///
    /// # Errors
    ///
    /// Returns `GanttError::Render` for unsupported extensions or drawing
    /// failures and `GanttError::FileSystem` if the parent directory cannot
    /// be created.
    pub fn save(&self, layout: &ChartLayout, path: &Path) -> Result<()> {
        let format = OutputFormat::from_path(path)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| GanttError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        match format {
            OutputFormat::Svg => {
                let root = SVGBackend::new(path, self.size()).into_drawing_area();
                draw_chart(&root, layout, &self.options)?;
                root.present().render_context("writing SVG file")?;
            }
            OutputFormat::Bitmap => {
                let root = BitMapBackend::new(path, self.size()).into_drawing_area();
                draw_chart(&root, layout, &self.options)?;
                root.present().render_context("writing image file")?;
            }
        }

        info!("Saved chart with {} rows to {}", layout.rows.len(), path.display());
        Ok(())
    }

    fn size(&self) -> (u32, u32) {
        (self.options.width, self.options.height)
    }
}

/// Lay out and draw a chart in one call.
///
/// # Errors
///
/// Returns the errors of [`GanttRendererBuilder::build`] and
/// [`GanttRenderer::render`].
pub fn create_gantt_chart(
    input: &ChartInput<'_>,
    options: &ChartOptions,
    output: Option<&Path>,
) -> Result<ChartLayout> {
    GanttRendererBuilder::new()
        .with_options(options.clone())
        .with_output_path(output)
        .build()?
        .render(input)
}

/// Open a saved chart in the system's default viewer.
///
/// Returns once the viewer has been launched.
///
/// # Errors
///
/// Returns `GanttError::Render` if no viewer could be launched.
pub fn show_chart(path: &Path) -> Result<()> {
    opener::open(path).render_context("opening chart viewer")?;
    info!("Opened {} in the default viewer", path.display());
    Ok(())
}

/// Part of `span` inside the horizontal extent `range`, if any.
fn clip_span((x0, x1): (f64, f64), (lo, hi): (f64, f64)) -> Option<(f64, f64)> {
    let (from, to) = (x0.max(lo), x1.min(hi));
    (from <= to).then_some((from, to))
}

fn within((lo, hi): (f64, f64), x: f64) -> bool {
    (lo..=hi).contains(&x)
}

fn label_font(size: f64) -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, size, FontStyle::Normal)
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    layout: &ChartLayout,
    options: &ChartOptions,
) -> Result<()> {
    root.fill(&WHITE).render_context("clearing canvas")?;

    let (x_min, x_max) = layout.x_range;
    let (y_min, y_max) = layout.y_range;
    let margin = (options.font_size * 3.0).round() as u32;

    let chart = ChartBuilder::on(root)
        .margin(margin)
        .margin_bottom(margin * 2)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .render_context("building chart area")?;

    // Rows grow downward: activity 1 sits at the top.
    let to_pixel = |(x, y): (f64, f64)| chart.backend_coord(&(x, y_min + y_max - y));

    let (x_pixels, y_pixels) = chart.plotting_area().get_pixel_range();
    let (left, right) = (x_pixels.start, x_pixels.end);
    let (top, bottom) = (y_pixels.start, y_pixels.end);

    // Gridlines sit beneath everything else.
    for &tick in &layout.major_ticks {
        let x = to_pixel((tick as f64, y_min)).0;
        draw_line(root, (x, top), (x, bottom), &BLACK, 1)?;
    }

    // Data shapes are clipped to the horizontal extent; labels are not.
    let x_range = layout.x_range;
    if let Some(past) = &layout.shading {
        if let Some((x0, x1)) = clip_span(past.x, x_range) {
            root.draw(&Rectangle::new(
                [to_pixel((x0, past.y.0)), to_pixel((x1, past.y.1))],
                LIGHT_GREY.mix(PAST_OPACITY).filled(),
            ))
            .render_context("shading the past")?;
        }
    }

    let font = label_font(options.font_size);
    for row in &layout.rows {
        if let Some((x0, x1)) = clip_span(row.bar.x, x_range) {
            root.draw(&Rectangle::new(
                [to_pixel((x0, row.bar.y.0)), to_pixel((x1, row.bar.y.1))],
                LIGHT_GREY.filled(),
            ))
            .render_context("drawing activity bar")?;
        }

        root.draw(&Text::new(
            row.label.clone(),
            to_pixel(row.label_at),
            font.color(&BLACK).pos(Pos::new(HPos::Left, VPos::Center)),
        ))
        .render_context("drawing row label")?;

        for curve in [&row.start_curve, &row.end_curve] {
            let points: Vec<BackendCoord> = curve
                .iter()
                .copied()
                .filter(|&(x, _)| within(x_range, x))
                .map(to_pixel)
                .collect();
            if points.len() < 2 {
                continue;
            }
            root.draw(&PathElement::new(points, BLACK.stroke_width(2)))
                .render_context("drawing distribution curve")?;
        }

        for segment in row.connectors.iter().chain(row.ticks()) {
            if within(x_range, segment.from.0) {
                draw_segment(root, segment, &to_pixel)?;
            }
        }
    }

    if let Some(now) = layout.now_line.filter(|now| within(x_range, now.from.0)) {
        draw_segment(root, &now, &to_pixel)?;
    }

    draw_time_axis(root, layout, &font, &to_pixel, (left, right), (top, bottom))?;

    debug!(
        "Drew {} rows on a {}x{} canvas",
        layout.rows.len(),
        options.width,
        options.height
    );
    Ok(())
}

fn draw_time_axis<DB, F>(
    root: &DrawingArea<DB, Shift>,
    layout: &ChartLayout,
    font: &FontDesc<'_>,
    to_pixel: &F,
    (left, right): (i32, i32),
    (top, bottom): (i32, i32),
) -> Result<()>
where
    DB: DrawingBackend,
    F: Fn((f64, f64)) -> BackendCoord,
{
    // Left and bottom borders only.
    draw_line(root, (left, top), (left, bottom), &BLACK, 1)?;
    draw_line(root, (left, bottom), (right, bottom), &BLACK, 1)?;
    root.draw(&Polygon::new(
        vec![
            (right, bottom - ARROW_HALF_WIDTH),
            (right + ARROW_LEN, bottom),
            (right, bottom + ARROW_HALF_WIDTH),
        ],
        BLACK.filled(),
    ))
    .render_context("drawing axis arrow")?;

    let y_min = layout.y_range.0;
    for &tick in &layout.minor_ticks {
        let x = to_pixel((tick as f64, y_min)).0;
        draw_line(root, (x, bottom), (x, bottom + MINOR_TICK_LEN), &BLACK, 1)?;
    }

    let tick_label = font.color(&BLACK).pos(Pos::new(HPos::Center, VPos::Top));
    for &tick in &layout.major_ticks {
        let x = to_pixel((tick as f64, y_min)).0;
        draw_line(root, (x, bottom), (x, bottom + MAJOR_TICK_LEN), &BLACK, 1)?;
        root.draw(&Text::new(
            tick.to_string(),
            (x, bottom + MAJOR_TICK_LEN + 4),
            tick_label.clone(),
        ))
        .render_context("drawing tick label")?;
    }

    Ok(())
}

fn draw_segment<DB, F>(root: &DrawingArea<DB, Shift>, segment: &Segment, to_pixel: &F) -> Result<()>
where
    DB: DrawingBackend,
    F: Fn((f64, f64)) -> BackendCoord,
{
    let from = to_pixel(segment.from);
    let to = to_pixel(segment.to);
    let width = segment.width;

    match segment.style {
        LineStyle::Solid => draw_line(root, from, to, &BLACK, width),
        LineStyle::Dashed | LineStyle::Dotted => {
            let (dash, gap) = if segment.style == LineStyle::Dashed { DASH } else { DOT };
            root.draw(&DashedPathElement::new(
                vec![from, to],
                dash,
                gap,
                BLACK.stroke_width(width),
            ))
            .render_context("drawing dashed line")
        }
    }
}

fn draw_line<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    from: BackendCoord,
    to: BackendCoord,
    color: &RGBColor,
    width: u32,
) -> Result<()> {
    root.draw(&PathElement::new(vec![from, to], color.stroke_width(width)))
        .render_context("drawing line")
}
