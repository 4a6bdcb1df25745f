// File: crates/sweep-chart/src/layout.rs
// Summary: Renderer-independent chart geometry: margins, plot rect, placed ticks,
// per-series polylines broken at missing values, and legend placement.
// Notes:
// - Everything is in points with the origin at the figure's top-left corner.
// - The Skia pipeline in chart.rs only draws what `plan` produces.

use crate::axis::Axis;
use crate::error::RenderError;
use crate::geometry::RectF;
use crate::palette::{LineStyle, SeriesStyle};
use crate::scale::LinearScale;
use crate::spec::{ChartSpec, ResolvedSeries};
use crate::text::MeasureText;
use crate::types::*;
use crate::view::ViewState;

/// A tick with its screen position along its axis.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedTick {
    pub value: f64,
    pub label: String,
    pub pos: f32,
}

#[derive(Clone, Debug)]
pub struct SeriesGeometry {
    pub label: String,
    pub style: SeriesStyle,
    pub line: LineStyle,
    /// Runs of consecutive present points. A missing value ends a run; a run
    /// of one point gets a marker but no line.
    pub runs: Vec<Vec<(f32, f32)>>,
}

impl SeriesGeometry {
    pub fn markers(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.runs.iter().flatten().copied()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendCorner {
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

const CORNERS: [LegendCorner; 4] = [
    LegendCorner::UpperRight,
    LegendCorner::UpperLeft,
    LegendCorner::LowerLeft,
    LegendCorner::LowerRight,
];

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub style: SeriesStyle,
    pub line: LineStyle,
}

#[derive(Clone, Debug)]
pub struct Legend {
    pub rect: RectF,
    pub corner: LegendCorner,
    pub entries: Vec<LegendEntry>,
    pub font_size: f32,
    pub padding: f32,
    pub row_height: f32,
    pub sample_length: f32,
    pub sample_gap: f32,
}

impl Legend {
    /// Vertical center of row `i`.
    pub fn row_center(&self, i: usize) -> f32 {
        self.rect.top + self.padding + self.row_height * (i as f32 + 0.5)
    }
}

#[derive(Clone, Debug)]
pub struct Layout {
    /// Figure size in points.
    pub width: f32,
    pub height: f32,
    pub plot: RectF,
    pub view: ViewState,
    pub title: String,
    /// Title center x and top y.
    pub title_anchor: (f32, f32),
    pub x_label: String,
    /// X label center x and top y.
    pub x_label_anchor: (f32, f32),
    pub y_label: String,
    /// Y label center (drawn rotated).
    pub y_label_anchor: (f32, f32),
    pub x_ticks: Vec<PlacedTick>,
    pub y_ticks: Vec<PlacedTick>,
    /// Top of the x tick label row.
    pub x_tick_label_top: f32,
    /// Right edge of the y tick label column.
    pub y_tick_label_right: f32,
    pub series: Vec<SeriesGeometry>,
    pub legend: Option<Legend>,
}

impl Layout {
    pub fn x_tick_labels(&self) -> Vec<&str> {
        self.x_ticks.iter().map(|t| t.label.as_str()).collect()
    }

    pub fn legend_labels(&self) -> Vec<&str> {
        self.legend
            .as_ref()
            .map(|l| l.entries.iter().map(|e| e.label.as_str()).collect())
            .unwrap_or_default()
    }
}

/// Validate `spec` and compute its full geometry for a figure of
/// `default_figure_in` inches (unless the spec overrides the size).
pub fn plan(spec: &ChartSpec, default_figure_in: (f32, f32), measure: &dyn MeasureText) -> Result<Layout, RenderError> {
    let series = spec.resolve()?;
    let (w_in, h_in) = spec.figure_size.unwrap_or(default_figure_in);
    let width = w_in.max(1.0) * POINTS_PER_INCH;
    let height = h_in.max(1.0) * POINTS_PER_INCH;

    let view = ViewState::from_series(&series, spec.x_ticks.as_deref());
    let x_axis = match &spec.x_ticks {
        Some(t) => Axis::explicit(&spec.x_label, view.x_min, view.x_max, t),
        None => Axis::auto(&spec.x_label, view.x_min, view.x_max),
    };
    let y_axis = Axis::auto(spec.y_label(), view.y_min, view.y_max);

    // Margins, outside in.
    let title_h = if spec.title.is_empty() { 0.0 } else { measure.line_height(TITLE_SIZE) + LABEL_PAD };
    let x_label_h = if x_axis.label.is_empty() { 0.0 } else { measure.line_height(LABEL_SIZE) + LABEL_PAD };
    let y_label_h = if y_axis.label.is_empty() { 0.0 } else { measure.line_height(LABEL_SIZE) + LABEL_PAD };
    let tick_label_h = measure.line_height(TICK_LABEL_SIZE);
    let y_tick_w = y_axis
        .ticks
        .iter()
        .map(|t| measure.width(&t.label, TICK_LABEL_SIZE, false))
        .fold(0.0f32, f32::max);
    let x_tick_overhang = x_axis
        .ticks
        .iter()
        .map(|t| measure.width(&t.label, TICK_LABEL_SIZE, false) * 0.5)
        .fold(0.0f32, f32::max);

    let insets = Insets::new(
        FIGURE_PAD + y_label_h + y_tick_w + TICK_PAD + TICK_LENGTH,
        FIGURE_PAD + x_tick_overhang,
        FIGURE_PAD + title_h,
        FIGURE_PAD + x_label_h + tick_label_h + TICK_PAD + TICK_LENGTH,
    );
    let plot = RectF::from_ltwh(
        insets.left,
        insets.top,
        (width - insets.hsum()).max(1.0),
        (height - insets.vsum()).max(1.0),
    );

    let sx = LinearScale::horizontal(view.x_min, view.x_max, plot.left, plot.right);
    let sy = LinearScale::vertical(view.y_min, view.y_max, plot.top, plot.bottom);

    let x_ticks = place(&x_axis, |v| sx.to_px(v));
    let y_ticks = place(&y_axis, |v| sy.to_px(v));
    let geometry: Vec<SeriesGeometry> = series.iter().map(|s| project(s, &sx, &sy)).collect();

    let legend = if series.len() > 1 {
        let font = spec.legend_font_size.unwrap_or(LEGEND_SIZE);
        Some(place_legend(&series, &geometry, plot, font, measure))
    } else {
        None
    };

    let title_w = measure.width(&spec.title, TITLE_SIZE, true);
    let title_cx = clamp_center(plot.center_x(), title_w, width);

    Ok(Layout {
        width,
        height,
        plot,
        view,
        title: spec.title.clone(),
        title_anchor: (title_cx, FIGURE_PAD),
        x_label: x_axis.label.clone(),
        x_label_anchor: (plot.center_x(), plot.bottom + TICK_LENGTH + TICK_PAD + tick_label_h + LABEL_PAD),
        y_label: y_axis.label.clone(),
        y_label_anchor: (FIGURE_PAD + measure.line_height(LABEL_SIZE) * 0.5, plot.center_y()),
        x_ticks,
        y_ticks,
        x_tick_label_top: plot.bottom + TICK_LENGTH + TICK_PAD,
        y_tick_label_right: plot.left - TICK_LENGTH - TICK_PAD,
        series: geometry,
        legend,
    })
}

fn place(axis: &Axis, to_px: impl Fn(f64) -> f32) -> Vec<PlacedTick> {
    axis.ticks
        .iter()
        .map(|t| PlacedTick { value: t.value, label: t.label.clone(), pos: to_px(t.value) })
        .collect()
}

fn project(series: &ResolvedSeries, sx: &LinearScale, sy: &LinearScale) -> SeriesGeometry {
    let mut runs = Vec::new();
    let mut run: Vec<(f32, f32)> = Vec::new();
    for &(x, y) in &series.points {
        match (x, y) {
            (Some(x), Some(y)) => run.push((sx.to_px(x), sy.to_px(y))),
            _ if !run.is_empty() => runs.push(std::mem::take(&mut run)),
            _ => {}
        }
    }
    if !run.is_empty() {
        runs.push(run);
    }
    SeriesGeometry { label: series.label.clone(), style: series.style, line: series.line, runs }
}

fn place_legend(
    series: &[ResolvedSeries],
    geometry: &[SeriesGeometry],
    plot: RectF,
    font: f32,
    measure: &dyn MeasureText,
) -> Legend {
    let padding = font * 0.4;
    let row_height = measure.line_height(font) + font * 0.3;
    let sample_length = font * 2.0;
    let sample_gap = font * 0.8;
    let label_w = series.iter().map(|s| measure.width(&s.label, font, false)).fold(0.0f32, f32::max);
    let w = padding * 2.0 + sample_length + sample_gap + label_w;
    let h = padding * 2.0 + row_height * series.len() as f32;
    let inset = font * 0.5;

    let samples = crowding_samples(geometry);
    let rect_at = |corner: LegendCorner| {
        let left = match corner {
            LegendCorner::UpperLeft | LegendCorner::LowerLeft => plot.left + inset,
            LegendCorner::UpperRight | LegendCorner::LowerRight => plot.right - inset - w,
        };
        let top = match corner {
            LegendCorner::UpperLeft | LegendCorner::UpperRight => plot.top + inset,
            LegendCorner::LowerLeft | LegendCorner::LowerRight => plot.bottom - inset - h,
        };
        RectF::from_ltwh(left, top, w, h)
    };
    // First corner with the fewest covered samples wins.
    let corner = CORNERS
        .iter()
        .copied()
        .min_by_key(|&c| {
            let r = rect_at(c);
            samples.iter().filter(|&&p| r.contains(p)).count()
        })
        .unwrap_or(LegendCorner::UpperRight);

    Legend {
        rect: rect_at(corner),
        corner,
        entries: series
            .iter()
            .map(|s| LegendEntry { label: s.label.clone(), style: s.style, line: s.line })
            .collect(),
        font_size: font,
        padding,
        row_height,
        sample_length,
        sample_gap,
    }
}

/// Marker positions plus points along each line, used to judge legend overlap.
fn crowding_samples(geometry: &[SeriesGeometry]) -> Vec<(f32, f32)> {
    const STEPS: usize = 8;
    let mut out = Vec::new();
    for g in geometry {
        for run in &g.runs {
            out.extend(run.iter().copied());
            for pair in run.windows(2) {
                let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
                for k in 1..STEPS {
                    let t = k as f32 / STEPS as f32;
                    out.push((x0 + (x1 - x0) * t, y0 + (y1 - y0) * t));
                }
            }
        }
    }
    out
}

/// Keep a centered label of width `w` inside `[FIGURE_PAD, total - FIGURE_PAD]` when possible.
fn clamp_center(cx: f32, w: f32, total: f32) -> f32 {
    let lo = FIGURE_PAD + w * 0.5;
    let hi = total - FIGURE_PAD - w * 0.5;
    if lo > hi { total * 0.5 } else { cx.clamp(lo, hi) }
}
