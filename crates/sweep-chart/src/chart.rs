// File: crates/sweep-chart/src/chart.rs
// Summary: ChartRenderer and the headless PNG pipeline using Skia CPU raster surfaces.
// Notes:
// - Each call owns its surface; it is dropped on every return path.
// - The renderer holds only immutable options, so it can be shared across threads.

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use skia_safe as skia;
use tracing::debug;

use crate::error::RenderError;
use crate::export;
use crate::layout::{self, Layout, Legend, SeriesGeometry};
use crate::palette::{LineStyle, Marker};
use crate::spec::ChartSpec;
use crate::text::{ApproxMetrics, MeasureText, TextShaper};
use crate::theme::Theme;
use crate::types::*;

/// Directory charts land in unless configured otherwise.
pub const DEFAULT_OUTPUT_DIR: &str = "plots";

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub output_dir: PathBuf,
    pub dpi: f32,
    /// Figure size in inches, used when a spec doesn't set its own.
    pub figure_size: (f32, f32),
    pub theme: Theme,
    /// Whitespace kept around the cropped content, in inches.
    pub crop_pad_in: f32,
    /// Skip all text; layout then uses approximate metrics so output does not
    /// depend on installed fonts.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            dpi: DPI,
            figure_size: (FIGURE_WIDTH_IN, FIGURE_HEIGHT_IN),
            theme: Theme::darkgrid(),
            crop_pad_in: 0.1,
            draw_labels: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ChartRenderer {
    opts: RenderOptions,
}

impl ChartRenderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self { opts }
    }

    pub fn options(&self) -> &RenderOptions { &self.opts }

    /// Where `spec` is written: `<output_dir>/<output>.png`.
    pub fn output_path(&self, spec: &ChartSpec) -> PathBuf {
        self.opts.output_dir.join(format!("{}.png", spec.output))
    }

    /// Render `spec` and write it to [`Self::output_path`], replacing any
    /// existing file. Nothing is written unless the whole render succeeds.
    pub fn render(&self, spec: &ChartSpec) -> Result<(), RenderError> {
        let _span = tracing::debug_span!("render", output = %spec.output).entered();
        let png = self.render_to_png_bytes(spec)?;
        let path = self.output_path(spec);
        export::write_atomic(&path, &png)?;
        debug!(path = %path.display(), bytes = png.len(), "chart written");
        Ok(())
    }

    /// Full pipeline (layout, raster, crop, encode) without touching the filesystem.
    pub fn render_to_png_bytes(&self, spec: &ChartSpec) -> Result<Vec<u8>, RenderError> {
        let raster = self.render_to_rgba8(spec)?;
        let pad = (self.opts.crop_pad_in * self.opts.dpi).round().max(0.0) as u32;
        let cropped = export::tight_crop(&raster, rgba(self.opts.theme.background), pad);
        export::encode_png(&cropped)
    }

    /// Uncropped RGBA raster of the whole figure.
    pub fn render_to_rgba8(&self, spec: &ChartSpec) -> Result<RgbaImage, RenderError> {
        let shaper = TextShaper::new();
        let measure: &dyn MeasureText = if self.opts.draw_labels { &shaper } else { &ApproxMetrics };
        let layout = layout::plan(spec, self.opts.figure_size, measure)?;
        debug!(series = layout.series.len(), legend = layout.legend.is_some(), "layout planned");
        self.rasterize(&layout, &shaper)
    }

    /// Convenience wrapper writing a spec to an explicit path instead of the output directory.
    pub fn render_to_path(&self, spec: &ChartSpec, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let png = self.render_to_png_bytes(spec)?;
        export::write_atomic(path.as_ref(), &png)
    }

    fn rasterize(&self, layout: &Layout, shaper: &TextShaper) -> Result<RgbaImage, RenderError> {
        let scale = self.opts.dpi / POINTS_PER_INCH;
        let w = (layout.width * scale).round().max(1.0) as i32;
        let h = (layout.height * scale).round().max(1.0) as i32;

        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| RenderError::Surface(format!("failed to create {w}x{h} raster surface")))?;
        {
            let canvas = surface.canvas();
            let theme = &self.opts.theme;
            canvas.clear(theme.background);
            canvas.save();
            canvas.scale((scale, scale));

            draw_plot_face(canvas, layout, theme);
            draw_grid(canvas, layout, theme);
            draw_ticks(canvas, layout, theme);
            canvas.save();
            canvas.clip_rect(to_skia_rect(layout.plot), None, true);
            for g in &layout.series {
                draw_series(canvas, g);
            }
            canvas.restore();
            if let Some(legend) = &layout.legend {
                draw_legend(canvas, legend, theme, shaper, self.opts.draw_labels);
            }
            if self.opts.draw_labels {
                draw_labels(canvas, layout, theme, shaper);
            }
            canvas.restore();
        }

        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(RenderError::Surface("pixel readback failed".into()));
        }
        RgbaImage::from_raw(w as u32, h as u32, pixels)
            .ok_or_else(|| RenderError::Surface("pixel buffer size mismatch".into()))
    }
}

fn rgba(c: skia::Color) -> Rgba<u8> {
    Rgba([c.r(), c.g(), c.b(), c.a()])
}

fn to_skia_rect(r: crate::geometry::RectF) -> skia::Rect {
    skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
}

// ---- helpers ----------------------------------------------------------------

fn draw_plot_face(canvas: &skia::Canvas, layout: &Layout, theme: &Theme) {
    let mut fill = skia::Paint::default();
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(theme.plot_face);
    canvas.draw_rect(to_skia_rect(layout.plot), &fill);

    if let Some(spine) = theme.spine {
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(0.8);
        stroke.set_color(spine);
        canvas.draw_rect(to_skia_rect(layout.plot), &stroke);
    }
}

fn draw_grid(canvas: &skia::Canvas, layout: &Layout, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(0.8);
    paint.set_color(theme.grid);
    paint.set_path_effect(dash(0.8));

    let p = layout.plot;
    for t in &layout.x_ticks {
        canvas.draw_line((t.pos, p.top), (t.pos, p.bottom), &paint);
    }
    for t in &layout.y_ticks {
        canvas.draw_line((p.left, t.pos), (p.right, t.pos), &paint);
    }
}

fn draw_ticks(canvas: &skia::Canvas, layout: &Layout, theme: &Theme) {
    if theme.tick.a() == 0 {
        return;
    }
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_stroke_width(0.8);
    paint.set_color(theme.tick);

    let p = layout.plot;
    for t in &layout.x_ticks {
        canvas.draw_line((t.pos, p.bottom), (t.pos, p.bottom + TICK_LENGTH), &paint);
    }
    for t in &layout.y_ticks {
        canvas.draw_line((p.left - TICK_LENGTH, t.pos), (p.left, t.pos), &paint);
    }
}

/// Dash pattern scaled by stroke width.
fn dash(width: f32) -> Option<skia::PathEffect> {
    skia::PathEffect::dash(&[3.7 * width, 1.6 * width], 0.0)
}

fn line_paint(color: skia::Color, style: LineStyle) -> skia::Paint {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(LINE_WIDTH);
    stroke.set_stroke_cap(skia::paint::Cap::Round);
    stroke.set_stroke_join(skia::paint::Join::Round);
    stroke.set_color(color);
    if style == LineStyle::Dashed {
        stroke.set_stroke_cap(skia::paint::Cap::Butt);
        stroke.set_path_effect(dash(LINE_WIDTH));
    }
    stroke
}

fn draw_series(canvas: &skia::Canvas, series: &SeriesGeometry) {
    let color = series.style.color();
    let stroke = line_paint(color, series.line);

    for run in series.runs.iter().filter(|r| r.len() >= 2) {
        let mut path = skia::Path::new();
        path.move_to(run[0]);
        for &pt in &run[1..] {
            path.line_to(pt);
        }
        canvas.draw_path(&path, &stroke);
    }
    for pt in series.markers() {
        draw_marker(canvas, pt, series.style.marker, MARKER_SIZE, color);
    }
}

fn draw_marker(canvas: &skia::Canvas, (x, y): (f32, f32), marker: Marker, size: f32, color: skia::Color) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(color);

    let r = size * 0.5;
    match marker {
        Marker::Circle => {
            canvas.draw_circle((x, y), r, &fill);
        }
        Marker::Square => {
            let s = r * 0.85;
            canvas.draw_rect(skia::Rect::from_ltrb(x - s, y - s, x + s, y + s), &fill);
        }
        Marker::TriangleUp => {
            canvas.draw_path(&polygon(&[(x, y - r), (x + r, y + r), (x - r, y + r)]), &fill);
        }
        Marker::TriangleDown => {
            canvas.draw_path(&polygon(&[(x, y + r), (x - r, y - r), (x + r, y - r)]), &fill);
        }
        Marker::Diamond => {
            let d = r * 0.7;
            canvas.draw_path(&polygon(&[(x, y - r), (x + d, y), (x, y + r), (x - d, y)]), &fill);
        }
    }
}

fn polygon(points: &[(f32, f32)]) -> skia::Path {
    let mut path = skia::Path::new();
    if let Some((&first, rest)) = points.split_first() {
        path.move_to(first);
        for &p in rest {
            path.line_to(p);
        }
        path.close();
    }
    path
}

fn draw_legend(canvas: &skia::Canvas, legend: &Legend, theme: &Theme, shaper: &TextShaper, draw_labels: bool) {
    let rect = to_skia_rect(legend.rect);
    let radius = legend.font_size * 0.2;

    let mut face = skia::Paint::default();
    face.set_anti_alias(true);
    face.set_style(skia::paint::Style::Fill);
    face.set_color(theme.legend_face);
    canvas.draw_round_rect(rect, radius, radius, &face);

    let mut edge = skia::Paint::default();
    edge.set_anti_alias(true);
    edge.set_style(skia::paint::Style::Stroke);
    edge.set_stroke_width(0.8);
    edge.set_color(theme.legend_edge);
    canvas.draw_round_rect(rect, radius, radius, &edge);

    let x0 = legend.rect.left + legend.padding;
    let x1 = x0 + legend.sample_length;
    for (i, entry) in legend.entries.iter().enumerate() {
        let cy = legend.row_center(i);
        let color = entry.style.color();
        canvas.draw_line((x0, cy), (x1, cy), &line_paint(color, entry.line));
        draw_marker(canvas, ((x0 + x1) * 0.5, cy), entry.style.marker, MARKER_SIZE, color);
        if draw_labels {
            shaper.draw_left(canvas, &entry.label, x1 + legend.sample_gap, cy, legend.font_size, theme.legend_text);
        }
    }
}

fn draw_labels(canvas: &skia::Canvas, layout: &Layout, theme: &Theme, shaper: &TextShaper) {
    for t in &layout.x_ticks {
        shaper.draw_centered(canvas, &t.label, t.pos, layout.x_tick_label_top, TICK_LABEL_SIZE, theme.tick_label, false);
    }
    for t in &layout.y_ticks {
        shaper.draw_right(canvas, &t.label, layout.y_tick_label_right, t.pos, TICK_LABEL_SIZE, theme.tick_label);
    }
    if !layout.title.is_empty() {
        let (cx, top) = layout.title_anchor;
        shaper.draw_centered(canvas, &layout.title, cx, top, TITLE_SIZE, theme.title, true);
    }
    if !layout.x_label.is_empty() {
        let (cx, top) = layout.x_label_anchor;
        shaper.draw_centered(canvas, &layout.x_label, cx, top, LABEL_SIZE, theme.axis_label, false);
    }
    if !layout.y_label.is_empty() {
        let (cx, cy) = layout.y_label_anchor;
        shaper.draw_vertical(canvas, &layout.y_label, cx, cy, LABEL_SIZE, theme.axis_label);
    }
}
