// File: crates/sweep-chart/src/text.rs
// Summary: Text measurement seam plus a Skia textlayout shaper that draws labels.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Width/height of a single-line label, in points.
pub trait MeasureText {
    fn width(&self, text: &str, size: f32, bold: bool) -> f32;

    /// Line height used for stacking labels.
    fn line_height(&self, size: f32) -> f32 { size * 1.2 }
}

/// Average-advance approximation; used where no fonts are needed.
#[derive(Clone, Copy, Debug, Default)]
pub struct ApproxMetrics;

impl MeasureText for ApproxMetrics {
    fn width(&self, text: &str, size: f32, bold: bool) -> f32 {
        let advance = if bold { 0.62 } else { 0.56 };
        text.chars().count() as f32 * size * advance
    }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["DejaVu Sans", "Arial", "Helvetica", "Liberation Sans", "sans-serif"]);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color, bold));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw with the text's top-left corner at `(x, y)`.
    pub fn draw_top_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color, bold: bool) {
        let mut p = self.layout(text, size, color, bold);
        p.paint(canvas, (x, y));
    }

    /// Draw horizontally centered on `cx`, top edge at `y`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, y: f32, size: f32, color: skia::Color, bold: bool) {
        let mut p = self.layout(text, size, color, bold);
        let w = p.longest_line();
        p.paint(canvas, (cx - w * 0.5, y));
    }

    /// Draw starting at `x`, vertically centered on `cy`.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, cy: f32, size: f32, color: skia::Color) {
        let mut p = self.layout(text, size, color, false);
        let h = p.height();
        p.paint(canvas, (x, cy - h * 0.5));
    }

    /// Draw right-aligned to `right`, vertically centered on `cy`.
    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, right: f32, cy: f32, size: f32, color: skia::Color) {
        let mut p = self.layout(text, size, color, false);
        let w = p.longest_line();
        let h = p.height();
        p.paint(canvas, (right - w, cy - h * 0.5));
    }

    /// Draw rotated 90° counter-clockwise, centered on `(cx, cy)`.
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, cx: f32, cy: f32, size: f32, color: skia::Color) {
        let mut p = self.layout(text, size, color, false);
        let w = p.longest_line();
        let h = p.height();
        canvas.save();
        canvas.translate((cx, cy));
        canvas.rotate(-90.0, None);
        p.paint(canvas, (-w * 0.5, -h * 0.5));
        canvas.restore();
    }
}

impl MeasureText for TextShaper {
    fn width(&self, text: &str, size: f32, bold: bool) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0), bold);
        // width of the longest line
        p.longest_line()
    }
}
