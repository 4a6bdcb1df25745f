// File: crates/sweep-chart/src/types.rs
// Summary: Shared constants (figure size, DPI, font and stroke sizes) and margin type.
// All lengths are in points (1/72 in) unless the name says otherwise.

/// Default figure width in inches.
pub const FIGURE_WIDTH_IN: f32 = 10.0;
/// Default figure height in inches.
pub const FIGURE_HEIGHT_IN: f32 = 6.0;
/// Default output resolution.
pub const DPI: f32 = 300.0;
pub const POINTS_PER_INCH: f32 = 72.0;

pub const TITLE_SIZE: f32 = 14.0;
pub const LABEL_SIZE: f32 = 12.0;
pub const TICK_LABEL_SIZE: f32 = 10.0;
pub const LEGEND_SIZE: f32 = 12.0;

pub const LINE_WIDTH: f32 = 2.0;
/// Marker diameter.
pub const MARKER_SIZE: f32 = 8.0;
pub const TICK_LENGTH: f32 = 3.5;
pub const TICK_PAD: f32 = 3.5;
/// Gap between tick labels and axis label, and between title and plot.
pub const LABEL_PAD: f32 = 6.0;
/// Outer whitespace kept around all content.
pub const FIGURE_PAD: f32 = 7.2;
/// Fraction of the data span added on each side of an axis.
pub const AXIS_MARGIN: f64 = 0.05;

/// Margins between the figure edge and the plot area.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left: left.max(0.0), right: right.max(0.0), top: top.max(0.0), bottom: bottom.max(0.0) }
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f32 { self.top + self.bottom }
}
