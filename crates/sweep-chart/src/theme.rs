// File: crates/sweep-chart/src/theme.rs
// Summary: Figure styling presets (background, plot face, grid, text, legend colors).

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Whole-figure background; also the color trimmed by tight cropping.
    pub background: skia::Color,
    pub plot_face: skia::Color,
    pub grid: skia::Color,
    /// Plot frame; `None` leaves the plot unframed.
    pub spine: Option<skia::Color>,
    pub title: skia::Color,
    pub axis_label: skia::Color,
    pub tick_label: skia::Color,
    pub tick: skia::Color,
    pub legend_face: skia::Color,
    pub legend_edge: skia::Color,
    pub legend_text: skia::Color,
}

impl Theme {
    /// Grey plot face with white dashed grid.
    pub fn darkgrid() -> Self {
        Self {
            name: "darkgrid",
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_face: skia::Color::from_argb(255, 0xea, 0xea, 0xf2),
            grid: skia::Color::from_argb(178, 255, 255, 255),
            spine: None,
            title: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            axis_label: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            tick_label: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            tick: skia::Color::from_argb(0, 0, 0, 0),
            legend_face: skia::Color::from_argb(204, 0xea, 0xea, 0xf2),
            legend_edge: skia::Color::from_argb(204, 0xcc, 0xcc, 0xcc),
            legend_text: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
        }
    }

    /// White plot face, light grey grid, dark frame.
    pub fn whitegrid() -> Self {
        Self {
            name: "whitegrid",
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_face: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(178, 0xb0, 0xb0, 0xb0),
            spine: Some(skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc)),
            title: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            axis_label: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            tick_label: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            tick: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            legend_face: skia::Color::from_argb(204, 255, 255, 255),
            legend_edge: skia::Color::from_argb(204, 0xcc, 0xcc, 0xcc),
            legend_text: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            plot_face: skia::Color::from_argb(255, 24, 24, 28),
            grid: skia::Color::from_argb(178, 60, 60, 68),
            spine: Some(skia::Color::from_argb(255, 180, 180, 190)),
            title: skia::Color::from_argb(255, 235, 235, 245),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick_label: skia::Color::from_argb(255, 210, 210, 220),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            legend_face: skia::Color::from_argb(204, 30, 30, 36),
            legend_edge: skia::Color::from_argb(204, 90, 90, 100),
            legend_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::darkgrid() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::darkgrid(), Theme::whitegrid(), Theme::dark()]
}

/// Find a theme by its `name`.
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name))
}
