// File: crates/sweep-chart/src/scale.rs
// Summary: Linear data -> screen transforms for the category (X) and value (Y) axes.

/// Maps a data interval onto a screen interval. The screen interval may be
/// reversed (Y grows downward on screen).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub vmin: f64,
    pub vmax: f64,
    pub px0: f32,
    pub px1: f32,
}

impl LinearScale {
    pub fn new(vmin: f64, vmax: f64, px0: f32, px1: f32) -> Self {
        let mut s = Self { vmin, vmax, px0, px1 };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    /// X scale across a plot from `left_px` to `right_px`.
    pub fn horizontal(vmin: f64, vmax: f64, left_px: f32, right_px: f32) -> Self {
        Self::new(vmin, vmax, left_px, right_px)
    }

    /// Y scale with `vmin` at the bottom of the plot.
    pub fn vertical(vmin: f64, vmax: f64, top_px: f32, bottom_px: f32) -> Self {
        Self::new(vmin, vmax, bottom_px, top_px)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.vmin) / (self.vmax - self.vmin);
        self.px0 + t as f32 * (self.px1 - self.px0)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let t = ((px - self.px0) / (self.px1 - self.px0)) as f64;
        self.vmin + t * (self.vmax - self.vmin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_scale_is_flipped() {
        let s = LinearScale::vertical(0.0, 10.0, 100.0, 300.0);
        assert_eq!(s.to_px(0.0), 300.0);
        assert_eq!(s.to_px(10.0), 100.0);
        assert!((s.from_px(200.0) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn zero_span_is_widened() {
        let s = LinearScale::horizontal(3.0, 3.0, 0.0, 100.0);
        assert_eq!(s.to_px(3.0), 0.0);
        assert_eq!(s.to_px(4.0), 100.0);
    }
}
