// File: crates/sweep-chart/src/view.rs
// Visible data ranges: autoscale over present points, margins, explicit tick widening.

use crate::spec::ResolvedSeries;
use crate::types::AXIS_MARGIN;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Autoscale to every point whose x and y are both present, pad each
    /// axis by `AXIS_MARGIN` of its span, then widen X to cover `x_ticks`.
    pub fn from_series(series: &[ResolvedSeries], x_ticks: Option<&[f64]>) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in series {
            for &(x, y) in &s.points {
                if let (Some(x), Some(y)) = (x, y) {
                    x_min = x_min.min(x);
                    x_max = x_max.max(x);
                    y_min = y_min.min(y);
                    y_max = y_max.max(y);
                }
            }
        }
        let (x_min, x_max) = padded(x_min, x_max);
        let (y_min, y_max) = padded(y_min, y_max);
        let mut view = Self { x_min, x_max, y_min, y_max };
        if let Some(ticks) = x_ticks {
            view.include_x(ticks);
        }
        view
    }

    fn include_x(&mut self, values: &[f64]) {
        for &v in values.iter().filter(|v| v.is_finite()) {
            self.x_min = self.x_min.min(v);
            self.x_max = self.x_max.max(v);
        }
    }
}

fn padded(min: f64, max: f64) -> (f64, f64) {
    if !min.is_finite() || !max.is_finite() {
        return (0.0, 1.0);
    }
    let (min, max) = if (max - min).abs() < 1e-9 { (min - 0.5, max + 0.5) } else { (min, max) };
    let m = (max - min) * AXIS_MARGIN;
    (min - m, max + m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{self, LineStyle};

    fn series(points: Vec<(Option<f64>, Option<f64>)>) -> ResolvedSeries {
        ResolvedSeries { label: "s".into(), style: palette::style(0).unwrap(), line: LineStyle::Solid, points }
    }

    #[test]
    fn missing_points_do_not_affect_range() {
        let s = series(vec![(Some(3.0), Some(1.2)), (Some(4.0), None), (Some(5.0), Some(0.8)), (None, Some(50.0))]);
        let v = ViewState::from_series(&[s], None);
        assert!((v.x_min - 2.9).abs() < 1e-9 && (v.x_max - 5.1).abs() < 1e-9);
        assert!((v.y_min - 0.78).abs() < 1e-9 && (v.y_max - 1.22).abs() < 1e-9);
    }

    #[test]
    fn explicit_ticks_widen_x() {
        let s = series(vec![(Some(1.0), Some(1.0)), (Some(2.0), Some(2.0))]);
        let v = ViewState::from_series(&[s], Some(&[0.0, 1.0, 2.0, 3.0]));
        assert_eq!((v.x_min, v.x_max), (0.0, 3.0));
    }

    #[test]
    fn empty_series_fall_back_to_unit_range() {
        let v = ViewState::from_series(&[], None);
        assert_eq!((v.x_min, v.x_max, v.y_min, v.y_max), (0.0, 1.0, 0.0, 1.0));
    }
}
