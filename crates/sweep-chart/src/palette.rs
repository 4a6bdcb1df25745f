// File: crates/sweep-chart/src/palette.rs
// Summary: Fixed five-entry series style table (color + marker), indexed by series position.

use skia_safe as skia;

use crate::error::RenderError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
    TriangleUp,
    Diamond,
    TriangleDown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    /// Primary table series.
    Solid,
    /// Comparison overlay series.
    Dashed,
}

/// One palette slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeriesStyle {
    pub rgb: [u8; 3],
    pub marker: Marker,
}

impl SeriesStyle {
    pub fn color(&self) -> skia::Color {
        let [r, g, b] = self.rgb;
        skia::Color::from_rgb(r, g, b)
    }
}

const PALETTE: [SeriesStyle; 5] = [
    SeriesStyle { rgb: [0x1f, 0x77, 0xb4], marker: Marker::Circle },
    SeriesStyle { rgb: [0xff, 0x7f, 0x0e], marker: Marker::Square },
    SeriesStyle { rgb: [0x2c, 0xa0, 0x2c], marker: Marker::TriangleUp },
    SeriesStyle { rgb: [0xd6, 0x27, 0x28], marker: Marker::Diamond },
    SeriesStyle { rgb: [0x94, 0x67, 0xbd], marker: Marker::TriangleDown },
];

/// Number of available series styles.
pub const fn len() -> usize { PALETTE.len() }

/// Style for the series at `index`. Out-of-range is a configuration error, never a wrap.
pub fn style(index: usize) -> Result<SeriesStyle, RenderError> {
    PALETTE.get(index).copied().ok_or(RenderError::PaletteExhausted {
        requested: index + 1,
        available: PALETTE.len(),
    })
}

/// Fail early when a chart asks for more series than there are styles.
pub fn check_capacity(requested: usize) -> Result<(), RenderError> {
    if requested > PALETTE.len() {
        return Err(RenderError::PaletteExhausted { requested, available: PALETTE.len() });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_are_distinct_and_bounded() {
        let styles: Vec<_> = (0..len()).map(|i| style(i).unwrap()).collect();
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a.rgb, b.rgb);
                assert_ne!(a.marker, b.marker);
            }
        }
        assert!(matches!(style(5), Err(RenderError::PaletteExhausted { requested: 6, available: 5 })));
    }

    #[test]
    fn capacity_check() {
        assert!(check_capacity(5).is_ok());
        assert!(check_capacity(6).is_err());
    }
}
