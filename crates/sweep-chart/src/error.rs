// File: crates/sweep-chart/src/error.rs
// Summary: Render error type shared by validation, layout and export.

use std::path::PathBuf;
use thiserror::Error;

/// Why a single chart could not be rendered.
///
/// Every variant is deterministic: retrying the same spec fails the same way.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A referenced column is absent from (at least one row of) the table.
    #[error("column '{column}' not found in table")]
    MissingColumn { column: String },

    /// Explicit legend labels don't line up with the series they name.
    #[error("expected {expected} legend labels, got {actual}")]
    LabelCountMismatch { expected: usize, actual: usize },

    /// Output directory, temp file or final rename failed.
    #[error("I/O failure at '{path}': {source}")]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("chart has no value series")]
    NoSeries,

    /// More series than palette entries; the palette never wraps.
    #[error("{requested} series requested but the palette only has {available} styles")]
    PaletteExhausted { requested: usize, available: usize },

    #[error("invalid output name '{0}': expected a bare file stem")]
    InvalidOutputName(String),

    #[error("drawing surface failure: {0}")]
    Surface(String),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

impl RenderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoFailure { path: path.into(), source }
    }
}
