// File: crates/sweep-chart/src/lib.rs
// Summary: Core library entry point; exports the table/spec model and the PNG chart renderer.

pub mod chart;
pub mod error;
pub mod table;
pub mod spec;
pub mod palette;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod layout;
pub mod theme;
pub mod text;
pub mod export;

pub use chart::{ChartRenderer, RenderOptions, DEFAULT_OUTPUT_DIR};
pub use error::RenderError;
pub use table::{Cell, Row, Table};
pub use spec::{ChartSpec, Overlay, DEFAULT_Y_LABEL};
pub use palette::{LineStyle, Marker, SeriesStyle};
pub use layout::{plan, Layout, LegendCorner};
pub use theme::Theme;
pub use text::{ApproxMetrics, MeasureText, TextShaper};
