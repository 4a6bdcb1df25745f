// File: crates/sweep-chart/src/spec.rs
// Summary: ChartSpec value object, comparison overlay and precondition checks.

use std::path::{Component, Path};

use crate::error::RenderError;
use crate::palette::{self, LineStyle, SeriesStyle};
use crate::table::{Cell, Table};

/// Y label used when the caller doesn't give one.
pub const DEFAULT_Y_LABEL: &str = "Value";

/// Second table drawn dashed on the same axes, e.g. another model variant.
/// Shares the primary table's category column name.
#[derive(Clone, Debug)]
pub struct Overlay {
    pub table: Table,
    pub value_columns: Vec<String>,
    pub legend_labels: Option<Vec<String>>,
}

impl Overlay {
    pub fn new<I, S>(table: Table, value_columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            table,
            value_columns: value_columns.into_iter().map(Into::into).collect(),
            legend_labels: None,
        }
    }

    pub fn with_legend_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.legend_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }
}

/// Everything needed to render one chart.
#[derive(Clone, Debug)]
pub struct ChartSpec {
    pub table: Table,
    pub category_column: String,
    pub value_columns: Vec<String>,
    pub legend_labels: Option<Vec<String>>,
    pub overlay: Option<Overlay>,
    pub title: String,
    pub x_label: String,
    pub y_label: Option<String>,
    pub x_ticks: Option<Vec<f64>>,
    /// File stem of the output image.
    pub output: String,
    /// Figure size in inches; falls back to the renderer's default.
    pub figure_size: Option<(f32, f32)>,
    pub legend_font_size: Option<f32>,
}

/// A validated series ready for layout: label, style and (x, y) cells in row order.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedSeries {
    pub label: String,
    pub style: SeriesStyle,
    pub line: LineStyle,
    pub points: Vec<(Cell, Cell)>,
}

impl ChartSpec {
    pub fn new<I, S>(
        table: Table,
        category_column: impl Into<String>,
        value_columns: I,
        output: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            table,
            category_column: category_column.into(),
            value_columns: value_columns.into_iter().map(Into::into).collect(),
            legend_labels: None,
            overlay: None,
            title: String::new(),
            x_label: String::new(),
            y_label: None,
            x_ticks: None,
            output: output.into(),
            figure_size: None,
            legend_font_size: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }

    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    pub fn with_x_ticks(mut self, ticks: impl IntoIterator<Item = f64>) -> Self {
        self.x_ticks = Some(ticks.into_iter().collect());
        self
    }

    pub fn with_legend_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.legend_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_overlay(mut self, overlay: Overlay) -> Self {
        self.overlay = Some(overlay);
        self
    }

    pub fn with_figure_size(mut self, width_in: f32, height_in: f32) -> Self {
        self.figure_size = Some((width_in, height_in));
        self
    }

    pub fn with_legend_font_size(mut self, size: f32) -> Self {
        self.legend_font_size = Some(size);
        self
    }

    pub fn y_label(&self) -> &str {
        self.y_label.as_deref().unwrap_or(DEFAULT_Y_LABEL)
    }

    /// Total number of plotted lines, overlay included.
    pub fn series_count(&self) -> usize {
        self.value_columns.len() + self.overlay.as_ref().map_or(0, |o| o.value_columns.len())
    }

    /// Check every precondition and produce the series to draw.
    /// Palette slots run through the primary series first, then the overlay.
    pub fn resolve(&self) -> Result<Vec<ResolvedSeries>, RenderError> {
        validate_output_name(&self.output)?;
        if self.value_columns.is_empty() {
            return Err(RenderError::NoSeries);
        }
        check_labels(&self.value_columns, self.legend_labels.as_deref())?;
        if let Some(o) = &self.overlay {
            check_labels(&o.value_columns, o.legend_labels.as_deref())?;
        }
        palette::check_capacity(self.series_count())?;

        let mut out = Vec::with_capacity(self.series_count());
        self.collect_series(
            &self.table,
            &self.value_columns,
            self.legend_labels.as_deref(),
            LineStyle::Solid,
            &mut out,
        )?;
        if let Some(o) = &self.overlay {
            self.collect_series(&o.table, &o.value_columns, o.legend_labels.as_deref(), LineStyle::Dashed, &mut out)?;
        }
        Ok(out)
    }

    fn collect_series(
        &self,
        table: &Table,
        columns: &[String],
        labels: Option<&[String]>,
        line: LineStyle,
        out: &mut Vec<ResolvedSeries>,
    ) -> Result<(), RenderError> {
        let xs = table.column(&self.category_column)?;
        for (i, col) in columns.iter().enumerate() {
            let ys = table.column(col)?;
            let label = labels.map_or_else(|| col.clone(), |l| l[i].clone());
            out.push(ResolvedSeries {
                label,
                style: palette::style(out.len())?,
                line,
                points: xs.iter().copied().zip(ys).collect(),
            });
        }
        Ok(())
    }
}

fn check_labels(columns: &[String], labels: Option<&[String]>) -> Result<(), RenderError> {
    match labels {
        Some(l) if l.len() != columns.len() => {
            Err(RenderError::LabelCountMismatch { expected: columns.len(), actual: l.len() })
        }
        _ => Ok(()),
    }
}

/// Output names must be a single plain path component so every chart lands
/// directly inside the output directory.
pub fn validate_output_name(name: &str) -> Result<(), RenderError> {
    let invalid = || RenderError::InvalidOutputName(name.to_string());
    if name.trim().is_empty() || name.contains(['/', '\\', '\0']) {
        return Err(invalid());
    }
    let mut comps = Path::new(name).components();
    match (comps.next(), comps.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(invalid()),
    }
}
