// File: crates/sweep-chart/src/table.rs
// Summary: Row-ordered numeric table with missing-value cells.
// Notes:
// - Rows keep caller order; nothing here sorts.
// - NaN is normalized to a missing cell on the way in.

use std::collections::BTreeMap;

use crate::error::RenderError;

/// One cell: a number or missing.
pub type Cell = Option<f64>;

/// A single row, column name -> cell.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    cells: BTreeMap<String, Cell>,
}

impl Row {
    pub fn new() -> Self { Self::default() }

    /// Insert or replace a cell. `NaN` is stored as missing.
    pub fn set(&mut self, column: impl Into<String>, value: Cell) {
        self.cells.insert(column.into(), normalize(value));
    }

    pub fn with(mut self, column: impl Into<String>, value: Cell) -> Self {
        self.set(column, value);
        self
    }

    /// `None` if the column doesn't exist in this row, `Some(None)` if it is missing.
    pub fn get(&self, column: &str) -> Option<Cell> {
        self.cells.get(column).copied()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    pub fn new() -> Self { Self::default() }

    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Build a table column-wise. Shorter columns leave the trailing cells of
    /// their rows absent, so such a column reports `MissingColumn` when read.
    pub fn from_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<Cell>)>,
        S: Into<String>,
    {
        let mut rows: Vec<Row> = Vec::new();
        for (name, values) in columns {
            let name = name.into();
            if rows.len() < values.len() {
                rows.resize_with(values.len(), Row::new);
            }
            for (row, value) in rows.iter_mut().zip(values) {
                row.set(name.clone(), value);
            }
        }
        Self { rows }
    }

    /// Convenience for fully-populated columns (NaN still means missing).
    pub fn from_dense<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        Self::from_columns(
            columns
                .into_iter()
                .map(|(name, values)| (name, values.into_iter().map(Some).collect())),
        )
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Row] { &self.rows }

    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// True when every row carries `column`.
    pub fn has_column(&self, column: &str) -> bool {
        self.rows.iter().all(|r| r.get(column).is_some())
    }

    /// Extract a column in row order. Fails if any row lacks it.
    pub fn column(&self, column: &str) -> Result<Vec<Cell>, RenderError> {
        self.rows
            .iter()
            .map(|r| {
                r.get(column).ok_or_else(|| RenderError::MissingColumn { column: column.to_string() })
            })
            .collect()
    }
}

fn normalize(value: Cell) -> Cell {
    value.filter(|v| !v.is_nan())
}
