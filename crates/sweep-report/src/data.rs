// File: crates/sweep-report/src/data.rs
// Summary: CSV benchmark table loading with a per-run cache keyed by file name.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sweep_chart::{Cell, Row, Table};
use tracing::debug;

/// Load a CSV table: header row = column names, empty / `nan` cells = missing.
pub fn load_table(path: &Path) -> Result<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();

    let mut table = Table::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading row {} of {}", line + 1, path.display()))?;
        let mut row = Row::new();
        for (name, raw) in headers.iter().zip(rec.iter()) {
            let cell = parse_cell(raw)
                .with_context(|| format!("{}: row {}, column '{}'", path.display(), line + 1, name))?;
            row.set(name.clone(), cell);
        }
        table.push_row(row);
    }
    debug!(path = %path.display(), rows = table.len(), columns = headers.len(), "table loaded");
    Ok(table)
}

fn parse_cell(raw: &str) -> Result<Cell> {
    if raw.is_empty() || raw.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }
    let v = raw.parse::<f64>().with_context(|| format!("'{raw}' is not a number"))?;
    Ok(Some(v))
}

/// Loads each table file once, resolving names relative to `base`.
pub struct TableCache {
    base: PathBuf,
    tables: HashMap<String, Table>,
}

impl TableCache {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into(), tables: HashMap::new() }
    }

    pub fn get(&mut self, name: &str) -> Result<&Table> {
        if !self.tables.contains_key(name) {
            let table = load_table(&self.base.join(name))?;
            self.tables.insert(name.to_string(), table);
        }
        self.tables
            .get(name)
            .with_context(|| format!("table '{name}' missing from cache"))
    }

    pub fn len(&self) -> usize { self.tables.len() }
}
