// File: crates/sweep-report/src/manifest.rs
// Summary: JSON chart manifest (render settings + ordered chart entries) and its mapping to ChartSpecs.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use sweep_chart::{theme, ChartSpec, Overlay, RenderOptions};

use crate::data::TableCache;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Relative paths resolve against the working directory.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub dpi: Option<f32>,
    #[serde(default)]
    pub theme: Option<String>,
    pub charts: Vec<ChartEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartEntry {
    pub output: String,
    /// Table file name under `tables/` next to the manifest.
    pub table: String,
    pub category: String,
    pub series: Vec<String>,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub x_label: String,
    #[serde(default)]
    pub y_label: Option<String>,
    #[serde(default)]
    pub x_ticks: Option<Vec<f64>>,
    #[serde(default)]
    pub overlay: Option<OverlayEntry>,
    #[serde(default)]
    pub figure_size: Option<[f32; 2]>,
    #[serde(default)]
    pub legend_font_size: Option<f32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverlayEntry {
    pub table: String,
    pub series: Vec<String>,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest from {}", path.display()))?;
        Self::parse(&contents).with_context(|| format!("failed to parse manifest {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let manifest: Self = serde_json::from_str(contents)?;
        manifest.check_unique_outputs()?;
        Ok(manifest)
    }

    /// Output names must not collide within one run.
    pub fn check_unique_outputs(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for c in &self.charts {
            if !seen.insert(c.output.as_str()) {
                bail!("duplicate chart output '{}'", c.output);
            }
        }
        Ok(())
    }

    pub fn render_options(&self) -> Result<RenderOptions> {
        let mut opts = RenderOptions::default();
        if let Some(dir) = &self.output_dir {
            opts.output_dir = dir.clone();
        }
        if let Some(dpi) = self.dpi {
            if !(dpi.is_finite() && dpi > 0.0) {
                bail!("dpi must be positive, got {dpi}");
            }
            opts.dpi = dpi;
        }
        if let Some(name) = &self.theme {
            opts.theme = theme::find(name).with_context(|| format!("unknown theme '{name}'"))?;
        }
        Ok(opts)
    }

    /// Load every referenced table and build the chart specs in manifest order.
    pub fn build_specs(&self, tables: &mut TableCache) -> Result<Vec<ChartSpec>> {
        self.charts
            .iter()
            .map(|c| c.to_spec(tables).with_context(|| format!("chart '{}'", c.output)))
            .collect()
    }
}

impl ChartEntry {
    pub fn to_spec(&self, tables: &mut TableCache) -> Result<ChartSpec> {
        let table = tables.get(&self.table)?.clone();
        let mut spec = ChartSpec::new(table, &self.category, &self.series, &self.output)
            .with_title(&self.title)
            .with_x_label(&self.x_label);
        spec.y_label = self.y_label.clone();
        spec.legend_labels = self.labels.clone();
        spec.x_ticks = self.x_ticks.clone();
        spec.figure_size = self.figure_size.map(|[w, h]| (w, h));
        spec.legend_font_size = self.legend_font_size;
        if let Some(o) = &self.overlay {
            let mut overlay = Overlay::new(tables.get(&o.table)?.clone(), &o.series);
            overlay.legend_labels = o.labels.clone();
            spec = spec.with_overlay(overlay);
        }
        Ok(spec)
    }
}

/// Directory table names are resolved against.
pub fn table_dir(manifest_path: &Path) -> PathBuf {
    let base = manifest_path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
    base.join("tables")
}
