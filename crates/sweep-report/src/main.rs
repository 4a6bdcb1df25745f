// File: crates/sweep-report/src/main.rs
// Summary: Renders every chart in the benchmark manifest to PNG; one failed chart doesn't stop the batch.

mod data;
mod manifest;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use sweep_chart::ChartRenderer;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use crate::data::TableCache;
use crate::manifest::{table_dir, Manifest};

/// Render MAE sweep charts from versioned benchmark tables.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Chart manifest; tables are read from `tables/` next to it.
    #[arg(default_value = "data/charts.json")]
    manifest: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    match run(Args::parse()) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns the number of charts that failed to render.
fn run(args: Args) -> Result<usize> {
    let manifest = Manifest::load(&args.manifest)?;
    let opts = manifest.render_options()?;

    let mut tables = TableCache::new(table_dir(&args.manifest));
    let specs = manifest.build_specs(&mut tables)?;
    debug!(tables = tables.len(), "tables loaded");

    let renderer = ChartRenderer::new(opts);
    info!(
        charts = specs.len(),
        output_dir = %renderer.options().output_dir.display(),
        "rendering charts"
    );

    let mut written = 0usize;
    let mut failed = 0usize;
    for spec in &specs {
        match renderer.render(spec) {
            Ok(()) => {
                written += 1;
                debug!(path = %renderer.output_path(spec).display(), "wrote chart");
            }
            Err(e) => {
                failed += 1;
                error!(chart = %spec.output, "render failed: {e}");
            }
        }
    }

    info!("{written} charts written, {failed} failed");
    Ok(failed)
}
