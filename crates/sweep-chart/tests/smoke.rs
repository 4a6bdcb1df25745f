// File: crates/sweep-chart/tests/smoke.rs
// Purpose: End-to-end render of the two-series sweep scenario to a PNG on disk.

use sweep_chart::{plan, ApproxMetrics, ChartRenderer, ChartSpec, RenderOptions, Table};

fn scenario() -> ChartSpec {
    let table = Table::from_dense([
        ("n", vec![0.0, 1.0, 2.0, 3.0]),
        ("f", vec![0.07, 0.12, 0.06, 0.05]),
        ("e", vec![0.9, 1.5, 0.56, 0.58]),
    ]);
    ChartSpec::new(table, "n", ["f", "e"], "scenario_force_energy")
        .with_title("Charge Layer Variation")
        .with_x_label("Number of Charge Layers")
        .with_y_label("Mean Absolute Error")
        .with_x_ticks([0.0, 1.0, 2.0, 3.0])
}

fn renderer(dir: &std::path::Path) -> ChartRenderer {
    let mut opts = RenderOptions::default();
    opts.output_dir = dir.join("plots");
    opts.dpi = 100.0;
    ChartRenderer::new(opts)
}

#[test]
fn scenario_layout_has_four_ticks_and_two_entries() {
    let layout = plan(&scenario(), (10.0, 6.0), &ApproxMetrics).unwrap();
    assert_eq!(layout.x_tick_labels(), ["0", "1", "2", "3"]);
    assert_eq!(layout.legend_labels(), ["f", "e"]);
}

#[test]
fn render_smoke_png() {
    let tmp = tempfile::tempdir().unwrap();
    let r = renderer(tmp.path());
    let spec = scenario();

    r.render(&spec).expect("render should succeed");

    let out = r.output_path(&spec);
    assert_eq!(out, tmp.path().join("plots/scenario_force_energy.png"));
    let bytes = std::fs::read(&out).expect("output exists");
    assert!(!bytes.is_empty(), "png should be non-empty");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    // Tight crop: never larger than the 10x6in figure, and not collapsed.
    let img = image::load_from_memory(&bytes).expect("valid PNG").to_rgba8();
    let (w, h) = img.dimensions();
    assert!(w <= 1000 && h <= 600, "cropped size {w}x{h}");
    assert!(w > 500 && h > 300, "cropped size {w}x{h}");
}

#[test]
fn rerender_overwrites_with_identical_bytes() {
    let tmp = tempfile::tempdir().unwrap();
    let r = renderer(tmp.path());
    let spec = scenario();

    r.render(&spec).unwrap();
    let first = std::fs::read(r.output_path(&spec)).unwrap();
    r.render(&spec).unwrap();
    let second = std::fs::read(r.output_path(&spec)).unwrap();
    assert_eq!(first, second);

    let files = std::fs::read_dir(tmp.path().join("plots")).unwrap().count();
    assert_eq!(files, 1, "no temp files left behind");
}

#[test]
fn in_memory_render_matches_file() {
    let tmp = tempfile::tempdir().unwrap();
    let r = renderer(tmp.path());
    let spec = scenario();
    let bytes = r.render_to_png_bytes(&spec).unwrap();
    r.render(&spec).unwrap();
    assert_eq!(bytes, std::fs::read(r.output_path(&spec)).unwrap());
}

#[test]
fn figure_size_override_changes_raster() {
    let tmp = tempfile::tempdir().unwrap();
    let r = renderer(tmp.path());
    let img = r.render_to_rgba8(&scenario().with_figure_size(12.0, 6.0)).unwrap();
    assert_eq!(img.dimensions(), (1200, 600));
}
