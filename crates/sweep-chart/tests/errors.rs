// File: crates/sweep-chart/tests/errors.rs
// Purpose: Precondition failures are typed, leave nothing on disk, and don't poison later renders.

use sweep_chart::{ChartRenderer, ChartSpec, Overlay, RenderError, RenderOptions, Table};

fn table() -> Table {
    Table::from_dense([
        ("n", vec![0.0, 1.0, 2.0]),
        ("f_mae", vec![0.1, 0.2, 0.3]),
        ("e_mae", vec![1.0, 2.0, 3.0]),
    ])
}

fn renderer(dir: &std::path::Path) -> ChartRenderer {
    let mut opts = RenderOptions::default();
    opts.output_dir = dir.join("plots");
    opts.dpi = 50.0;
    opts.draw_labels = false;
    ChartRenderer::new(opts)
}

#[test]
fn label_count_mismatch() {
    let tmp = tempfile::tempdir().unwrap();
    let spec = ChartSpec::new(table(), "n", ["f_mae", "e_mae"], "labels").with_legend_labels(["Force MAE"]);
    let err = renderer(tmp.path()).render(&spec).unwrap_err();
    assert!(matches!(err, RenderError::LabelCountMismatch { expected: 2, actual: 1 }), "{err}");
}

#[test]
fn missing_column_leaves_no_file() {
    let tmp = tempfile::tempdir().unwrap();
    let r = renderer(tmp.path());
    let spec = ChartSpec::new(table(), "n", ["f_mae", "e/N_mae"], "missing");
    match r.render(&spec) {
        Err(RenderError::MissingColumn { column }) => assert_eq!(column, "e/N_mae"),
        other => panic!("unexpected: {other:?}"),
    }
    assert!(!r.output_path(&spec).exists());
}

#[test]
fn missing_category_column() {
    let tmp = tempfile::tempdir().unwrap();
    let spec = ChartSpec::new(table(), "rmax", ["f_mae"], "cat");
    assert!(matches!(
        renderer(tmp.path()).render(&spec),
        Err(RenderError::MissingColumn { ref column }) if column == "rmax"
    ));
}

#[test]
fn overlay_missing_column() {
    let tmp = tempfile::tempdir().unwrap();
    let other = Table::from_dense([("n", vec![0.0, 1.0]), ("f_mae", vec![0.2, 0.1])]);
    let spec = ChartSpec::new(table(), "n", ["f_mae"], "ovl").with_overlay(Overlay::new(other, ["e_mae"]));
    assert!(matches!(renderer(tmp.path()).render(&spec), Err(RenderError::MissingColumn { .. })));
}

#[test]
fn empty_series_list() {
    let tmp = tempfile::tempdir().unwrap();
    let spec = ChartSpec::new(table(), "n", Vec::<String>::new(), "none");
    assert!(matches!(renderer(tmp.path()).render(&spec), Err(RenderError::NoSeries)));
}

#[test]
fn palette_is_not_cycled() {
    let tmp = tempfile::tempdir().unwrap();
    let cols = ["a", "b", "c", "d", "e", "f"];
    let wide = Table::from_dense(
        std::iter::once(("n", vec![0.0, 1.0])).chain(cols.iter().map(|&c| (c, vec![1.0, 2.0]))),
    );
    let spec = ChartSpec::new(wide, "n", cols, "wide");
    assert!(matches!(
        renderer(tmp.path()).render(&spec),
        Err(RenderError::PaletteExhausted { requested: 6, available: 5 })
    ));
}

#[test]
fn output_name_cannot_escape_directory() {
    let tmp = tempfile::tempdir().unwrap();
    for name in ["../escape", "a/b", ""] {
        let spec = ChartSpec::new(table(), "n", ["f_mae"], name);
        assert!(matches!(renderer(tmp.path()).render(&spec), Err(RenderError::InvalidOutputName(_))));
    }
    assert!(!tmp.path().join("escape.png").exists());
}

#[test]
fn unwritable_output_directory_is_io_failure() {
    let tmp = tempfile::tempdir().unwrap();
    // A regular file where the output directory should be.
    let blocker = tmp.path().join("plots");
    std::fs::write(&blocker, b"not a dir").unwrap();
    let spec = ChartSpec::new(table(), "n", ["f_mae"], "io");
    assert!(matches!(renderer(tmp.path()).render(&spec), Err(RenderError::IoFailure { .. })));
}

#[test]
fn failure_does_not_abort_batch() {
    let tmp = tempfile::tempdir().unwrap();
    let r = renderer(tmp.path());
    let specs = vec![
        ChartSpec::new(table(), "n", ["nope"], "bad"),
        ChartSpec::new(table(), "n", ["f_mae", "e_mae"], "good"),
    ];
    let results: Vec<_> = specs.iter().map(|s| r.render(s)).collect();
    assert!(results[0].is_err());
    assert!(results[1].is_ok());
    assert!(r.output_path(&specs[1]).exists());
    assert!(!r.output_path(&specs[0]).exists());
}
