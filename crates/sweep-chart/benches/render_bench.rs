// File: crates/sweep-chart/benches/render_bench.rs
// Summary: Full layout -> raster -> crop -> PNG pipeline at review and print resolutions.

use sweep_chart::{ChartRenderer, ChartSpec, RenderOptions, Table};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sweep_spec() -> ChartSpec {
    let n: Vec<f64> = (0..7).map(f64::from).collect();
    let table = Table::from_dense([
        ("n_charge", n),
        ("f_mae", vec![0.043252, 0.036346, 0.038373, 0.053466, 0.042153, 0.070449, 0.059281]),
        ("e_mae", vec![0.393750, 0.335005, 0.362729, 0.519740, 0.403392, 0.859333, 0.665777]),
    ]);
    ChartSpec::new(table, "n_charge", ["f_mae", "e_mae"], "bench")
        .with_title("Charge Layer Variation (Total Layers = 6)")
        .with_x_label("Number of Charge Layers")
        .with_y_label("Mean Absolute Error")
        .with_x_ticks((0..7).map(f64::from))
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    group.sample_size(10);
    let spec = sweep_spec();
    for &dpi in &[100.0f32, 300.0] {
        group.bench_function(format!("sweep_{dpi}dpi"), |b| {
            let mut opts = RenderOptions::default();
            opts.dpi = dpi;
            opts.draw_labels = false;
            let renderer = ChartRenderer::new(opts);
            b.iter(|| black_box(renderer.render_to_png_bytes(&spec).expect("render")));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
