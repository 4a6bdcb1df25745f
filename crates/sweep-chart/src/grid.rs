// File: crates/sweep-chart/src/grid.rs
// Summary: Tick placement ("nice" 1/2/2.5/5 steps) and tick label formatting.

const STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Target tick count for auto-generated axes.
pub const DEFAULT_TICK_TARGET: usize = 8;

/// Upper bound on generated ticks per axis.
pub const MAX_TICKS: usize = 1000;

/// Ticks at a nice step covering `[lo, hi]`; only values inside the range are returned.
/// When the step is below the float resolution at `lo`/`hi` the endpoints are returned instead.
pub fn nice_ticks(lo: f64, hi: f64, target: usize) -> Vec<f64> {
    if !lo.is_finite() || !hi.is_finite() {
        return Vec::new();
    }
    if hi <= lo {
        return vec![lo];
    }
    let step = nice_step((hi - lo) / target.max(1) as f64);
    if !(step.is_finite() && step > 0.0) || lo.abs().max(hi.abs()) / step > 2f64.powi(52) {
        return vec![lo, hi];
    }
    let eps = step * 1e-9;
    let first = (lo / step - 1e-9).ceil();
    let last = ((hi + eps) / step).floor();
    if last < first {
        return Vec::new();
    }
    let count = ((last - first) as usize + 1).min(MAX_TICKS);
    (0..count)
        .map(|i| {
            let v = (first + i as f64) * step;
            // -0.0
            if v == 0.0 { 0.0 } else { v }
        })
        .collect()
}

fn nice_step(raw: f64) -> f64 {
    let mag = 10f64.powf(raw.log10().floor());
    STEPS
        .iter()
        .map(|m| m * mag)
        .find(|&s| s >= raw * (1.0 - 1e-9))
        .unwrap_or(10.0 * mag)
}

/// Format a tick set with the fewest decimals that show every value exactly.
pub fn format_ticks(values: &[f64]) -> Vec<String> {
    let decimals = (0..=6)
        .find(|&d| values.iter().all(|v| is_exact(*v, d)))
        .unwrap_or(6);
    values.iter().map(|v| format_fixed(*v, decimals)).collect()
}

fn is_exact(v: f64, decimals: i32) -> bool {
    let scaled = v * 10f64.powi(decimals);
    (scaled - scaled.round()).abs() <= 1e-6 * scaled.abs().max(1.0)
}

fn format_fixed(v: f64, decimals: i32) -> String {
    let s = format!("{:.*}", decimals as usize, v);
    // "-0", "-0.00"
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}
