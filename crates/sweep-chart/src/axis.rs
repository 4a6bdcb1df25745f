// File: crates/sweep-chart/src/axis.rs
// Summary: Axis model with label, visible range and resolved ticks.

use crate::grid::{format_ticks, nice_ticks, DEFAULT_TICK_TARGET};

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub ticks: Vec<Tick>,
}

impl Axis {
    /// Axis over `[min, max]` with auto-generated nice ticks.
    pub fn auto(label: impl Into<String>, min: f64, max: f64) -> Self {
        let values = nice_ticks(min, max, DEFAULT_TICK_TARGET);
        Self { label: label.into(), min, max, ticks: make_ticks(&values) }
    }

    /// Axis over `[min, max]` showing exactly `values`, in the given order.
    pub fn explicit(label: impl Into<String>, min: f64, max: f64, values: &[f64]) -> Self {
        Self { label: label.into(), min, max, ticks: make_ticks(values) }
    }

    pub fn tick_values(&self) -> Vec<f64> {
        self.ticks.iter().map(|t| t.value).collect()
    }
}

fn make_ticks(values: &[f64]) -> Vec<Tick> {
    format_ticks(values)
        .into_iter()
        .zip(values)
        .map(|(label, &value)| Tick { value, label })
        .collect()
}
