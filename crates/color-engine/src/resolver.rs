// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Per-tick resolution of color specs into concrete colors.

use crate::{ColorSpec, GradientKey, Rgb, WallClock};
use std::collections::HashMap;

/// Configured min/max bounds for one metric, used to normalize metric
/// gradients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
}

/// Everything a gradient can depend on, captured once per rendering cycle.
#[derive(Debug)]
pub struct ResolveContext<'a> {
    /// The cycle tick counter, `0..2*cycle_ticks`.
    pub tick: u32,
    /// Cycle length in ticks (the pulse period).
    pub cycle_ticks: u32,
    /// Wall clock at the start of the cycle.
    pub clock: WallClock,
    /// Current metric values by key (`cpu_temp`, `gpu_usage`, ...).
    /// Missing entries resolve with factor 0 and a warning.
    pub metrics: &'a HashMap<String, f64>,
    /// Configured min/max per metric key.
    pub ranges: &'a HashMap<String, MetricRange>,
}

/// Triangular wave over the tick counter: 0 at tick 0 and at
/// `tick == cycle_ticks`, 1 at `cycle_ticks / 2`, period `cycle_ticks`.
pub fn triangular_factor(tick: u32, cycle_ticks: u32) -> f64 {
    if cycle_ticks == 0 {
        return 0.0;
    }
    let half = cycle_ticks as f64 / 2.0;
    1.0 - ((tick % cycle_ticks) as f64 - half).abs() / half
}

/// Resolves one spec into a concrete color.
///
/// Never fails: unresolvable metric keys and degenerate ranges fall back
/// to factor 0 (the gradient's start color) with a logged warning.
pub fn resolve(spec: &ColorSpec, ctx: &ResolveContext<'_>) -> Rgb {
    match spec {
        ColorSpec::Literal(color) => *color,
        ColorSpec::Random => Rgb::random(),
        ColorSpec::Pulse { start, end } => {
            Rgb::interpolate(*start, *end, triangular_factor(ctx.tick, ctx.cycle_ticks))
        }
        ColorSpec::Keyed { start, end, key } => {
            Rgb::interpolate(*start, *end, keyed_factor(key, ctx))
        }
    }
}

fn keyed_factor(key: &GradientKey, ctx: &ResolveContext<'_>) -> f64 {
    match key {
        GradientKey::Seconds => ctx.clock.second as f64 / 59.0,
        GradientKey::Minutes => ctx.clock.minute as f64 / 59.0,
        GradientKey::Hours => ctx.clock.hour as f64 / 23.0,
        GradientKey::Metric(name) => metric_factor(name, ctx),
    }
}

fn metric_factor(name: &str, ctx: &ResolveContext<'_>) -> f64 {
    let Some(&value) = ctx.metrics.get(name) else {
        tracing::warn!("metric '{name}' not available, using gradient start color");
        return 0.0;
    };
    let Some(range) = ctx.ranges.get(name) else {
        tracing::warn!("metric '{name}' has no configured range, using gradient start color");
        return 0.0;
    };
    if range.min == range.max {
        tracing::warn!("metric '{name}' min and max are equal, using gradient start color");
        return 0.0;
    }
    let factor = (value - range.min) / (range.max - range.min);
    if factor > 1.0 {
        tracing::warn!("metric '{name}' value {value} exceeds max {}, clamping", range.max);
        1.0
    } else if factor < 0.0 {
        tracing::warn!("metric '{name}' value {value} below min {}, clamping", range.min);
        0.0
    } else {
        factor
    }
}
