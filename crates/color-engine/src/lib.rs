// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # color-engine
//!
//! Evaluates configured per-LED color specifications into concrete RGB
//! colors. A spec is one of:
//!
//! - a literal hex color (`"ffe000"`),
//! - the token `"random"` (a fresh random color on every resolution),
//! - a pulsing gradient `"start-end"` driven by the rendering-cycle tick
//!   counter (triangular wave, period = one cycle),
//! - a keyed gradient `"start-end-key"` where the key is a wall-clock unit
//!   (`seconds`, `minutes`, `hours`) or a metric name normalized against
//!   its configured min/max range.
//!
//! Resolution takes a [`ResolveContext`] carrying the tick counter, the
//! wall clock, and the current metric values, and is idempotent within a
//! tick for everything except `random`.

mod clock;
mod error;
mod resolver;
mod rgb;
mod spec;

pub use clock::WallClock;
pub use error::ColorError;
pub use resolver::{resolve, triangular_factor, MetricRange, ResolveContext};
pub use rgb::{Rgb, DEFAULT_COLOR, FALLBACK_COLOR};
pub use spec::{ColorSpec, GradientKey};
